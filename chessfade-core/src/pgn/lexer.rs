use crate::foundation::error::{ChessfadeError, ChessfadeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

/// Terminal game marker in movetext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum GameResult {
    /// `1-0`
    WhiteWins,
    /// `0-1`
    BlackWins,
    /// `1/2-1/2`
    Draw,
    /// `*`
    Ongoing,
}

impl GameResult {
    /// PGN spelling of the marker.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WhiteWins => "1-0",
            Self::BlackWins => "0-1",
            Self::Draw => "1/2-1/2",
            Self::Ongoing => "*",
        }
    }

    pub(crate) fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "1-0" => Some(Self::WhiteWins),
            "0-1" => Some(Self::BlackWins),
            "1/2-1/2" => Some(Self::Draw),
            "*" => Some(Self::Ongoing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Tag { name: String, value: String },
    MoveNumber(u32),
    San(String),
    Nag(u32),
    Comment(String),
    VariationStart,
    VariationEnd,
    Result(GameResult),
}

fn is_symbol_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'#' | b'=' | b':' | b'-' | b'/')
}

pub(crate) fn lex(input: &str) -> ChessfadeResult<Vec<Token>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;
    let mut line_start = true;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' {
            line_start = true;
            i += 1;
            continue;
        }
        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        let at_line_start = line_start;
        line_start = false;

        // Escape line: `%` in the first column hides the rest of the line.
        if b == b'%' && at_line_start {
            i = skip_line(bytes, i);
            continue;
        }

        match b {
            b';' => {
                let end = skip_line(bytes, i);
                out.push(Token {
                    kind: TokenKind::Comment(input[i + 1..end].trim().to_owned()),
                    span: Span { start, end },
                });
                i = end;
            }
            b'{' => {
                let close = input[i + 1..]
                    .find('}')
                    .map(|off| i + 1 + off)
                    .ok_or_else(|| lex_error(start, "unterminated comment"))?;
                out.push(Token {
                    kind: TokenKind::Comment(input[i + 1..close].trim().to_owned()),
                    span: Span {
                        start,
                        end: close + 1,
                    },
                });
                i = close + 1;
            }
            b'[' => {
                let (kind, end) = lex_tag(input, i)?;
                out.push(Token {
                    kind,
                    span: Span { start, end },
                });
                i = end;
            }
            b'(' | b')' => {
                i += 1;
                let kind = if b == b'(' {
                    TokenKind::VariationStart
                } else {
                    TokenKind::VariationEnd
                };
                out.push(Token {
                    kind,
                    span: Span { start, end: i },
                });
            }
            b'$' => {
                i += 1;
                let digits = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let n: u32 = input[digits..i]
                    .parse()
                    .map_err(|_| lex_error(start, "invalid NAG (expected digits after '$')"))?;
                out.push(Token {
                    kind: TokenKind::Nag(n),
                    span: Span { start, end: i },
                });
            }
            b'*' => {
                i += 1;
                out.push(Token {
                    kind: TokenKind::Result(GameResult::Ongoing),
                    span: Span { start, end: i },
                });
            }
            // Suffix annotations (`!`, `?!`, ...) carry no position information.
            b'!' | b'?' => {
                while i < bytes.len() && matches!(bytes[i], b'!' | b'?') {
                    i += 1;
                }
            }
            // Stray dots, e.g. `12 ... Nf6`.
            b'.' => {
                while i < bytes.len() && bytes[i] == b'.' {
                    i += 1;
                }
            }
            _ if is_symbol_byte(b) => {
                while i < bytes.len() && is_symbol_byte(bytes[i]) {
                    i += 1;
                }
                let s = &input[start..i];
                let kind = if let Some(result) = GameResult::from_symbol(s) {
                    TokenKind::Result(result)
                } else if s.bytes().all(|c| c.is_ascii_digit()) {
                    let n: u32 = s
                        .parse()
                        .map_err(|_| lex_error(start, "move number out of range"))?;
                    while i < bytes.len() && bytes[i] == b'.' {
                        i += 1;
                    }
                    TokenKind::MoveNumber(n)
                } else {
                    TokenKind::San(s.to_owned())
                };
                out.push(Token {
                    kind,
                    span: Span { start, end: i },
                });
            }
            _ => {
                let c = input[i..].chars().next().unwrap_or('?');
                return Err(lex_error(start, format!("unexpected character '{c}'")));
            }
        }
    }

    Ok(out)
}

fn lex_tag(input: &str, open: usize) -> ChessfadeResult<(TokenKind, usize)> {
    let bytes = input.as_bytes();
    let mut i = skip_ws(bytes, open + 1);

    let name_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
    }
    if name_start == i {
        return Err(lex_error(open, "tag pair is missing a name"));
    }
    let name = input[name_start..i].to_owned();

    i = skip_ws(bytes, i);
    if i >= bytes.len() || bytes[i] != b'"' {
        return Err(lex_error(open, format!("tag '{name}' is missing a quoted value")));
    }
    i += 1;

    let mut value = String::new();
    let mut seg = i;
    loop {
        if i >= bytes.len() {
            return Err(lex_error(open, format!("unterminated value for tag '{name}'")));
        }
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() && matches!(bytes[i + 1], b'"' | b'\\') => {
                value.push_str(&input[seg..i]);
                value.push(bytes[i + 1] as char);
                i += 2;
                seg = i;
            }
            b'"' => {
                value.push_str(&input[seg..i]);
                i += 1;
                break;
            }
            _ => i += 1,
        }
    }

    i = skip_ws(bytes, i);
    if i >= bytes.len() || bytes[i] != b']' {
        return Err(lex_error(open, format!("unterminated tag pair '{name}'")));
    }
    Ok((TokenKind::Tag { name, value }, i + 1))
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn skip_line(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i] != b'\n' {
        i += 1;
    }
    i
}

fn lex_error(offset: usize, msg: impl Into<String>) -> ChessfadeError {
    ChessfadeError::parse(format!("at byte {offset}: {}", msg.into()))
}

#[cfg(test)]
#[path = "../../tests/unit/pgn/lexer.rs"]
mod tests;
