use shakmaty::{CastlingMode, Chess, fen::Fen};

use crate::foundation::error::{ChessfadeError, ChessfadeResult};
use crate::pgn::lexer::{GameResult, TokenKind, lex};

/// One game's tag pairs and mainline, as read from PGN text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PgnGame {
    /// Tag pairs in source order.
    pub headers: Vec<(String, String)>,
    /// Mainline moves in SAN, variations and commentary removed.
    pub moves: Vec<String>,
    /// Terminal marker, if the movetext had one.
    pub result: Option<GameResult>,
}

impl PgnGame {
    /// First value of tag `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Standard initial position, or the `FEN` tag's position when present.
    pub fn starting_position(&self) -> ChessfadeResult<Chess> {
        let Some(fen) = self.header("FEN") else {
            return Ok(Chess::default());
        };
        let setup: Fen = fen
            .trim()
            .parse()
            .map_err(|e| ChessfadeError::parse(format!("invalid FEN tag '{fen}': {e}")))?;
        setup
            .into_position(CastlingMode::Standard)
            .map_err(|e| ChessfadeError::parse(format!("illegal FEN position '{fen}': {e}")))
    }
}

/// Parse the first game in `text`.
///
/// Anything after the game's result marker is ignored, so a whole source can be
/// passed when only its first game is wanted.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_game(text: &str) -> ChessfadeResult<PgnGame> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let tokens = lex(text)?;

    let mut game = PgnGame::default();
    let mut depth = 0usize;
    let mut in_movetext = false;

    for tok in tokens {
        match tok.kind {
            TokenKind::Tag { name, value } => {
                if in_movetext {
                    // Start of the next game.
                    break;
                }
                game.headers.push((name, value));
            }
            TokenKind::VariationStart => {
                in_movetext = true;
                depth += 1;
            }
            TokenKind::VariationEnd => {
                if depth == 0 {
                    return Err(ChessfadeError::parse(format!(
                        "at byte {}: unbalanced ')'",
                        tok.span.start
                    )));
                }
                depth -= 1;
            }
            TokenKind::San(san) => {
                in_movetext = true;
                if depth == 0 {
                    game.moves.push(san);
                }
            }
            TokenKind::Result(result) => {
                if depth == 0 {
                    game.result = Some(result);
                    break;
                }
            }
            TokenKind::MoveNumber(_) | TokenKind::Nag(_) | TokenKind::Comment(_) => {
                in_movetext = true;
            }
        }
    }

    if depth > 0 {
        return Err(ChessfadeError::parse("unterminated variation '('"));
    }
    if game.headers.is_empty() && game.moves.is_empty() && game.result.is_none() {
        return Err(ChessfadeError::parse("no game found"));
    }
    Ok(game)
}

/// Split a PGN source into per-game slices.
///
/// A new game starts at a tag-pair line that follows movetext, or at the first non-empty
/// line after a line ending in a result marker. Splitting is line based so that a
/// malformed game does not prevent its neighbours from being read.
pub fn split_games(text: &str) -> Vec<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut games = Vec::new();
    let mut start: Option<usize> = None;
    let mut seen_movetext = false;
    let mut after_result = false;
    let mut in_comment = false;
    let mut offset = 0usize;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        let line_start = offset;
        offset += line.len();

        if trimmed.is_empty() {
            continue;
        }

        if !in_comment {
            let is_tag = trimmed.starts_with('[');
            if after_result || (is_tag && seen_movetext) {
                if let Some(s) = start {
                    games.push(&text[s..line_start]);
                }
                start = None;
                seen_movetext = false;
                after_result = false;
            }
            if !is_tag && !trimmed.starts_with('%') {
                seen_movetext = true;
            }
        }
        if start.is_none() {
            start = Some(line_start);
        }

        if in_comment || !trimmed.starts_with('%') {
            for c in line.chars() {
                match c {
                    '{' => in_comment = true,
                    '}' => in_comment = false,
                    ';' if !in_comment => break,
                    _ => {}
                }
            }
        }

        if !in_comment
            && seen_movetext
            && trimmed
                .split_whitespace()
                .last()
                .and_then(GameResult::from_symbol)
                .is_some()
        {
            after_result = true;
        }
    }

    if let Some(s) = start
        && !text[s..].trim().is_empty()
    {
        games.push(&text[s..]);
    }
    games
}

#[cfg(test)]
#[path = "../../tests/unit/pgn/reader.rs"]
mod tests;
