use shakmaty::{Board, Chess, Position as _, san::San};

use crate::foundation::core::MoveRange;
use crate::foundation::error::{ChessfadeError, ChessfadeResult};
use crate::pgn::reader::{PgnGame, parse_game};

/// Immutable snapshot of a game after a given ply.
#[derive(Clone, Debug)]
pub struct Position {
    ply: u32,
    san: String,
    chess: Chess,
}

impl Position {
    pub(crate) fn new(ply: u32, san: impl Into<String>, chess: Chess) -> Self {
        Self {
            ply,
            san: san.into(),
            chess,
        }
    }

    /// 1-based ply after which this snapshot was taken.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// SAN of the move that produced this position, as written in the source.
    pub fn san(&self) -> &str {
        &self.san
    }

    /// Piece placement.
    pub fn board(&self) -> &Board {
        self.chess.board()
    }

    /// Full game state (side to move, castling rights, ...).
    pub fn chess(&self) -> &Chess {
        &self.chess
    }
}

/// Extract snapshots for plies `start..=end` from one game's PGN text.
///
/// The range is validated before any parsing. The result is ordered oldest to newest.
pub fn extract_positions(pgn_text: &str, start: u32, end: u32) -> ChessfadeResult<Vec<Position>> {
    let range = MoveRange::new(start, end)?;
    let game = parse_game(pgn_text)?;
    extract_from_game(&game, range)
}

/// Walk an already parsed game's mainline and snapshot the plies inside `range`.
#[tracing::instrument(skip(game), fields(moves = game.moves.len()))]
pub fn extract_from_game(game: &PgnGame, range: MoveRange) -> ChessfadeResult<Vec<Position>> {
    let mut chess = game.starting_position()?;
    let mut out = Vec::with_capacity((range.len() as usize).min(game.moves.len()));
    let mut ply = 0u32;

    for token in &game.moves {
        ply += 1;
        let san = parse_san(token)
            .map_err(|e| ChessfadeError::parse(format!("ply {ply}: invalid SAN '{token}': {e}")))?;
        let m = san
            .to_move(&chess)
            .map_err(|e| ChessfadeError::parse(format!("ply {ply}: illegal move '{token}': {e}")))?;
        chess.play_unchecked(&m);

        if range.contains(ply) {
            out.push(Position::new(ply, token.as_str(), chess.clone()));
        }
    }

    // Collected count against the window size, not `end` against the total.
    if (out.len() as u32) < range.len() {
        return Err(ChessfadeError::InsufficientMoves {
            total: ply,
            start: range.start,
            end: range.end,
        });
    }

    tracing::debug!(positions = out.len(), total_plies = ply, "extracted window");
    Ok(out)
}

fn parse_san(token: &str) -> Result<San, shakmaty::san::ParseSanError> {
    let bare = token.trim_end_matches(['+', '#']);
    match bare {
        "0-0" => "O-O".parse(),
        "0-0-0" => "O-O-O".parse(),
        _ => bare.parse(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/extract.rs"]
mod tests;
