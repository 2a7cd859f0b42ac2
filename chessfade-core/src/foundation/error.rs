/// Convenience result type used across chessfade.
pub type ChessfadeResult<T> = Result<T, ChessfadeError>;

/// Top-level error taxonomy used by the extractor, compositor and pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ChessfadeError {
    /// Requested move window violates `1 <= start <= end`.
    #[error("invalid move range: {start}-{end}")]
    InvalidRange {
        /// First requested ply.
        start: u32,
        /// Last requested ply (inclusive).
        end: u32,
    },

    /// PGN text could not be turned into a playable game.
    #[error("pgn parse error: {0}")]
    ParseFailure(String),

    /// The game ended before the requested window was filled.
    #[error("insufficient moves: game has only {total} moves, but moves {start}-{end} were requested")]
    InsufficientMoves {
        /// Total plies applied while walking the mainline.
        total: u32,
        /// First requested ply.
        start: u32,
        /// Last requested ply (inclusive).
        end: u32,
    },

    /// Compositor received no positions.
    #[error("empty sequence: at least one position is required")]
    EmptySequence,

    /// Compression factor is zero or shrinks the board to nothing.
    #[error("invalid compression: {0}")]
    InvalidCompression(String),

    /// Intensity bounds violate `0 <= min <= max <= 1`.
    #[error("invalid intensity range: {0}")]
    InvalidIntensityRange(String),

    /// Board rasterization failed.
    #[error("render error: {0}")]
    RenderFailure(String),

    /// Invalid settings file or missing required setting.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChessfadeError {
    /// Build a [`ChessfadeError::InvalidRange`] value.
    pub fn invalid_range(start: u32, end: u32) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Build a [`ChessfadeError::ParseFailure`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseFailure(msg.into())
    }

    /// Build a [`ChessfadeError::InvalidCompression`] value.
    pub fn compression(msg: impl Into<String>) -> Self {
        Self::InvalidCompression(msg.into())
    }

    /// Build a [`ChessfadeError::InvalidIntensityRange`] value.
    pub fn intensity(msg: impl Into<String>) -> Self {
        Self::InvalidIntensityRange(msg.into())
    }

    /// Build a [`ChessfadeError::RenderFailure`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::RenderFailure(msg.into())
    }

    /// Build a [`ChessfadeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
