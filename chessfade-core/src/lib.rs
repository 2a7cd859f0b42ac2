//! chessfade renders a window of a chess game as one temporally-weighted image.
//!
//! # Pipeline overview
//!
//! 1. **Read**: PGN source text -> per-game slices -> [`PgnGame`] (tag pairs + mainline SAN)
//! 2. **Extract**: `PgnGame + MoveRange -> Vec<Position>`, oldest to newest
//! 3. **Render**: each [`Position`] -> [`FrameRgb8`] via a [`BoardRenderer`] (SVG board art, CPU)
//! 4. **Composite**: frames weighted by a linear intensity ramp and merged with a per-pixel
//!    maximum, so the most recent moves dominate wherever frames overlap
//! 5. **Write** (batch): one PNG per game, `<source>_game<NN>.png`
//!
//! Steps 1-4 are pure and synchronous. Games are independent, so the batch pipeline can
//! optionally fan them out on a rayon pool.
#![forbid(unsafe_code)]

mod composite;
mod config;
mod foundation;
mod pgn;
mod pipeline;
mod render;
mod sequence;

pub use composite::temporal::{
    Accumulator, TemporalOptions, intensity_ramp, overlay_temporal_sequence,
};
pub use config::Settings;
pub use foundation::core::{FrameRgb8, MoveRange};
pub use foundation::error::{ChessfadeError, ChessfadeResult};
pub use foundation::math::intensity_at;
pub use pgn::lexer::GameResult;
pub use pgn::reader::{PgnGame, parse_game, split_games};
pub use pipeline::batch::{
    BatchOpts, FileSummary, GameReport, RunSummary, Threading, output_file_name,
    process_pgn_dir, process_pgn_file, render_game, write_png,
};
pub use render::board_svg::{DARK_SQUARE, LIGHT_SQUARE, board_svg};
pub use render::raster::{BoardRenderer, MAX_BOARD_SIZE, SvgBoardRenderer};
pub use render::resample::resize_area;
pub use sequence::extract::{Position, extract_from_game, extract_positions};
