use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::composite::temporal::{TemporalOptions, overlay_temporal_sequence};
use crate::foundation::core::{FrameRgb8, MoveRange};
use crate::foundation::error::{ChessfadeError, ChessfadeResult};
use crate::pgn::reader::{parse_game, split_games};
use crate::render::raster::BoardRenderer;
use crate::sequence::extract::extract_from_game;

/// Threading controls for batch processing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Threading {
    /// Process the games of each source on a rayon pool.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Everything a batch run needs besides paths and the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchOpts {
    /// Plies to composite.
    pub range: MoveRange,
    /// Compositor settings.
    pub temporal: TemporalOptions,
    /// Threading controls.
    pub threading: Threading,
}

impl BatchOpts {
    /// Check range-independent settings up front so a bad run aborts before any IO.
    pub fn validate(&self) -> ChessfadeResult<()> {
        self.temporal.validate()?;
        if let Some(0) = self.threading.threads {
            return Err(ChessfadeError::config("'threads' must be >= 1 when set"));
        }
        Ok(())
    }
}

/// Outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GameReport {
    /// 1-based game number within its source.
    pub game: usize,
    /// Written image, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Failure message, otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one PGN source.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FileSummary {
    /// PGN file that was read.
    pub source: PathBuf,
    /// Per-game outcomes, in source order.
    pub games: Vec<GameReport>,
}

impl FileSummary {
    /// Number of images written.
    pub fn games_written(&self) -> usize {
        self.games.iter().filter(|g| g.output.is_some()).count()
    }
}

/// Outcome of a directory run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    /// Directory images were written to.
    pub output_dir: PathBuf,
    /// Per-source outcomes, sorted by file name.
    pub files: Vec<FileSummary>,
}

impl RunSummary {
    /// Number of images written across all sources.
    pub fn games_written(&self) -> usize {
        self.files.iter().map(FileSummary::games_written).sum()
    }

    /// Pretty JSON for `--summary-json`.
    pub fn to_json(&self) -> ChessfadeResult<String> {
        serde_json::to_string_pretty(self)
            .context("serialize run summary")
            .map_err(ChessfadeError::from)
    }
}

/// `<stem>_game<NN>.png`, `NN` zero-padded to two digits.
pub fn output_file_name(stem: &str, game: usize) -> String {
    format!("{stem}_game{game:02}.png")
}

/// Extract and composite one game's window.
pub fn render_game(
    pgn_text: &str,
    opts: &BatchOpts,
    renderer: &dyn BoardRenderer,
) -> ChessfadeResult<FrameRgb8> {
    let game = parse_game(pgn_text)?;
    let positions = extract_from_game(&game, opts.range)?;
    overlay_temporal_sequence(&positions, &opts.temporal, renderer)
}

/// Write an RGB8 frame as PNG, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRgb8) -> ChessfadeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Render every game in one PGN file into `output_dir`.
///
/// A game that fails is logged and recorded; the remaining games are still processed.
#[tracing::instrument(skip(opts, renderer), fields(source = %pgn_path.display()))]
pub fn process_pgn_file(
    pgn_path: &Path,
    output_dir: &Path,
    opts: &BatchOpts,
    renderer: &dyn BoardRenderer,
) -> ChessfadeResult<FileSummary> {
    opts.validate()?;
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir '{}'", output_dir.display()))?;
    let text = std::fs::read_to_string(pgn_path)
        .with_context(|| format!("read pgn '{}'", pgn_path.display()))?;

    let stem = pgn_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "games".to_owned());
    let games = split_games(&text);

    let run_one = |(idx, game_text): (usize, &&str)| -> GameReport {
        let game = idx + 1;
        let out_path = output_dir.join(output_file_name(&stem, game));
        match render_game(game_text, opts, renderer).and_then(|img| {
            write_png(&out_path, &img)?;
            Ok(img)
        }) {
            Ok(img) => {
                tracing::info!(
                    file = %out_path.display(),
                    width = img.width,
                    height = img.height,
                    "wrote composite"
                );
                GameReport {
                    game,
                    output: Some(out_path),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(source = %stem, game, error = %e, "game failed");
                GameReport {
                    game,
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let reports: Vec<GameReport> = if opts.threading.parallel {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| games.par_iter().enumerate().map(run_one).collect())
    } else {
        games.iter().enumerate().map(run_one).collect()
    };

    let summary = FileSummary {
        source: pgn_path.to_path_buf(),
        games: reports,
    };
    tracing::info!(
        games = summary.games.len(),
        written = summary.games_written(),
        "processed source"
    );
    Ok(summary)
}

/// Render every game of every `*.pgn` file in `pgn_dir`, sorted by file name.
#[tracing::instrument(skip(opts, renderer), fields(pgn_dir = %pgn_dir.display()))]
pub fn process_pgn_dir(
    pgn_dir: &Path,
    output_dir: &Path,
    opts: &BatchOpts,
    renderer: &dyn BoardRenderer,
) -> ChessfadeResult<RunSummary> {
    if !pgn_dir.is_dir() {
        return Err(ChessfadeError::config(format!(
            "pgn directory does not exist: {}",
            pgn_dir.display()
        )));
    }
    opts.validate()?;

    let sources = list_pgn_files(pgn_dir)?;
    if sources.is_empty() {
        return Err(ChessfadeError::config(format!(
            "no .pgn files found in {}",
            pgn_dir.display()
        )));
    }
    tracing::info!(
        sources = sources.len(),
        start_move = opts.range.start,
        end_move = opts.range.end,
        compression_factor = opts.temporal.compression_factor,
        output_dir = %output_dir.display(),
        "starting batch"
    );

    let mut files = Vec::with_capacity(sources.len());
    for source in &sources {
        files.push(process_pgn_file(source, output_dir, opts, renderer)?);
    }

    Ok(RunSummary {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}

fn list_pgn_files(dir: &Path) -> ChessfadeResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("list pgn dir '{}'", dir.display()))?;
    let mut out = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("list pgn dir '{}'", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "pgn") {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> ChessfadeResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ChessfadeError::config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
