use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chessfade", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every game of every `.pgn` file in a directory.
    Batch(BatchArgs),
    /// Render one game of one PGN file.
    Game(GameArgs),
}

#[derive(Parser, Debug)]
struct WindowArgs {
    /// First move (ply) of the window, oldest.
    #[arg(long)]
    start_move: Option<u32>,

    /// Last move (ply) of the window, newest.
    #[arg(long)]
    end_move: Option<u32>,

    /// Size reduction factor (1 = none, 2 = half, 4 = quarter, ...).
    #[arg(long)]
    compression_factor: Option<u32>,

    /// Board edge in pixels before compression.
    #[arg(long)]
    base_size: Option<u32>,

    /// Weight of the oldest position.
    #[arg(long)]
    min_intensity: Option<f32>,

    /// Weight of the newest position.
    #[arg(long)]
    max_intensity: Option<f32>,

    /// JSON settings file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory with `.pgn` files.
    #[arg(long, default_value = "dataset/testpgns")]
    pgn_dir: PathBuf,

    /// Output directory for images.
    #[arg(long, default_value = "output/parsed_games")]
    output_dir: PathBuf,

    #[command(flatten)]
    window: WindowArgs,

    /// Process the games of each file in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Write a JSON summary of the run.
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GameArgs {
    /// Input PGN file.
    #[arg(long)]
    pgn: PathBuf,

    /// Game number within the file (1-based).
    #[arg(long, default_value_t = 1)]
    game: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    window: WindowArgs,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Batch(args) => cmd_batch(args),
        Command::Game(args) => cmd_game(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_settings(window: &WindowArgs) -> anyhow::Result<chessfade::Settings> {
    let mut settings = match &window.config {
        Some(path) => chessfade::Settings::from_path(path)?,
        None => chessfade::Settings::default(),
    };
    if let Some(v) = window.start_move {
        settings.start_move = Some(v);
    }
    if let Some(v) = window.end_move {
        settings.end_move = Some(v);
    }
    if let Some(v) = window.compression_factor {
        settings.compression_factor = v;
    }
    if let Some(v) = window.base_size {
        settings.base_size = v;
    }
    if let Some(v) = window.min_intensity {
        settings.min_intensity = v;
    }
    if let Some(v) = window.max_intensity {
        settings.max_intensity = v;
    }
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let mut settings = resolve_settings(&args.window)?;
    if args.parallel {
        settings.parallel = true;
    }
    if args.threads.is_some() {
        settings.threads = args.threads;
    }
    let opts = settings.batch_opts()?;

    let renderer = chessfade::SvgBoardRenderer::new();
    let run = chessfade::process_pgn_dir(&args.pgn_dir, &args.output_dir, &opts, &renderer)
        .with_context(|| format!("process pgn dir '{}'", args.pgn_dir.display()))?;

    for file in &run.files {
        eprintln!(
            "{}: {}/{} games",
            file.source.display(),
            file.games_written(),
            file.games.len()
        );
    }
    eprintln!(
        "wrote {} images to {}",
        run.games_written(),
        run.output_dir.display()
    );

    if let Some(path) = &args.summary_json {
        std::fs::write(path, run.to_json()?)
            .with_context(|| format!("write summary '{}'", path.display()))?;
    }
    Ok(())
}

fn cmd_game(args: GameArgs) -> anyhow::Result<()> {
    let opts = resolve_settings(&args.window)?.batch_opts()?;

    let text = std::fs::read_to_string(&args.pgn)
        .with_context(|| format!("read pgn '{}'", args.pgn.display()))?;
    let games = chessfade::split_games(&text);
    let game_text = args
        .game
        .checked_sub(1)
        .and_then(|i| games.get(i))
        .with_context(|| {
            format!(
                "game {} not found in '{}' ({} games)",
                args.game,
                args.pgn.display(),
                games.len()
            )
        })?;

    let img = chessfade::render_game(game_text, &opts, &chessfade::SvgBoardRenderer::new())?;
    chessfade::write_png(&args.out, &img)?;

    eprintln!("wrote {} ({}x{})", args.out.display(), img.width, img.height);
    Ok(())
}
