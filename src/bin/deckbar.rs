use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use deckbar::{BarConfig, Deck, EngineOpts, ProgressBarEngine};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deckbar", version)]
struct Cli {
    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the auto-detected chapter boundaries.
    Chapters(ChaptersArgs),
    /// Remove old progress bars and draw new ones on every slide.
    Draw(DrawArgs),
    /// Remove all progress bars.
    Remove(RemoveArgs),
}

#[derive(Parser, Debug)]
struct ChaptersArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Bar config JSON (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the layout name that marks chapter slides.
    #[arg(long)]
    marker_layout: Option<String>,
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Bar config JSON (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output deck JSON; the input is overwritten when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Compute page layouts in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct RemoveArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Bar config JSON, for a non-default shape tag.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output deck JSON; the input is overwritten when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Chapters(args) => cmd_chapters(args),
        Command::Draw(args) => cmd_draw(args),
        Command::Remove(args) => cmd_remove(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BarConfig> {
    match path {
        Some(p) => BarConfig::from_path(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(BarConfig::default()),
    }
}

fn load_deck(path: &Path) -> anyhow::Result<Deck> {
    Deck::from_path(path).with_context(|| format!("load deck '{}'", path.display()))
}

fn cmd_chapters(args: ChaptersArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(layout) = args.marker_layout {
        config = config.with_marker_layout(layout)?;
    }
    let deck = load_deck(&args.in_path)?;
    let boundaries = ProgressBarEngine::new(config).boundaries(&deck)?;

    for b in boundaries.as_slice() {
        println!("{}\t{}", b.start, b.label);
    }
    Ok(())
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut deck = load_deck(&args.in_path)?;

    let engine = ProgressBarEngine::new(config).with_opts(EngineOpts {
        parallel: args.parallel,
        threads: args.threads,
    });
    let stats = engine.redraw_all(&mut deck)?;

    let out = args.out.as_deref().unwrap_or(&args.in_path);
    deck.save(out)?;
    eprintln!(
        "drew {} shapes on {} pages ({} chapters, {} old shapes removed); wrote {}",
        stats.shapes_drawn,
        stats.pages,
        stats.chapters,
        stats.shapes_removed,
        out.display()
    );
    Ok(())
}

fn cmd_remove(args: RemoveArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut deck = load_deck(&args.in_path)?;

    let removed = ProgressBarEngine::new(config).remove_all(&mut deck)?;

    let out = args.out.as_deref().unwrap_or(&args.in_path);
    deck.save(out)?;
    eprintln!("removed {removed} shapes; wrote {}", out.display());
    Ok(())
}
