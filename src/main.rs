use anyhow::Result;
use blobworld_lib::app::{App, RunOutcome};
use blobworld_lib::model::config::AppConfig;
use blobworld_lib::ui::renderer::{HeadlessRenderer, Renderer, TraceRenderer};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Seed override for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Directory for stats.csv, ticks.jsonl and summary.json
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Skip writing any output files
    #[arg(long)]
    no_export: bool,

    /// Log a frame description every N ticks at debug level
    #[arg(long)]
    trace_frames: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    blobworld_core::init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    if args.ticks.is_some() {
        config.world.max_ticks = args.ticks;
    }
    config.validate()?;

    let output_dir = (!args.no_export).then(|| args.output_dir.clone());
    let mut app = App::new(config, output_dir)?;

    let handle = app.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.request_shutdown();
        }
    });

    let trace_frames = args.trace_frames;
    let (outcome, exported) = tokio::task::spawn_blocking(move || -> Result<_> {
        let mut renderer: Box<dyn Renderer + Send> = match trace_frames {
            Some(every) => Box::new(TraceRenderer::new(every)),
            None => Box::new(HeadlessRenderer),
        };
        let outcome = app.run(renderer.as_mut())?;
        let exported = app.finish()?;
        Ok((outcome, exported))
    })
    .await??;

    match outcome {
        RunOutcome::Extinct => println!("Population went extinct."),
        RunOutcome::TickLimit => println!("Tick limit reached."),
        RunOutcome::Interrupted => println!("Interrupted."),
    }
    if let Some(paths) = exported {
        println!("Statistics written to {}", paths.stats.display());
    }

    Ok(())
}
