use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shapekit::{init_logging_with, LogFormat, ReplayScript, Replayer, SettingsManager};

#[derive(Parser, Debug)]
#[command(name = "shapekit", version)]
#[command(about = "Replay a recorded canvas session and print the resulting shapes as JSON")]
struct Cli {
    /// Replay script (JSON)
    script: PathBuf,

    /// Settings file to use instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging_with(if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    })?;
    tracing::info!(
        "ShapeKit {} (built {})",
        shapekit::VERSION,
        shapekit::BUILD_DATE
    );

    let config = match &args.config {
        Some(path) => SettingsManager::load_or_default(path),
        None => SettingsManager::load(),
    };

    let script = ReplayScript::load(&args.script)?;
    let mut replayer = Replayer::new(config.designer_state(), config.display.decimal_places);
    let report = replayer
        .run(&script)
        .with_context(|| format!("replaying {}", args.script.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
