//! Snapline Replay CLI
//!
//! Usage:
//!   snapline-replay [OPTIONS] <SCENE>
//!
//! Options:
//!   -c, --config <FILE>  Partial snapping config (JSON) applied over the scene's
//!   -p, --pretty         Pretty-print each tick
//!   -h, --help           Print help

use std::path::PathBuf;

use clap::Parser;

use snapline_core::SnappingConfigUpdate;
use snapline_replay::{ReplayError, Scene, replay};

#[derive(Parser)]
#[command(name = "snapline-replay")]
#[command(about = "Replay a recorded drag through the guideline engine")]
struct Cli {
    /// Scene file (JSON)
    scene: PathBuf,

    /// Partial snapping config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print each tick instead of one JSON object per line
    #[arg(short, long)]
    pretty: bool,
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let scene = Scene::load(&cli.scene)?;
    let config = match &cli.config {
        Some(path) => Some(SnappingConfigUpdate::from_json(&std::fs::read_to_string(path)?)?),
        None => None,
    };

    for tick in replay(scene, config)? {
        let line = if cli.pretty {
            serde_json::to_string_pretty(&tick)?
        } else {
            serde_json::to_string(&tick)?
        };
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error replaying '{}': {}", cli.scene.display(), e);
        std::process::exit(1);
    }
}
