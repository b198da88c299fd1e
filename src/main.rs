use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::app::App;
use grid_snake::game::GameConfig;
use grid_snake::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 24x24 grid, in the terminal")]
struct Cli {
    /// JSON file with game settings; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting tick interval in milliseconds
    #[arg(long)]
    base_delay: Option<u64>,

    /// Fastest tick interval in milliseconds
    #[arg(long)]
    min_delay: Option<u64>,

    /// Milliseconds shaved off the tick interval per food eaten
    #[arg(long)]
    speed_step: Option<u64>,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(ms) = self.base_delay {
            config.base_delay_ms = ms;
        }
        if let Some(ms) = self.min_delay {
            config.min_delay_ms = ms;
        }
        if let Some(ms) = self.speed_step {
            config.speed_step_ms = ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;
    let config = cli.game_config()?;
    log::info!("starting with {:?}", config);

    let mut app = App::new(config, cli.seed);
    app.run().await
}
