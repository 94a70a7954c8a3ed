mod cli;
mod config;
mod error;
mod logging;
mod models;
mod sheets;
mod vendor;
mod warranty;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(config.environment()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = cli.run(config).await {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
