mod warranty;

use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "warranty-sheet")]
#[command(about = "Collect product warranty and price information into Google Sheets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self, config: Config) -> Result<()> {
        match &self.command {
            Commands::Warranty => warranty::execute(config).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect warranty information for the configured product codes
    Warranty,
}
