use clap::Parser;
use std::path::PathBuf;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "webhook-notifier", version)]
#[clap(about = "Send a message to the configured Discord webhook", long_about = None)]
pub struct Cli {
    /// Path to the TOML config (defaults to ~/webhook-notifier/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Running without a subcommand sends the default test message.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}
