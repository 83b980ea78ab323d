use clap::Subcommand;
use crate::config::constants::DEFAULT_MESSAGE_CONTENT;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Deliver one message to the configured webhook
    Send {
        #[clap(short = 'm', long, default_value = DEFAULT_MESSAGE_CONTENT)]
        content: String,
        /// Fail immediately on HTTP 429 instead of waiting and retrying
        #[clap(long)]
        no_rate_limit_retry: bool,
    },
    /// Write a sample config file
    Init,
    /// Check the config file without sending anything
    Validate,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Send {
            content: DEFAULT_MESSAGE_CONTENT.to_string(),
            no_rate_limit_retry: false,
        }
    }
}
