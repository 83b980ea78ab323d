use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "webhook-notifier";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_MESSAGE_CONTENT: &str = "Test";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RATE_LIMIT_RETRIES: u32 = 5;

// Fallback when a 429 carries neither a retry_after field nor a Retry-After header.
pub const DEFAULT_RETRY_AFTER_SECS: f64 = 1.0;
pub const RATE_LIMIT_PADDING_MS: u64 = 150;
// Upper bound on a server-supplied retry delay.
pub const MAX_RETRY_AFTER_SECS: f64 = 300.0;

// Discord rejects usernames longer than this.
pub const MAX_USERNAME_LENGTH: usize = 80;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn rate_limit_padding() -> Duration {
    Duration::from_millis(RATE_LIMIT_PADDING_MS)
}
