use crate::config::constants::{DEFAULT_MAX_RATE_LIMIT_RETRIES, DEFAULT_TIMEOUT_SECS};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_rate_limit_retry() -> bool {
        true
    }

    pub fn default_max_rate_limit_retries() -> u32 {
        DEFAULT_MAX_RATE_LIMIT_RETRIES
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }
}
