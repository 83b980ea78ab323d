use serde::{Deserialize, Serialize};
use crate::config::constants::timeout_duration;
use crate::helpers::config_helper::ConfigHelper;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeliveryConfig {
    #[serde(default = "ConfigHelper::default_rate_limit_retry")]
    pub rate_limit_retry: bool,

    #[serde(default = "ConfigHelper::default_max_rate_limit_retries")]
    pub max_rate_limit_retries: u32,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl DeliveryConfig {
    pub fn timeout(&self) -> Duration {
        timeout_duration(self.timeout_secs)
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            rate_limit_retry: ConfigHelper::default_rate_limit_retry(),
            max_rate_limit_retries: ConfigHelper::default_max_rate_limit_retries(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}
