use serde::{Deserialize, Serialize};
use crate::structs::config::delivery_config::DeliveryConfig;
use crate::structs::config::discord_config::DiscordConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub discord: DiscordConfig,

    #[serde(default)]
    pub delivery: DeliveryConfig,
}
