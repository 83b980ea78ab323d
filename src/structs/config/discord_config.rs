use serde::{Deserialize, Serialize};

/// The `[discord]` table. `webhook` and `webhook_name` have no defaults, so a
/// config missing either one fails to load.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DiscordConfig {
    pub webhook: String,

    pub webhook_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
