pub mod config;
pub mod delivery_config;
pub mod discord_config;
