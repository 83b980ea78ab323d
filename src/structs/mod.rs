pub mod cli;
pub mod config;
pub mod delivery_report;
pub mod validation_result;
pub mod webhook_message;
