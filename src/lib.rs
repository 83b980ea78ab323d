pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod workers;
