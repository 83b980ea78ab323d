use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const RATE_LIMITED_BODY: &str =
    r#"{"message": "You are being rate limited.", "retry_after": 0.01, "global": false}"#;

/// Writes a config with the given webhook URL and name into a fresh temp dir.
/// The returned `TempDir` must outlive the path.
pub fn write_config(webhook: &str, webhook_name: &str, delivery: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let content = format!(
        "[discord]\nwebhook = \"{webhook}\"\nwebhook_name = \"{webhook_name}\"\n\n{delivery}"
    );
    fs::write(&path, content).unwrap();
    (dir, path)
}
