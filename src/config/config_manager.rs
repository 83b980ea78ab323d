use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_USERNAME_LENGTH};
use crate::errors::{NotifierError, NotifierResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::{FieldError, ValidationResult};

const SAMPLE_CONFIG: &str = r#"# Webhook Notifier Configuration

[discord]
# Full webhook URL, as copied from the channel's Integrations settings
webhook = "https://discord.com/api/webhooks/<id>/<token>"

# Display name the message is posted under
webhook_name = "Notifier"

# Optional avatar override
# avatar_url = "https://example.com/avatar.png"

[delivery]
# Wait and resend when the webhook answers 429 Too Many Requests
rate_limit_retry = true

# Give up after this many rate-limit retries
max_rate_limit_retries = 5

# Per-request timeout in seconds
timeout_secs = 30
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map_or_else(Self::default_config_path, Path::to_path_buf)
    }

    pub fn load(path: Option<&Path>) -> NotifierResult<Config> {
        let location = Self::resolve_path(path);
        let display = location.display().to_string();

        if !location.exists() {
            return Err(NotifierError::config_file_error(&display, "file not found"));
        }

        log::info!("📋 Loading config from: {display}");
        let content = fs::read_to_string(&location)
            .map_err(|e| NotifierError::config_file_error(&display, &e.to_string()))?;

        toml::from_str(&content).map_err(|e| NotifierError::config_file_error(&display, e.message()))
    }

    pub(crate) fn parse(content: &str) -> NotifierResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn create_sample_config(path: Option<&Path>) -> NotifierResult<PathBuf> {
        let config_file_path = Self::resolve_path(path);

        if let Some(parent) = config_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&config_file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(NotifierError::config_file_error(
                    &config_file_path.display().to_string(),
                    "file already exists, refusing to overwrite",
                ));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(SAMPLE_CONFIG.as_bytes())?;

        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let webhook = config.discord.webhook.trim();
        if webhook.is_empty() {
            errors.push(field_error("discord.webhook", webhook, "must not be empty"));
        } else {
            match Url::parse(webhook) {
                Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
                Ok(url) => errors.push(field_error(
                    "discord.webhook",
                    webhook,
                    &format!("has unsupported scheme '{}'", url.scheme()),
                )),
                Err(e) => errors.push(field_error("discord.webhook", webhook, &format!("is not a valid URL: {e}"))),
            }
        }

        let name = config.discord.webhook_name.trim();
        if name.is_empty() {
            errors.push(field_error("discord.webhook_name", name, "must not be empty"));
        } else if name.chars().count() > MAX_USERNAME_LENGTH {
            warnings.push(format!(
                "discord.webhook_name is longer than {MAX_USERNAME_LENGTH} characters and will be rejected by Discord"
            ));
        }

        if config.delivery.timeout_secs == 0 {
            errors.push(field_error("delivery.timeout_secs", "0", "must be greater than zero"));
        }

        if !config.delivery.rate_limit_retry {
            warnings.push("delivery.rate_limit_retry is disabled, 429 responses will fail the run".to_string());
        }

        ValidationResult::from_findings(errors, warnings)
    }

}

fn field_error(field: &str, value: &str, constraint: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        value: value.to_string(),
        constraint: constraint.to_string(),
    }
}
