use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{NotifierError, NotifierResult};
use crate::services::webhook_client::WebhookClient;
use crate::structs::delivery_report::DeliveryReport;
use crate::structs::webhook_message::WebhookMessage;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> NotifierResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Send { content, no_rate_limit_retry } => {
                self.send_command(&content, !no_rate_limit_retry).await.map(|_| ())
            }
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// Loads the config, builds one message and delivers it. Rate-limit retry
    /// is on only when both the config and the caller allow it.
    pub async fn send_command(&self, content: &str, rate_limit_retry: bool) -> NotifierResult<DeliveryReport> {
        let config = ConfigManager::load(self.config_path.as_deref())?;

        let message = WebhookMessage::from_config(&config.discord, content)
            .with_rate_limit_retry(config.delivery.rate_limit_retry && rate_limit_retry);

        let client = WebhookClient::new(&config.delivery)?;
        let report = client.execute(&message).await?;

        log::info!(
            "✅ Message delivered as '{}' (HTTP {}, {} attempt{})",
            message.username,
            report.status,
            report.attempts,
            if report.attempts == 1 { "" } else { "s" }
        );

        Ok(report)
    }

    fn init_command(&self) -> NotifierResult<()> {
        log::info!("🚀 Initializing webhook-notifier configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} and set your webhook URL.", path.display());
        log::info!("🔧 Run 'webhook-notifier validate' to check your configuration.");

        Ok(())
    }

    fn validate_command(&self) -> NotifierResult<()> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        let result = ConfigManager::validate_config(&config);
        result.print_summary();

        match result.errors.first() {
            None => Ok(()),
            Some(first) => Err(NotifierError::validation_error(
                &first.field,
                &first.value,
                &first.constraint,
                Some("fix the errors listed above and run 'webhook-notifier validate' again"),
            )),
        }
    }
}
