use std::fmt;
use reqwest::{Client, StatusCode};
use crate::config::constants::rate_limit_padding;
use crate::errors::{NotifierError, NotifierResult};
use crate::services::rate_limit::RateLimit;
use crate::structs::config::delivery_config::DeliveryConfig;
use crate::structs::delivery_report::DeliveryReport;
use crate::structs::webhook_message::WebhookMessage;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    max_rate_limit_retries: u32,
}

impl WebhookClient {
    pub fn new(delivery: &DeliveryConfig) -> NotifierResult<Self> {
        let client = Client::builder()
            .timeout(delivery.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            max_rate_limit_retries: delivery.max_rate_limit_retries,
        })
    }

    /// POSTs the message. A 429 is retried only when the message asks for it,
    /// and at most `max_rate_limit_retries` times.
    pub async fn execute(&self, message: &WebhookMessage) -> NotifierResult<DeliveryReport> {
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            log::debug!("📤 Sending webhook message to {} (attempt {attempts})", message.url);

            let response = self
                .client
                .post(&message.url)
                .json(message)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                return Ok(DeliveryReport {
                    status: status.as_u16(),
                    attempts,
                });
            }

            let headers = response.headers().clone();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    log::debug!("Failed to read webhook response body: {e}");
                    unreadable_body(&e)
                }
            };

            if status == StatusCode::TOO_MANY_REQUESTS && message.rate_limit_retry {
                let rate_limit = RateLimit::from_response(&headers, &body);

                if attempts > self.max_rate_limit_retries {
                    return Err(NotifierError::RateLimited {
                        attempts,
                        retry_after: rate_limit.retry_after,
                    });
                }

                let wait = rate_limit.retry_after + rate_limit_padding();
                log::warn!(
                    "⏳ Webhook rate limited{}: sleeping for {:.2}s",
                    if rate_limit.global { " (global)" } else { "" },
                    wait.as_secs_f64()
                );
                tokio::time::sleep(wait).await;
                continue;
            }

            return Err(NotifierError::DeliveryError {
                status: status.as_u16(),
                body,
            });
        }
    }
}

// Stands in for a body that could not be read, so it is never mistaken for an empty one.
fn unreadable_body(error: &dyn fmt::Display) -> String {
    format!("<unreadable response body: {error}>")
}
