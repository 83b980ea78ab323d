use serde::Serialize;
use crate::structs::config::discord_config::DiscordConfig;

/// A single outbound webhook message. `url` and `rate_limit_retry` steer
/// delivery and never appear in the JSON body.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WebhookMessage {
    #[serde(skip)]
    pub url: String,

    pub username: String,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub tts: bool,

    #[serde(skip)]
    pub rate_limit_retry: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl WebhookMessage {
    pub fn new(url: impl Into<String>, username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            content: content.into(),
            avatar_url: None,
            tts: false,
            rate_limit_retry: false,
        }
    }

    pub fn from_config(discord: &DiscordConfig, content: impl Into<String>) -> Self {
        Self::new(discord.webhook.clone(), discord.webhook_name.clone(), content)
            .with_avatar_url(discord.avatar_url.clone())
    }

    #[must_use]
    pub fn with_rate_limit_retry(mut self, enabled: bool) -> Self {
        self.rate_limit_retry = enabled;
        self
    }

    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url;
        self
    }

    #[must_use]
    pub fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_contains_only_username_and_content_by_default() {
        let message = WebhookMessage::new("https://example.test/hook", "Bot", "Test")
            .with_rate_limit_retry(true);

        let payload = serde_json::to_value(&message).unwrap();

        assert_eq!(payload, json!({ "username": "Bot", "content": "Test" }));
    }

    #[test]
    fn optional_fields_are_serialized_when_set() {
        let message = WebhookMessage::new("https://example.test/hook", "Bot", "hi")
            .with_avatar_url(Some("https://example.test/a.png".to_string()))
            .with_tts(true);

        let payload = serde_json::to_value(&message).unwrap();

        assert_eq!(payload["avatar_url"], "https://example.test/a.png");
        assert_eq!(payload["tts"], true);
        assert!(payload.get("url").is_none());
        assert!(payload.get("rate_limit_retry").is_none());
    }

    #[test]
    fn from_config_copies_destination_and_name() {
        let discord = DiscordConfig {
            webhook: "https://example.test/hook".to_string(),
            webhook_name: "Alerts".to_string(),
            avatar_url: None,
        };

        let message = WebhookMessage::from_config(&discord, "Test");

        assert_eq!(message.url, "https://example.test/hook");
        assert_eq!(message.username, "Alerts");
        assert_eq!(message.content, "Test");
        assert!(!message.rate_limit_retry);
    }
}
