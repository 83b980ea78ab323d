use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    // Configuration errors
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Validation errors
    #[error("invalid value for '{field}': {constraint}")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Parser errors
    #[error("failed to parse {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Network/API errors
    #[error("network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },
    #[error("webhook responded with HTTP {status}")]
    DeliveryError {
        status: u16,
        body: String,
    },
    #[error("webhook still rate limited after {attempts} attempts")]
    RateLimited {
        attempts: u32,
        retry_after: Duration,
    },

    // System errors
    #[error("system error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl NotifierError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::RateLimited { .. } => true,
            Self::DeliveryError { status, .. } => *status >= 500,
            Self::ConfigurationError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::ValidationError { .. }
            | Self::ParseError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } | Self::DeliveryError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } | Self::NetworkError { .. } | Self::RateLimited { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } | Self::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Run 'webhook-notifier init' or pass --config <PATH>")
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'");
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::NetworkError { operation, url, reason } => {
                let mut msg = format!("Network error during {operation}: {reason}");
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                msg.push_str("\n💡 Check your internet connection and the webhook URL");
                msg
            }
            Self::DeliveryError { status, body } => {
                let mut msg = format!("Webhook rejected the message with HTTP {status}");
                if !body.is_empty() {
                    msg.push_str(&format!(": {body}"));
                }
                if *status == 401 || *status == 404 {
                    msg.push_str("\n💡 The webhook URL may be wrong or the webhook was deleted");
                }
                msg
            }
            Self::RateLimited { attempts, retry_after } => {
                format!(
                    "Webhook still rate limited after {attempts} attempts (last retry_after: {:.2}s)\n💡 Wait a moment and try again",
                    retry_after.as_secs_f64()
                )
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for notifier operations
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message to stderr.
    pub fn handle_error(error: &NotifierError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for NotifierError {
    fn from(error: std::io::Error) -> Self {
        NotifierError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for NotifierError {
    fn from(error: serde_json::Error) -> Self {
        NotifierError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for NotifierError {
    fn from(error: toml::de::Error) -> Self {
        NotifierError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for NotifierError {
    fn from(error: reqwest::Error) -> Self {
        let operation = if error.is_timeout() {
            "webhook request (timed out)"
        } else if error.is_connect() {
            "webhook connection"
        } else {
            "webhook request"
        };

        NotifierError::NetworkError {
            operation: operation.to_string(),
            url: error.url().map(ToString::to_string),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_recoverable_client_errors_are_not() {
        let server = NotifierError::DeliveryError { status: 502, body: String::new() };
        let client = NotifierError::DeliveryError { status: 400, body: "bad".to_string() };

        assert!(server.is_recoverable());
        assert!(!client.is_recoverable());
    }

    #[test]
    fn missing_webhook_hint_is_added_for_not_found() {
        let error = NotifierError::DeliveryError { status: 404, body: "Unknown Webhook".to_string() };
        let message = error.user_message();

        assert!(message.contains("HTTP 404: Unknown Webhook"));
        assert!(message.contains("webhook was deleted"));
    }

    #[test]
    fn severity_orders_system_errors_highest() {
        let system = NotifierError::system_error("startup", "boom");
        let config = NotifierError::config_error("missing", Some("discord.webhook"), None);

        assert!(system.severity() > config.severity());
        assert_eq!(system.severity().name(), "CRITICAL");
    }
}
