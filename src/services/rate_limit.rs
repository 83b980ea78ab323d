use std::time::Duration;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::Deserialize;
use crate::config::constants::{DEFAULT_RETRY_AFTER_SECS, MAX_RETRY_AFTER_SECS};

/// Body Discord sends along with a 429. `retry_after` is in seconds.
#[derive(Debug, Deserialize)]
struct RateLimitBody {
    retry_after: Option<f64>,
    #[serde(default)]
    global: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateLimit {
    pub retry_after: Duration,
    pub global: bool,
}

impl RateLimit {
    /// Prefers the JSON `retry_after`, then the `Retry-After` header, then a fixed fallback.
    /// Delays above `MAX_RETRY_AFTER_SECS` are clamped.
    pub fn from_response(headers: &HeaderMap, body: &str) -> Self {
        let parsed = serde_json::from_str::<RateLimitBody>(body).ok();
        let global = parsed.as_ref().is_some_and(|b| b.global);

        let retry_after = parsed
            .and_then(|b| b.retry_after)
            .or_else(|| Self::header_seconds(headers))
            .map(Self::clamp_seconds)
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
            .unwrap_or_else(|| Duration::from_secs_f64(DEFAULT_RETRY_AFTER_SECS));

        Self {
            retry_after,
            global,
        }
    }

    fn clamp_seconds(seconds: f64) -> f64 {
        if seconds > MAX_RETRY_AFTER_SECS {
            log::warn!("⚠️ Server asked to wait {seconds}s, clamping to {MAX_RETRY_AFTER_SECS}s");
            MAX_RETRY_AFTER_SECS
        } else {
            seconds
        }
    }

    fn header_seconds(headers: &HeaderMap) -> Option<f64> {
        headers
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<f64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn body_retry_after_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("9"));

        let rate_limit = RateLimit::from_response(
            &headers,
            r#"{"message": "You are being rate limited.", "retry_after": 0.5, "global": true}"#,
        );

        assert_eq!(rate_limit.retry_after, Duration::from_millis(500));
        assert!(rate_limit.global);
    }

    #[test]
    fn header_is_used_when_body_is_not_json() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("2"));

        let rate_limit = RateLimit::from_response(&headers, "slow down");

        assert_eq!(rate_limit.retry_after, Duration::from_secs(2));
        assert!(!rate_limit.global);
    }

    #[test]
    fn falls_back_when_nothing_usable_is_present() {
        let rate_limit = RateLimit::from_response(&HeaderMap::new(), r#"{"retry_after": -3}"#);

        assert_eq!(rate_limit.retry_after, Duration::from_secs_f64(DEFAULT_RETRY_AFTER_SECS));
    }

    #[test]
    fn huge_retry_after_is_clamped() {
        let rate_limit = RateLimit::from_response(&HeaderMap::new(), r#"{"retry_after": 1e9}"#);

        assert_eq!(rate_limit.retry_after, Duration::from_secs_f64(MAX_RETRY_AFTER_SECS));
    }

    #[test]
    fn infinite_header_value_is_clamped() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("inf"));

        let rate_limit = RateLimit::from_response(&headers, "");

        assert_eq!(rate_limit.retry_after, Duration::from_secs_f64(MAX_RETRY_AFTER_SECS));
    }
}
