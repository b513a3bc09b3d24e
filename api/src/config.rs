use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Duration;

/// Default contact rate limit window (24 h)
const DEFAULT_RATE_WINDOW_SECS: u64 = 86_400;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Root of the content tree (`blog/` and `projects/` live underneath)
    pub content_dir: PathBuf,
    /// Resend API key - when unset, outgoing mail is only logged
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    /// Sender shown on contact notifications
    pub contact_from: String,
    /// Recipients of contact notifications
    pub contact_to: Vec<String>,
    /// Upstash Redis REST credentials - when unset, an in-process limiter is used
    pub upstash_url: Option<String>,
    pub upstash_token: Option<String>,
    /// Contact submissions allowed per client within the window
    pub contact_rate_limit: u32,
    pub contact_rate_window_secs: u64,
    pub rate_limit_prefix: String,
    /// Bearer token for the admin API
    pub admin_token: Option<String>,
    /// Per-IP burst limiting on the contact route
    pub burst_limit_enabled: bool,
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_var("PORT", 8080),
            content_dir: env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content")),
            resend_api_key: non_empty_var("RESEND_API_KEY"),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            contact_from: env::var("CONTACT_FROM").unwrap_or_else(|_| {
                "Portfolio Contact Form <onboarding@resend.dev>".to_string()
            }),
            contact_to: env::var("CONTACT_TO")
                .unwrap_or_else(|_| "owner@example.com".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            upstash_url: non_empty_var("UPSTASH_REDIS_REST_URL"),
            upstash_token: non_empty_var("UPSTASH_REDIS_REST_TOKEN"),
            contact_rate_limit: parse_var("CONTACT_RATE_LIMIT", 5),
            contact_rate_window_secs: window_var("CONTACT_RATE_WINDOW_SECS"),
            rate_limit_prefix: env::var("RATE_LIMIT_PREFIX")
                .unwrap_or_else(|_| "ratelimit".to_string()),
            admin_token: non_empty_var("ADMIN_TOKEN"),
            burst_limit_enabled: parse_var("BURST_LIMIT_ENABLED", true),
            cors_allow_origin: non_empty_var("CORS_ALLOW_ORIGIN"),
        }
    }

    /// Check if the hosted rate limiter is configured
    pub fn upstash_enabled(&self) -> bool {
        self.upstash_url.is_some() && self.upstash_token.is_some()
    }

    /// Contact rate limit window, falling back to the default when out of range
    pub fn contact_rate_window(&self) -> Duration {
        rate_window(self.contact_rate_window_secs).unwrap_or_else(|| {
            tracing::warn!(
                secs = self.contact_rate_window_secs,
                "Rate limit window out of range, using default"
            );
            Duration::seconds(DEFAULT_RATE_WINDOW_SECS as i64)
        })
    }

    /// Check if the admin API can be used at all
    pub fn admin_enabled(&self) -> bool {
        self.admin_token.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = key, value = %raw, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

/// A positive window that fits in a `chrono::Duration`
fn rate_window(secs: u64) -> Option<Duration> {
    i64::try_from(secs)
        .ok()
        .filter(|secs| *secs > 0)
        .and_then(Duration::try_seconds)
}

fn window_var(key: &str) -> u64 {
    let secs = parse_var(key, DEFAULT_RATE_WINDOW_SECS);
    if rate_window(secs).is_some() {
        secs
    } else {
        tracing::warn!(var = key, value = secs, "Window out of range, using default");
        DEFAULT_RATE_WINDOW_SECS
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by tests - no external services, burst limiting off
    pub fn for_tests(content_dir: PathBuf) -> Self {
        Self {
            port: 0,
            content_dir,
            resend_api_key: None,
            resend_api_url: "http://localhost:0".to_string(),
            contact_from: "Portfolio Contact Form <test@example.com>".to_string(),
            contact_to: vec!["owner@example.com".to_string()],
            upstash_url: None,
            upstash_token: None,
            contact_rate_limit: 5,
            contact_rate_window_secs: DEFAULT_RATE_WINDOW_SECS,
            rate_limit_prefix: "ratelimit".to_string(),
            admin_token: Some("test-admin-token".to_string()),
            burst_limit_enabled: false,
            cors_allow_origin: None,
        }
    }
}
