//! Client configuration

use std::env;
use std::time::Duration;

use crate::types::ACTION_USER_UPDATE;
use crate::utils::get_current_user;

/// Default Record Service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default service identity recorded as event initiator
pub const DEFAULT_INITIATOR: &str = "record-client";

/// Configuration shared by all Record Service clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Record Service, without trailing slash
    pub base_url: String,
    /// Bound on every request; expiry surfaces as a transport error
    pub timeout: Duration,
    /// Actor performing mutations
    pub initiator: String,
    /// Actor mutations are performed on behalf of
    pub subject: String,
    /// Action label for pipeline events
    pub action: String,
    /// Whether a rollback read also appends a `user_rollback` event
    pub audit_rollbacks: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            initiator: DEFAULT_INITIATOR.to_string(),
            subject: "anonymous".to_string(),
            action: ACTION_USER_UPDATE.to_string(),
            audit_rollbacks: false,
        }
    }
}

impl ClientConfig {
    /// Create config pointing at a custom base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Default::default()
        }
    }

    /// Load configuration from the environment
    ///
    /// Reads `RECORD_SERVICE_URL`, `RECORD_CLIENT_TIMEOUT_SECS`,
    /// `RECORD_CLIENT_INITIATOR`, `RECORD_CLIENT_SUBJECT` and
    /// `RECORD_AUDIT_ROLLBACKS`. Unset or unparseable values fall back to
    /// defaults; the subject falls back to the detected local user.
    pub fn from_env() -> Self {
        let mut config = match env::var("RECORD_SERVICE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        };

        if let Ok(secs) = env::var("RECORD_CLIENT_TIMEOUT_SECS") {
            if let Ok(secs) = secs.trim().parse::<u64>() {
                config.timeout = Duration::from_secs(secs.max(1));
            }
        }

        if let Ok(initiator) = env::var("RECORD_CLIENT_INITIATOR") {
            if !initiator.trim().is_empty() {
                config.initiator = initiator.trim().to_string();
            }
        }

        config.subject = match env::var("RECORD_CLIENT_SUBJECT") {
            Ok(subject) if !subject.trim().is_empty() => subject.trim().to_string(),
            _ => get_current_user(),
        };

        if let Ok(flag) = env::var("RECORD_AUDIT_ROLLBACKS") {
            config.audit_rollbacks = parse_flag(&flag);
        }

        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the initiator and subject recorded on events
    pub fn with_actors(mut self, initiator: impl Into<String>, subject: impl Into<String>) -> Self {
        self.initiator = initiator.into();
        self.subject = subject.into();
        self
    }

    /// Set the action label for pipeline events
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Enable or disable rollback auditing
    pub fn with_audit_rollbacks(mut self, audit: bool) -> Self {
        self.audit_rollbacks = audit;
        self
    }

    /// Join a path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
