use anyhow::Context;
use serde::Deserialize;
use std::{
    borrow::Cow,
    collections::HashMap,
    path::Path,
    time::Duration,
};
use url::Url;

fn default_timeout() -> u64 {
    30
}

#[derive(Deserialize, Debug)]
pub struct Config {
    api_key: String,

    base_url: Option<String>,

    /// The request timeout, in seconds
    #[serde(default = "default_timeout")]
    timeout: u64,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from '{}'", path.display()))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if self.api_key.trim().is_empty() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::MissingApiKey,
            });
        }

        if let Some(base_url) = self.base_url.as_deref() {
            if let Err(e) = Url::parse(base_url) {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidBaseUrl(e),
                });
            }
        }

        if self.timeout == 0 {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::Generic("timeout must be greater than 0".into()),
            });
        }

        for key in self.extra.keys() {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.clone()),
            });
        }

        errors
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    MissingApiKey,
    InvalidBaseUrl(url::ParseError),
    UnknownKey(String),
    Generic(Cow<'static, str>),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingApiKey => write!(f, "Missing Api Key"),
            ValidationError::InvalidBaseUrl(e) => write!(f, "Invalid Base Url: {}", e),
            ValidationError::UnknownKey(key) => write!(f, "Unknown Key `{}`", key),
            ValidationError::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}
