//! Environment-driven configuration for the dashboard binary.

use thiserror::Error;

use stockroom_auth::Credentials;
use stockroom_observability::LogFormat;

pub const USERNAME_VAR: &str = "STOCKROOM_USERNAME";
pub const PASSWORD_VAR: &str = "STOCKROOM_PASSWORD";
pub const SEARCH_VAR: &str = "STOCKROOM_SEARCH";
pub const SEED_VAR: &str = "STOCKROOM_SEED";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "STOCKROOM_OUTPUT";

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Initial dataset loaded at startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SeedMode {
    #[default]
    Mock,
    Empty,
}

impl core::str::FromStr for SeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(SeedMode::Mock),
            "empty" => Ok(SeedMode::Empty),
            other => Err(format!("unknown seed '{other}' (expected mock or empty)")),
        }
    }
}

/// How the rendered dashboard is written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output '{other}' (expected text or json)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub credentials: Credentials,
    pub search: String,
    pub seed: SeedMode,
    pub log_format: LogFormat,
    pub output: OutputFormat,
    defaulted_credentials: bool,
}

impl DashboardConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup` (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup(USERNAME_VAR);
        let password = lookup(PASSWORD_VAR);
        let defaulted_credentials = username.is_none() || password.is_none();

        let seed = match lookup(SEED_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|reason| ConfigError::Invalid { var: SEED_VAR, reason })?,
            None => SeedMode::default(),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|reason| ConfigError::Invalid { var: LOG_FORMAT_VAR, reason })?,
            None => LogFormat::default(),
        };

        let output = match lookup(OUTPUT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|reason| ConfigError::Invalid { var: OUTPUT_VAR, reason })?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            credentials: Credentials::new(
                username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
                password.unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            ),
            search: lookup(SEARCH_VAR).unwrap_or_default(),
            seed,
            log_format,
            output,
            defaulted_credentials,
        })
    }

    /// True when either credential fell back to the built-in demo account.
    pub fn uses_default_credentials(&self) -> bool {
        self.defaulted_credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.credentials, Credentials::new("admin", "admin123"));
        assert!(config.uses_default_credentials());
        assert_eq!(config.search, "");
        assert_eq!(config.seed, SeedMode::Mock);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn reads_every_variable() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (USERNAME_VAR, "user"),
            (PASSWORD_VAR, "user123"),
            (SEARCH_VAR, "dairy"),
            (SEED_VAR, "EMPTY"),
            (LOG_FORMAT_VAR, "compact"),
            (OUTPUT_VAR, "json"),
        ]))
        .unwrap();

        assert_eq!(config.credentials, Credentials::new("user", "user123"));
        assert!(!config.uses_default_credentials());
        assert_eq!(config.search, "dairy");
        assert_eq!(config.seed, SeedMode::Empty);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn unknown_seed_is_an_error() {
        let err = DashboardConfig::from_lookup(lookup(&[(SEED_VAR, "sqlite")])).unwrap_err();
        match err {
            ConfigError::Invalid { var, .. } => assert_eq!(var, SEED_VAR),
        }
    }
}
