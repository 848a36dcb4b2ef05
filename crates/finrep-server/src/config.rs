//! Configuration for the report server

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP user agent sent to providers
pub const DEFAULT_USER_AGENT: &str = "finrep-server/0.1 (+https://github.com/finrep-rs/finrep)";

/// Configuration for the report server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Request timeout for provider calls
    pub request_timeout: Duration,

    /// User agent sent with provider requests
    pub user_agent: String,

    /// Directory for raw statement CSV dumps; dumping is disabled unless set
    pub csv_dump_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            csv_dump_dir: None,
        }
    }
}

impl ServerConfig {
    /// Create a new configuration builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            return Err(ReportError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ReportError::Config(
                "user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
    csv_dump_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Set the provider request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the HTTP user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enable raw statement CSV dumps into the given directory
    pub fn csv_dump_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.csv_dump_dir = Some(dir.into());
        self
    }

    /// Enable CSV dumps from the FINREP_CSV_DUMP_DIR environment variable
    pub fn with_env_csv_dump_dir(mut self) -> Self {
        if let Ok(dir) = std::env::var("FINREP_CSV_DUMP_DIR") {
            self.csv_dump_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig> {
        let defaults = ServerConfig::default();

        let config = ServerConfig {
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            csv_dump_dir: self.csv_dump_dir,
        };

        config.validate()?;
        Ok(config)
    }
}
