//! Configuration management for the CircleCI CLI

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default CircleCI host
pub const DEFAULT_HOST: &str = "https://circleci.com";

/// Default GraphQL endpoint path
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "graphql-unstable";

/// Default REST endpoint path
pub const DEFAULT_REST_ENDPOINT: &str = "api/v2";

/// Path of the policy service relative to the host
const POLICY_ENDPOINT: &str = "api/v1";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// CircleCI host, including scheme
    #[serde(default = "default_host")]
    pub host: String,

    /// GraphQL endpoint path relative to the host
    #[serde(default = "default_graphql_endpoint")]
    pub endpoint: String,

    /// REST endpoint path relative to the host
    #[serde(default = "default_rest_endpoint")]
    pub rest_endpoint: String,

    /// Personal API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Disable the periodic update check
    #[serde(default)]
    pub skip_update_check: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_graphql_endpoint() -> String {
    DEFAULT_GRAPHQL_ENDPOINT.to_string()
}

fn default_rest_endpoint() -> String {
    DEFAULT_REST_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            endpoint: default_graphql_endpoint(),
            rest_endpoint: default_rest_endpoint(),
            token: None,
            skip_update_check: false,
        }
    }
}

impl Config {
    /// Directory holding CLI state (`~/.circleci`)
    pub fn state_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".circleci"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::state_dir()?.join("cli.yml"))
    }

    /// Resolve the config path, honoring an explicit override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        // The token is a credential: private from creation, and an existing
        // file is tightened before anything is written to it
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    /// Apply CLI/environment overrides on top of file values
    pub fn apply_overrides(&mut self, host: Option<&str>, token: Option<&str>) {
        if let Some(host) = host.filter(|h| !h.is_empty()) {
            self.host = host.to_string();
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token.to_string());
        }
    }

    /// Validate that a token is present
    pub fn validate_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }

    /// Check that the host is an absolute http(s) URL
    pub fn validate_host(&self) -> Result<()> {
        if self.host.starts_with("https://") || self.host.starts_with("http://") {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "host '{}' must start with http:// or https://",
                self.host
            ))
            .into())
        }
    }

    /// Full URL of the GraphQL endpoint
    pub fn graphql_url(&self) -> Result<String> {
        self.join(&self.endpoint)
    }

    /// Base URL of the REST API
    pub fn rest_url(&self) -> Result<String> {
        self.join(&self.rest_endpoint)
    }

    /// Base URL of the policy service
    pub fn policy_url(&self) -> Result<String> {
        self.join(POLICY_ENDPOINT)
    }

    fn join(&self, endpoint: &str) -> Result<String> {
        self.validate_host()?;
        Ok(format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        ))
    }
}
