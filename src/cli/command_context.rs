//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, override merging and client initialization.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::CircleCiClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Configuration with CLI and environment overrides applied
    pub config: Config,
    /// API client built from `config`
    pub client: CircleCiClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context for commands that need an API token.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingToken` when no token is configured
    /// anywhere, before any request is made.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let ctx = Self::anonymous(opts)?;
        ctx.config.validate_token()?;
        Ok(ctx)
    }

    /// Create a context that tolerates a missing token.
    ///
    /// Used by GraphQL commands that also work anonymously (orb lookups,
    /// config validation).
    pub fn anonymous(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        let client = CircleCiClient::new(&config)?;

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }
}

/// Load the config file (or defaults) and apply CLI/environment overrides.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.apply_overrides(opts.host_ref(), opts.token_ref());
    config.validate_host()?;

    debug!(
        "Using host {} (token {})",
        config.host,
        if config.token.is_some() { "set" } else { "unset" }
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};
    use tempfile::tempdir;

    fn opts_with_config(path: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            config: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_token_fails_before_requests() {
        let dir = tempdir().unwrap();
        let opts = opts_with_config(&dir.path().join("cli.yml"));

        match CommandContext::new(&opts) {
            Err(Error::Config(ConfigError::MissingToken)) => {}
            other => panic!("expected missing token, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_anonymous_context_without_config_file() {
        let dir = tempdir().unwrap();
        let opts = opts_with_config(&dir.path().join("cli.yml"));

        let ctx = CommandContext::anonymous(&opts).unwrap();
        assert_eq!(ctx.config.host, "https://circleci.com");
        assert!(!ctx.client.is_authenticated());
    }

    #[test]
    fn test_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cli.yml");
        Config {
            host: "https://file.example".to_string(),
            token: Some("file-token".to_string()),
            ..Default::default()
        }
        .save_to(path.clone())
        .unwrap();

        let mut opts = opts_with_config(&path);
        opts.token = Some("flag-token".to_string());

        let config = resolve_config(&opts).unwrap();
        assert_eq!(config.host, "https://file.example");
        assert_eq!(config.token.as_deref(), Some("flag-token"));
    }

    #[test]
    fn test_host_without_scheme_is_rejected() {
        let dir = tempdir().unwrap();
        let mut opts = opts_with_config(&dir.path().join("cli.yml"));
        opts.host = Some("circleci.example".to_string());

        assert!(resolve_config(&opts).is_err());
    }
}
