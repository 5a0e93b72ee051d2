//! Global CLI options shared across all commands
//!
//! Precedence for every option is: CLI flag > environment variable > config
//! file > default. This struct captures the CLI/env layer; config file values
//! are merged later in `CommandContext`.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (table, plain, json)
    pub format: OutputFormat,

    /// CircleCI host override
    pub host: Option<String>,

    /// API token override
    pub token: Option<String>,

    /// Custom config file path (defaults to ~/.circleci/cli.yml)
    pub config: Option<String>,

    /// Skip the periodic update check
    pub skip_update_check: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            host: cli.host.clone(),
            token: cli.token.clone(),
            config: cli.config.clone(),
            skip_update_check: cli.skip_update_check,
        }
    }

    pub fn host_ref(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn token_ref(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            host: Some("https://circleci.example".to_string()),
            token: Some("tok".to_string()),
            config: Some("/custom/cli.yml".to_string()),
            skip_update_check: true,
        };

        assert_eq!(opts.host_ref(), Some("https://circleci.example"));
        assert_eq!(opts.token_ref(), Some("tok"));
        assert_eq!(opts.config_ref(), Some("/custom/cli.yml"));
    }

    #[test]
    fn test_global_options_default() {
        let opts = GlobalOptions::default();
        assert_eq!(opts.format, OutputFormat::Table);
        assert_eq!(opts.host_ref(), None);
        assert!(!opts.skip_update_check);
    }
}
