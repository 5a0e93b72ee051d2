//! Setup command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::input::can_prompt;
use crate::client::{CircleCiClient, InfoApi};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Run the setup command
///
/// Token and host come from `--token`/`--host` (or their environment
/// variables) when given, and are prompted for otherwise. The resulting
/// config is saved and the token is checked against `/me`.
pub async fn run(opts: &GlobalOptions, no_prompt: bool) -> Result<()> {
    let mut config = Config::load_or_default(opts.config_ref())?;
    let interactive = !no_prompt && can_prompt();

    if interactive {
        println!("{}", "CircleCI CLI setup".bold().green());
        println!(
            "Create a personal API token at {}\n",
            format!("{}/settings/user/tokens", config.host.trim_end_matches('/')).cyan()
        );
    }

    config.token = Some(match opts.token_ref().filter(|t| !t.is_empty()) {
        Some(token) => token.to_string(),
        None if interactive => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("CircleCI API token")
            .interact()?,
        None => match config.token.take().filter(|t| !t.is_empty()) {
            Some(existing) => existing,
            None => return Err(ConfigError::MissingToken.into()),
        },
    });

    config.host = match opts.host_ref().filter(|h| !h.is_empty()) {
        Some(host) => host.to_string(),
        None if interactive => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("CircleCI host")
            .default(config.host.clone())
            .interact_text()?,
        None => config.host.clone(),
    };
    config.validate_host()?;

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    let client = CircleCiClient::new(&config)?;
    match client.me().await {
        Ok(me) => println!("{} Token accepted. Hello, {}.", "✓".green(), me.display_name()),
        Err(err) => println!("{} Could not verify the token: {}", "⚠".yellow(), err),
    }

    Ok(())
}
