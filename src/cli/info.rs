//! Account information and diagnostic commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::command_context::resolve_config;
use crate::cli::LimitArgs;
use crate::cli::handlers::run_list_command;
use crate::client::models::Collaboration;
use crate::client::{CircleCiClient, InfoApi};
use crate::config::Config;
use crate::error::Result;
use crate::models::OrgDisplay;

/// Run the `info org` command
pub async fn orgs(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Collaboration, OrgDisplay, _, _>(
        opts,
        &LimitArgs::default(),
        "organizations",
        |client, _| async move { client.collaborations().await },
    )
    .await
}

/// Run the diagnostic command
///
/// Prints the resolved endpoints and token state, then greets the token's
/// owner when a token is present.
pub async fn diagnostic(opts: &GlobalOptions) -> Result<()> {
    let config = resolve_config(opts)?;
    let config_path = Config::resolve_path(opts.config_ref())?;

    println!("{}\n", "CircleCI CLI Diagnostics".bold());
    println!("Config file: {}", config_path.display().to_string().cyan());
    println!("Host:        {}", config.host.cyan());
    println!("GraphQL:     {}", config.graphql_url()?);
    println!("REST:        {}", config.rest_url()?);
    println!();

    if config.validate_token().is_err() {
        println!("{} API token not configured", "✗".red());
        println!("  → Run 'circleci setup' to configure one");
        return Ok(());
    }
    println!("{} API token configured", "✓".green());

    debug!("Checking token against {}", config.rest_url()?);
    let client = CircleCiClient::new(&config)?;

    let me = client.me().await?;
    println!("{} Hello, {}.", "✓".green(), me.display_name());

    Ok(())
}
