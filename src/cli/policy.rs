//! Config policy commands

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::input::confirm;
use crate::cli::{CommandContext, LimitArgs, OutputFormat, PolicyTarget};
use crate::client::PolicyApi;
use crate::client::models::{BundleDiff, DecisionLog, DecisionQuery, DecisionSettings};
use crate::error::{ApiError, Error, Result};
use crate::models::{BundleChangeDisplay, DecisionDisplay, PolicyDisplay};
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::util::pack::collect_policies;

/// Run the policy fetch command
///
/// Without a name the bundle is listed; with one, that policy's source is printed.
pub async fn fetch(opts: &GlobalOptions, name: Option<&str>, target: &PolicyTarget) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut bundle = ctx
        .client
        .fetch_policy_bundle(&target.owner_id, &target.context)
        .await?;
    debug!("Bundle has {} policies", bundle.len());

    match name {
        Some(name) => {
            let source = bundle.remove(name).ok_or_else(|| {
                Error::from(ApiError::NotFound(format!(
                    "policy '{}' is not in the {} bundle",
                    name, target.context
                )))
            })?;

            if ctx.format == OutputFormat::Json {
                let single = BTreeMap::from([(name.to_string(), source)]);
                println!("{}", format_json(&single)?);
            } else {
                print!("{}", source);
            }
        }
        None if ctx.format == OutputFormat::Json => println!("{}", format_json(&bundle)?),
        None => {
            let rows: Vec<PolicyDisplay> = bundle.into_iter().map(Into::into).collect();
            rows.print(ctx.format)?;
        }
    }
    Ok(())
}

fn print_diff(diff: BundleDiff, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", format_json(&diff)?);
        return Ok(());
    }
    if diff.is_empty() {
        println!("No changes.");
        return Ok(());
    }
    BundleChangeDisplay::rows(diff).print(format)
}

/// Run the policy push command
///
/// Unless `--no-prompt` is given, a dry run is shown first and the upload
/// needs confirmation.
pub async fn push(
    opts: &GlobalOptions,
    dir: &str,
    dry_run: bool,
    no_prompt: bool,
    target: &PolicyTarget,
) -> Result<()> {
    let bundle = collect_policies(Path::new(dir))?;
    if bundle.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "no .rego files found under {}",
            dir
        )));
    }
    debug!("Collected {} policies from {}", bundle.len(), dir);

    let ctx = CommandContext::new(opts)?;
    let (owner, context) = (target.owner_id.as_str(), target.context.as_str());

    if dry_run || !no_prompt {
        let diff = ctx
            .client
            .push_policy_bundle(owner, context, &bundle, true)
            .await?;
        let unchanged = diff.is_empty();
        print_diff(diff, ctx.format)?;

        if dry_run || unchanged || !confirm("Apply these changes?", false)? {
            return Ok(());
        }
    }

    let diff = ctx
        .client
        .push_policy_bundle(owner, context, &bundle, false)
        .await?;
    if ctx.format != OutputFormat::Json {
        eprintln!("{} Policy bundle pushed to {}", "✓".green(), context.bold());
    }
    print_diff(diff, ctx.format)
}

/// Run the policy logs command
pub async fn logs(
    opts: &GlobalOptions,
    target: &PolicyTarget,
    query: DecisionQuery,
    limit: &LimitArgs,
) -> Result<()> {
    let target = target.clone();

    run_list_command::<DecisionLog, DecisionDisplay, _, _>(
        opts,
        limit,
        "decisions",
        |client, limit| async move {
            client
                .list_decisions(&target.owner_id, &target.context, &query, limit)
                .await
        },
    )
    .await
}

/// Run the policy settings command
pub async fn settings(
    opts: &GlobalOptions,
    target: &PolicyTarget,
    enabled: Option<bool>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let (owner, context) = (target.owner_id.as_str(), target.context.as_str());

    let settings = match enabled {
        Some(enabled) => {
            ctx.client
                .set_decision_settings(owner, context, &DecisionSettings { enabled })
                .await?
        }
        None => ctx.client.get_decision_settings(owner, context).await?,
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&settings)?);
    } else if settings.enabled {
        println!("{} Policy evaluation enabled for {}", "✓".green(), context);
    } else {
        println!("{} Policy evaluation disabled for {}", "○".dimmed(), context);
    }
    Ok(())
}
