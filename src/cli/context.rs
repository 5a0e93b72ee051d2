//! Context management commands

use colored::Colorize;
use log::debug;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::input::{confirm, require_or_prompt, secret_value};
use crate::cli::{CommandContext, LimitArgs, OutputFormat, OwnerArgs};
use crate::client::ContextApi;
use crate::client::models::Context;
use crate::error::{Error, Result};
use crate::models::{ContextDisplay, ContextEnvVarDisplay};
use crate::output::formatters::format_optional_timestamp;
use crate::output::json::format_json;
use crate::output::progress::with_spinner;
use crate::output::table::format_details;
use crate::output::{Formattable, print_one};

/// Run the context list command
pub async fn list(
    opts: &GlobalOptions,
    owner: &OwnerArgs,
    args: &[String],
    limit: &LimitArgs,
) -> Result<()> {
    let (owner, _) = owner.resolve_exact::<0>(args, "with no further arguments")?;

    run_list_command::<Context, ContextDisplay, _, _>(
        opts,
        limit,
        "contexts",
        |client, limit| async move { client.list_contexts(&owner, limit).await },
    )
    .await
}

/// Run the context show command
///
/// Prints the context followed by the names of its variables.
pub async fn show(opts: &GlobalOptions, owner: &OwnerArgs, args: &[String]) -> Result<()> {
    let (owner, [name]) = owner.resolve_exact::<1>(args, "<context-name>")?;
    let ctx = CommandContext::new(opts)?;

    let (context, vars) = with_spinner("Fetching context...", async {
        let context = ctx.client.find_context(&owner, name).await?;
        let vars = ctx.client.list_context_env_vars(&context.id).await?;
        Ok::<_, Error>((context, vars))
    })
    .await?;

    debug!("Context {} has {} variables", context.id, vars.len());

    if ctx.format == OutputFormat::Json {
        println!(
            "{}",
            format_json(&json!({ "context": context, "variables": vars }))?
        );
        return Ok(());
    }

    println!(
        "{}",
        format_details(&[
            ("Name", context.name.clone()),
            ("ID", context.id.clone()),
            ("Created", format_optional_timestamp(context.created_at.as_deref())),
        ])
    );
    println!();

    let rows: Vec<ContextEnvVarDisplay> = vars.into_iter().map(Into::into).collect();
    rows.print(ctx.format)
}

/// Run the context create command
pub async fn create(opts: &GlobalOptions, owner: &OwnerArgs, args: &[String]) -> Result<()> {
    let (owner, rest) = owner.resolve(args)?;
    let name = match rest {
        [] => require_or_prompt(None, "Context name")?,
        [name] => name.clone(),
        _ => {
            return Err(Error::InvalidArgument(
                "expected [<vcs-type> <org-name>] [<context-name>]".to_string(),
            ));
        }
    };

    let ctx = CommandContext::new(opts)?;
    let context = ctx.client.create_context(&owner, &name).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created context {}", "✓".green(), context.name.bold());
    }
    print_one(ContextDisplay::from(context), ctx.format)
}

/// Run the context delete command
pub async fn delete(
    opts: &GlobalOptions,
    owner: &OwnerArgs,
    args: &[String],
    force: bool,
) -> Result<()> {
    let (owner, [name]) = owner.resolve_exact::<1>(args, "<context-name>")?;
    let ctx = CommandContext::new(opts)?;
    let context = ctx.client.find_context(&owner, name).await?;

    let prompt = format!(
        "Delete context '{}' and all of its environment variables?",
        context.name
    );
    if !confirm(&prompt, force)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client.delete_context(&context.id).await?;
    println!("{} Deleted context {}", "✓".green(), context.name.bold());
    Ok(())
}

/// Run the context store-secret command
pub async fn store_secret(
    opts: &GlobalOptions,
    owner: &OwnerArgs,
    args: &[String],
    value: Option<String>,
) -> Result<()> {
    let (owner, [name, variable]) =
        owner.resolve_exact::<2>(args, "<context-name> <variable>")?;
    let ctx = CommandContext::new(opts)?;
    let context = ctx.client.find_context(&owner, name).await?;

    let value = secret_value(value, &format!("Value for {}", variable))?;
    let stored = ctx
        .client
        .store_context_env_var(&context.id, variable, &value)
        .await?;

    println!(
        "{} Stored {} in context {}",
        "✓".green(),
        stored.variable.bold(),
        context.name
    );
    Ok(())
}

/// Run the context remove-secret command
pub async fn remove_secret(opts: &GlobalOptions, owner: &OwnerArgs, args: &[String]) -> Result<()> {
    let (owner, [name, variable]) =
        owner.resolve_exact::<2>(args, "<context-name> <variable>")?;
    let ctx = CommandContext::new(opts)?;
    let context = ctx.client.find_context(&owner, name).await?;

    ctx.client
        .remove_context_env_var(&context.id, variable)
        .await?;

    println!(
        "{} Removed {} from context {}",
        "✓".green(),
        variable.bold(),
        context.name
    );
    Ok(())
}
