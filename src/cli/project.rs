//! Project management commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::input::{require_or_prompt, secret_value};
use crate::cli::{CommandContext, LimitArgs, OutputFormat};
use crate::client::ProjectApi;
use crate::client::models::{ProjectEnvVar, ProjectSlug, VcsType};
use crate::error::Result;
use crate::models::{ProjectDisplay, ProjectEnvVarDisplay};
use crate::output::print_one;

/// Run the project create command
///
/// The organization is addressed by slug (`gh/acme`, `circleci/<org-id>`).
pub async fn create(
    opts: &GlobalOptions,
    vcs: &str,
    org: &str,
    name: Option<String>,
) -> Result<()> {
    let vcs: VcsType = vcs.parse()?;
    let org_slug = format!("{}/{}", vcs.slug_prefix(), org);
    let name = require_or_prompt(name, "Project name")?;

    let ctx = CommandContext::new(opts)?;
    let project = ctx.client.create_project(&org_slug, &name).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created project {}", "✓".green(), project.slug.bold());
    }
    print_one(ProjectDisplay::from(project), ctx.format)
}

/// Run the project get command
pub async fn get(opts: &GlobalOptions, slug: &str) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;
    let ctx = CommandContext::new(opts)?;

    let project = ctx.client.get_project(&slug).await?;
    print_one(ProjectDisplay::from(project), ctx.format)
}

/// Run the project secret list command
pub async fn list_secrets(opts: &GlobalOptions, slug: &str, limit: &LimitArgs) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;

    run_list_command::<ProjectEnvVar, ProjectEnvVarDisplay, _, _>(
        opts,
        limit,
        "environment variables",
        |client, limit| async move { client.list_project_env_vars(&slug, limit).await },
    )
    .await
}

/// Run the project secret create command
pub async fn create_secret(
    opts: &GlobalOptions,
    slug: &str,
    name: &str,
    value: Option<String>,
) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;
    let ctx = CommandContext::new(opts)?;

    let value = secret_value(value, &format!("Value for {}", name))?;
    let var = ctx.client.create_project_env_var(&slug, name, &value).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Stored {} in {}", "✓".green(), var.name.bold(), slug);
    }
    print_one(ProjectEnvVarDisplay::from(var), ctx.format)
}

/// Run the project secret delete command
pub async fn delete_secret(opts: &GlobalOptions, slug: &str, name: &str) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;
    let ctx = CommandContext::new(opts)?;

    ctx.client.delete_project_env_var(&slug, name).await?;
    println!("{} Deleted {} from {}", "✓".green(), name.bold(), slug);
    Ok(())
}
