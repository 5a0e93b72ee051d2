//! Pipeline commands

use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::cli::args::{GlobalOptions, parse_parameters};
use crate::cli::handlers::run_list_command;
use crate::cli::input::{require_or_prompt, select};
use crate::cli::{CommandContext, LimitArgs, OutputFormat};
use crate::client::models::{
    BranchRef, CreatePipelineDefinitionRequest, Pipeline, PipelineDefinition, ProjectSlug,
    RunPipelineRequest,
};
use crate::client::{PipelineApi, RepositoryApi};
use crate::error::{Error, Result};
use crate::models::{PipelineDefinitionDisplay, PipelineDisplay, PipelineValueDisplay};
use crate::output::json::format_json;
use crate::output::progress::with_spinner;
use crate::output::{Formattable, print_one};
use crate::util::git;

/// Run the pipeline list command
pub async fn list(
    opts: &GlobalOptions,
    slug: &str,
    branch: Option<String>,
    limit: &LimitArgs,
) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;

    run_list_command::<Pipeline, PipelineDisplay, _, _>(
        opts,
        limit,
        "pipelines",
        |client, limit| async move {
            client
                .list_pipelines(&slug, branch.as_deref(), limit)
                .await
        },
    )
    .await
}

/// Run the pipeline definitions command
pub async fn definitions(opts: &GlobalOptions, project_id: &str, limit: &LimitArgs) -> Result<()> {
    let project_id = project_id.to_string();

    run_list_command::<PipelineDefinition, PipelineDefinitionDisplay, _, _>(
        opts,
        limit,
        "pipeline definitions",
        |client, limit| async move {
            client
                .list_pipeline_definitions(&project_id, limit)
                .await
        },
    )
    .await
}

/// Options for creating a pipeline definition
#[derive(Debug, Default)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub repo_id: Option<String>,
    pub checkout_repo_id: Option<String>,
    pub file_path: String,
    pub org_id: Option<String>,
}

/// Run the pipeline create command
///
/// Without `--repo-id` the organization's repositories are fetched and
/// offered in a selection list.
pub async fn create(opts: &GlobalOptions, project_id: &str, options: CreateOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let name = require_or_prompt(options.name, "Pipeline definition name")?;

    let repo_id = match options.repo_id {
        Some(id) => id,
        None => {
            let org_id = options.org_id.ok_or_else(|| {
                Error::InvalidArgument(
                    "--repo-id is required (or pass --org-id to pick a repository)".to_string(),
                )
            })?;

            let repos = with_spinner(
                "Fetching repositories...",
                ctx.client.list_repositories(&org_id, None),
            )
            .await?;
            if repos.is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "no repositories found for organization {}",
                    org_id
                )));
            }

            let names: Vec<String> = repos.iter().map(|r| r.full_name.clone()).collect();
            match select("Repository holding the config", &names)? {
                Some(idx) => repos[idx].id.clone(),
                None => {
                    println!("Aborted.");
                    return Ok(());
                }
            }
        }
    };

    let request = CreatePipelineDefinitionRequest::github_app(
        name,
        options.description,
        &repo_id,
        &options.file_path,
        options.checkout_repo_id.as_deref(),
    );
    debug!("Creating pipeline definition for project {}", project_id);

    let definition = ctx
        .client
        .create_pipeline_definition(project_id, &request)
        .await?;

    if ctx.format != OutputFormat::Json {
        eprintln!(
            "{} Created pipeline definition {}",
            "✓".green(),
            definition.name.bold()
        );
    }
    print_one(PipelineDefinitionDisplay::from(definition), ctx.format)
}

/// Branch and parameter flags of `pipeline run`
#[derive(Debug, Default)]
pub struct RunOptions {
    pub definition_id: Option<String>,
    pub branch: Option<String>,
    pub config_branch: Option<String>,
    pub checkout_branch: Option<String>,
    pub parameters: Vec<String>,
}

impl RunOptions {
    /// Build the run body; `--config-branch`/`--checkout-branch` win over `--branch`.
    pub fn request(&self) -> Result<RunPipelineRequest> {
        let branch_ref = |specific: &Option<String>| {
            specific
                .clone()
                .or_else(|| self.branch.clone())
                .map(|branch| BranchRef { branch })
        };

        Ok(RunPipelineRequest {
            definition_id: self.definition_id.clone(),
            config: branch_ref(&self.config_branch),
            checkout: branch_ref(&self.checkout_branch),
            parameters: parse_parameters(&self.parameters)?,
        })
    }
}

/// Run the pipeline run command
pub async fn run(opts: &GlobalOptions, slug: &str, options: &RunOptions) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;
    let request = options.request()?;

    let ctx = CommandContext::new(opts)?;
    let created = ctx.client.run_pipeline(&slug, &request).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&created)?);
    } else {
        println!(
            "{} Started pipeline {} ({}) for {}",
            "✓".green(),
            format!("#{}", created.number).bold(),
            created.state,
            slug
        );
        println!("  ID: {}", created.id.dimmed());
    }
    Ok(())
}

/// Run the pipeline values command
pub fn values(opts: &GlobalOptions, dir: &str) -> Result<()> {
    let info = git::inspect(Path::new(dir));
    let rows: Vec<PipelineValueDisplay> = git::pipeline_values(&info)
        .into_iter()
        .map(PipelineValueDisplay::from)
        .collect();
    rows.print(opts.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_branch_applies_to_config_and_checkout() {
        let options = RunOptions {
            branch: Some("main".into()),
            ..Default::default()
        };
        let request = options.request().unwrap();
        assert_eq!(request.config, Some(BranchRef { branch: "main".into() }));
        assert_eq!(request.checkout, Some(BranchRef { branch: "main".into() }));
    }

    #[test]
    fn test_specific_branches_win() {
        let options = RunOptions {
            definition_id: Some("def".into()),
            branch: Some("main".into()),
            checkout_branch: Some("feature".into()),
            parameters: vec!["deploy=true".into()],
            ..Default::default()
        };
        let body = serde_json::to_value(options.request().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "definition_id": "def",
                "config": {"branch": "main"},
                "checkout": {"branch": "feature"},
                "parameters": {"deploy": true}
            })
        );
    }

    #[test]
    fn test_no_flags_sends_empty_body() {
        let body = serde_json::to_value(RunOptions::default().request().unwrap()).unwrap();
        assert_eq!(body, json!({}));
    }
}
