//! Pipeline trigger commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::input::require_or_prompt;
use crate::cli::{CommandContext, EventSourceKind, LimitArgs, OutputFormat};
use crate::client::TriggerApi;
use crate::client::models::{
    CreateTriggerRequest, EventSource, PROVIDER_GITHUB_APP, PROVIDER_WEBHOOK, RepoRef, Trigger,
};
use crate::error::Result;
use crate::models::TriggerDisplay;
use crate::output::print_one;

/// Flags of `trigger create`
#[derive(Debug, Default)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub event_source: EventSourceKind,
    pub repo_id: Option<String>,
    pub event_preset: Option<String>,
    pub checkout_ref: Option<String>,
    pub config_ref: Option<String>,
}

impl CreateOptions {
    /// Build and validate the request body for a resolved trigger name.
    pub fn request(&self, name: String) -> Result<CreateTriggerRequest> {
        let event_source = match self.event_source {
            EventSourceKind::GithubApp => EventSource {
                provider: PROVIDER_GITHUB_APP.to_string(),
                repo: self.repo_id.as_deref().map(RepoRef::external),
                webhook: None,
            },
            EventSourceKind::Webhook => EventSource {
                provider: PROVIDER_WEBHOOK.to_string(),
                repo: None,
                webhook: None,
            },
        };

        let request = CreateTriggerRequest {
            name,
            description: self.description.clone(),
            event_source,
            event_preset: self.event_preset.clone(),
            checkout_ref: self.checkout_ref.clone(),
            config_ref: self.config_ref.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}

/// Run the trigger create command
pub async fn create(
    opts: &GlobalOptions,
    project_id: &str,
    definition_id: &str,
    options: CreateOptions,
) -> Result<()> {
    let name = require_or_prompt(options.name.clone(), "Trigger name")?;
    let request = options.request(name)?;

    let ctx = CommandContext::new(opts)?;
    let trigger = ctx
        .client
        .create_trigger(project_id, definition_id, &request)
        .await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created trigger {}", "✓".green(), trigger.name.bold());
    }
    print_one(TriggerDisplay::from(trigger), ctx.format)
}

/// Run the trigger list command
pub async fn list(
    opts: &GlobalOptions,
    project_id: &str,
    definition_id: &str,
    limit: &LimitArgs,
) -> Result<()> {
    let project_id = project_id.to_string();
    let definition_id = definition_id.to_string();

    run_list_command::<Trigger, TriggerDisplay, _, _>(
        opts,
        limit,
        "triggers",
        |client, limit| async move {
            client
                .list_triggers(&project_id, &definition_id, limit)
                .await
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_app_trigger_needs_repo() {
        let options = CreateOptions::default();
        assert!(options.request("pushes".into()).is_err());

        let options = CreateOptions {
            repo_id: Some("123".into()),
            event_preset: Some("all-pushes".into()),
            ..Default::default()
        };
        let request = options.request("pushes".into()).unwrap();
        assert_eq!(request.event_source.provider, "github_app");
        assert_eq!(
            request.event_source.repo.unwrap().external_id,
            "123".to_string()
        );
    }

    #[test]
    fn test_webhook_trigger_drops_repo_and_rejects_preset() {
        let options = CreateOptions {
            event_source: EventSourceKind::Webhook,
            repo_id: Some("ignored".into()),
            ..Default::default()
        };
        let request = options.request("hook".into()).unwrap();
        assert_eq!(request.event_source.provider, "webhook");
        assert!(request.event_source.repo.is_none());

        let options = CreateOptions {
            event_source: EventSourceKind::Webhook,
            event_preset: Some("all-pushes".into()),
            ..Default::default()
        };
        assert!(options.request("hook".into()).is_err());
    }
}
