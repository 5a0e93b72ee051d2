//! Pipeline trigger models

use serde::{Deserialize, Serialize};

use super::pipeline::RepoRef;
use crate::error::{Error, Result};

/// Event source provider for GitHub App repository events
pub const PROVIDER_GITHUB_APP: &str = "github_app";

/// Event source provider for inbound webhooks
pub const PROVIDER_WEBHOOK: &str = "webhook";

/// Trigger attached to a pipeline definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub event_source: EventSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_preset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Source of the events that fire a trigger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSource {
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookInfo>,
}

/// Webhook endpoint details returned for webhook triggers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookInfo {
    #[serde(default)]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

/// Body of `POST .../pipeline-definitions/{id}/triggers`
#[derive(Debug, Clone, Serialize)]
pub struct CreateTriggerRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub event_source: EventSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_preset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_ref: Option<String>,
}

impl CreateTriggerRequest {
    /// Reject combinations the API would refuse.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgument("trigger name is required".to_string()));
        }
        match self.event_source.provider.as_str() {
            PROVIDER_GITHUB_APP => {
                if self.event_source.repo.is_none() {
                    return Err(Error::InvalidArgument(
                        "github_app triggers require --repo-id".to_string(),
                    ));
                }
            }
            PROVIDER_WEBHOOK => {
                if self.event_preset.is_some() {
                    return Err(Error::InvalidArgument(
                        "--event-preset is only valid for github_app triggers".to_string(),
                    ));
                }
            }
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unknown event source '{}'",
                    other
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(provider: &str, repo: Option<&str>, preset: Option<&str>) -> CreateTriggerRequest {
        CreateTriggerRequest {
            name: "on-push".to_string(),
            description: None,
            event_source: EventSource {
                provider: provider.to_string(),
                repo: repo.map(RepoRef::external),
                webhook: None,
            },
            event_preset: preset.map(str::to_string),
            checkout_ref: None,
            config_ref: None,
        }
    }

    #[test]
    fn test_github_app_requires_repo() {
        assert!(request(PROVIDER_GITHUB_APP, None, None).validate().is_err());
        assert!(
            request(PROVIDER_GITHUB_APP, Some("99"), Some("all-pushes"))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_webhook_rejects_preset() {
        assert!(request(PROVIDER_WEBHOOK, None, None).validate().is_ok());
        assert!(
            request(PROVIDER_WEBHOOK, None, Some("all-pushes"))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_serialized_body_skips_unset() {
        let value = serde_json::to_value(request(PROVIDER_WEBHOOK, None, None)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "on-push", "event_source": {"provider": "webhook"}})
        );
    }
}
