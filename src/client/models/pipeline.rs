//! Pipeline, pipeline definition and pipeline run models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Repository reference by provider ID
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    pub external_id: String,
}

impl RepoRef {
    /// Reference a repository by its provider ID only
    pub fn external(id: impl Into<String>) -> Self {
        Self {
            full_name: None,
            external_id: id.into(),
        }
    }
}

/// Where a pipeline definition reads its config from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// Where a pipeline definition checks code out from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSource {
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoRef>,
}

/// Pipeline definition attached to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDefinition {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    pub config_source: ConfigSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_source: Option<CheckoutSource>,
}

/// Body of `POST /projects/{project_id}/pipeline-definitions`
#[derive(Debug, Clone, Serialize)]
pub struct CreatePipelineDefinitionRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub config_source: ConfigSource,

    pub checkout_source: CheckoutSource,
}

impl CreatePipelineDefinitionRequest {
    /// Definition reading `file_path` from a GitHub App repository, checking out
    /// the same repository unless `checkout_repo_id` names another one.
    pub fn github_app(
        name: impl Into<String>,
        description: Option<String>,
        config_repo_id: &str,
        file_path: &str,
        checkout_repo_id: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            config_source: ConfigSource {
                provider: "github_app".to_string(),
                repo: Some(RepoRef::external(config_repo_id)),
                file_path: Some(file_path.to_string()),
            },
            checkout_source: CheckoutSource {
                provider: "github_app".to_string(),
                repo: Some(RepoRef::external(
                    checkout_repo_id.unwrap_or(config_repo_id),
                )),
            },
        }
    }
}

/// A pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,

    pub number: u64,

    pub state: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs: Option<PipelineVcs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<PipelineTrigger>,
}

/// VCS details of a pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineVcs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

/// What started a pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineTrigger {
    #[serde(rename = "type")]
    pub trigger_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<TriggerActor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerActor {
    #[serde(default)]
    pub login: String,
}

/// Branch selector used by pipeline runs
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BranchRef {
    pub branch: String,
}

/// Body of `POST /project/{slug}/pipeline/run`
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunPipelineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BranchRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<BranchRef>,

    #[serde(skip_serializing_if = "Map::is_empty")]
    pub parameters: Map<String, Value>,
}

/// Response of a pipeline run request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineCreated {
    pub id: String,

    pub number: u64,

    pub state: String,

    #[serde(default)]
    pub created_at: String,
}
