//! Pipeline display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Pipeline, PipelineDefinition};
use crate::output::formatters::{format_timestamp, or_dash};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PipelineDisplay {
    #[tabled(rename = "NUMBER")]
    pub number: u64,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "BRANCH")]
    pub branch: String,

    #[tabled(rename = "REVISION")]
    pub revision: String,

    #[tabled(rename = "TRIGGER")]
    pub trigger: String,

    #[tabled(rename = "CREATED")]
    pub created_at: String,

    #[tabled(rename = "ID")]
    pub id: String,
}

impl From<Pipeline> for PipelineDisplay {
    fn from(pipeline: Pipeline) -> Self {
        let vcs = pipeline.vcs.as_ref();
        let branch = vcs.and_then(|v| v.branch.as_deref().or(v.tag.as_deref()));
        let revision: Option<String> = vcs
            .and_then(|v| v.revision.as_deref())
            .map(|r| r.chars().take(7).collect());

        Self {
            number: pipeline.number,
            branch: or_dash(branch),
            revision: or_dash(revision.as_deref()),
            trigger: or_dash(pipeline.trigger.as_ref().map(|t| t.trigger_type.as_str())),
            created_at: format_timestamp(&pipeline.created_at),
            state: pipeline.state,
            id: pipeline.id,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PipelineDefinitionDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "CONFIG REPO")]
    pub config_repo: String,

    #[tabled(rename = "CONFIG PATH")]
    pub file_path: String,
}

impl From<PipelineDefinition> for PipelineDefinitionDisplay {
    fn from(def: PipelineDefinition) -> Self {
        let config_repo = def.config_source.repo.as_ref().map(|r| {
            r.full_name
                .clone()
                .unwrap_or_else(|| r.external_id.clone())
        });

        Self {
            config_repo: or_dash(config_repo.as_deref()),
            file_path: or_dash(def.config_source.file_path.as_deref()),
            name: def.name,
            id: def.id,
        }
    }
}

/// One locally derived pipeline value
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PipelineValueDisplay {
    #[tabled(rename = "KEY")]
    pub key: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl From<(String, String)> for PipelineValueDisplay {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}
