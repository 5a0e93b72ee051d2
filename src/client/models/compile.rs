//! Remote config and orb compilation results

use serde::{Deserialize, Serialize};

use crate::client::graphql::GraphQLError;

/// Result of `buildConfig` / `orbConfig`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub valid: bool,

    #[serde(default)]
    pub errors: Vec<GraphQLError>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_yaml: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_yaml: Option<String>,
}

impl ConfigResponse {
    /// Error messages, one per line
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// Key/value pair in the `pipelineValues` GraphQL argument
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PipelineValue {
    pub key: String,
    pub val: String,
}
