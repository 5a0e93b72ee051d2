//! Config policy service models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Policy bundle: policy file path to rego source
pub type PolicyBundle = BTreeMap<String, String>;

/// Body of a bundle upload
#[derive(Debug, Clone, Serialize)]
pub struct BundlePayload {
    pub policies: PolicyBundle,
}

/// Changes a bundle upload made (or would make, for dry runs)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BundleDiff {
    #[serde(default)]
    pub created: Vec<String>,

    #[serde(default)]
    pub deleted: Vec<String>,

    #[serde(default)]
    pub modified: Vec<String>,
}

impl BundleDiff {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.deleted.is_empty() && self.modified.is_empty()
    }
}

/// A logged policy decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionLog {
    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub decision: DecisionOutcome,

    #[serde(default)]
    pub metadata: DecisionMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken_ms: Option<u64>,
}

/// Outcome of a policy evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionOutcome {
    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Build the decision was made for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionMetadata {
    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub branch: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<u64>,
}

/// Filters for the decision log listing
#[derive(Debug, Clone, Default)]
pub struct DecisionQuery {
    pub after: Option<String>,
    pub before: Option<String>,
    pub branch: Option<String>,
    pub project_id: Option<String>,
}

impl DecisionQuery {
    /// Query parameters for the page starting at `offset`
    pub fn to_query_params(&self, offset: usize) -> Vec<(&'static str, String)> {
        let mut params = vec![("offset", offset.to_string())];
        if let Some(ref after) = self.after {
            params.push(("after", after.clone()));
        }
        if let Some(ref before) = self.before {
            params.push(("before", before.clone()));
        }
        if let Some(ref branch) = self.branch {
            params.push(("branch", branch.clone()));
        }
        if let Some(ref project_id) = self.project_id {
            params.push(("project_id", project_id.clone()));
        }
        params
    }
}

/// Decision logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionSettings {
    pub enabled: bool,
}
