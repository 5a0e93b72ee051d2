//! Policy bundle and decision log display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{BundleDiff, DecisionLog};
use crate::output::formatters::{format_duration_ms, format_timestamp, or_dash};

/// A policy file in the active bundle
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PolicyDisplay {
    #[tabled(rename = "POLICY")]
    pub name: String,

    #[tabled(rename = "LINES")]
    pub lines: usize,
}

impl From<(String, String)> for PolicyDisplay {
    fn from((name, source): (String, String)) -> Self {
        Self {
            name,
            lines: source.lines().count(),
        }
    }
}

/// One file touched by a bundle upload
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BundleChangeDisplay {
    #[tabled(rename = "CHANGE")]
    pub change: String,

    #[tabled(rename = "POLICY")]
    pub policy: String,
}

impl BundleChangeDisplay {
    /// Flatten a diff into rows: created, then modified, then deleted
    pub fn rows(diff: BundleDiff) -> Vec<Self> {
        let tag = |change: &str, names: Vec<String>| {
            names
                .into_iter()
                .map(|policy| Self {
                    change: change.to_string(),
                    policy,
                })
                .collect::<Vec<_>>()
        };

        let mut rows = tag("created", diff.created);
        rows.extend(tag("modified", diff.modified));
        rows.extend(tag("deleted", diff.deleted));
        rows
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DecisionDisplay {
    #[tabled(rename = "TIME")]
    pub created_at: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "BRANCH")]
    pub branch: String,

    #[tabled(rename = "PROJECT")]
    pub project_id: String,

    #[tabled(rename = "DURATION")]
    pub duration: String,
}

impl From<DecisionLog> for DecisionDisplay {
    fn from(log: DecisionLog) -> Self {
        Self {
            created_at: format_timestamp(&log.created_at),
            status: log.decision.status,
            branch: or_dash(Some(log.metadata.branch.as_str())),
            project_id: or_dash(Some(log.metadata.project_id.as_str())),
            duration: log
                .time_taken_ms
                .map(format_duration_ms)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
