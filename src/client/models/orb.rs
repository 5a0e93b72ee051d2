//! Orb registry models and orb references

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Reference to an orb, optionally pinned to a version.
///
/// Accepted forms: `ns/orb`, `ns/orb@1.2.3`, `ns/orb@volatile`,
/// `ns/orb@dev:label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbRef {
    pub namespace: String,
    pub name: String,
    pub version: Option<String>,
}

impl OrbRef {
    /// `namespace/name` without the version
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }

    /// Whether the version is a development label (`dev:...`)
    pub fn is_dev(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(|v| v.starts_with("dev:"))
    }

    /// Version, or an error naming the operation that needed one
    pub fn require_version(&self, operation: &str) -> crate::error::Result<&str> {
        self.version.as_deref().ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{} requires a versioned reference like {}@1.0.0",
                operation,
                self.full_name()
            ))
        })
    }
}

fn valid_segment(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromStr for OrbRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Error::InvalidArgument(format!(
                "invalid orb reference '{}': expected <namespace>/<orb>[@<version>]",
                s
            ))
        };

        let (path, version) = match s.split_once('@') {
            Some((path, version)) => (path, Some(version)),
            None => (s, None),
        };

        let (namespace, name) = path.split_once('/').ok_or_else(invalid)?;
        if !valid_segment(namespace) || !valid_segment(name) {
            return Err(invalid());
        }

        if let Some(v) = version {
            let ok = match v.strip_prefix("dev:") {
                Some(label) => !label.is_empty(),
                None => v == "volatile" || crate::util::version::parse(v).is_ok(),
            };
            if !ok {
                return Err(invalid());
            }
        }

        Ok(OrbRef {
            namespace: namespace.to_string(),
            name: name.to_string(),
            version: version.map(str::to_string),
        })
    }
}

impl fmt::Display for OrbRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}/{}@{}", self.namespace, self.name, v),
            None => write!(f, "{}/{}", self.namespace, self.name),
        }
    }
}

/// Usage statistics over the last 30 days
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbStatistics {
    #[serde(default)]
    pub last30_days_build_count: u64,

    #[serde(default)]
    pub last30_days_project_count: u64,

    #[serde(default)]
    pub last30_days_organization_count: u64,
}

/// A published version of an orb
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbVersionEntry {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Orb as returned by registry listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbSummary {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<OrbStatistics>,

    #[serde(default)]
    pub versions: Vec<OrbVersionEntry>,
}

impl OrbSummary {
    /// Most recent version, if the orb has been published
    pub fn latest_version(&self) -> Option<&str> {
        self.versions.first().map(|v| v.version.as_str())
    }
}

/// Orb details nested inside an orb version
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbDetail {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default)]
    pub statistics: OrbStatistics,

    #[serde(default)]
    pub versions: Vec<OrbVersionEntry>,
}

/// A specific orb version with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbVersion {
    pub id: String,

    pub version: String,

    #[serde(default)]
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    pub orb: OrbDetail,
}
