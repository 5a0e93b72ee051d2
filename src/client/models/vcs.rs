//! VCS types, organization owners and project slugs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Version control provider an organization lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsType {
    /// GitHub (OAuth app)
    GitHub,
    /// Bitbucket Cloud
    Bitbucket,
    /// CircleCI-native organizations (GitHub App, GitLab)
    CircleCi,
}

impl VcsType {
    /// Short prefix used in slugs (`gh`, `bb`, `circleci`)
    pub fn slug_prefix(&self) -> &'static str {
        match self {
            VcsType::GitHub => "gh",
            VcsType::Bitbucket => "bb",
            VcsType::CircleCi => "circleci",
        }
    }

    /// Name expected by the GraphQL `vcsType` argument
    pub fn graphql_name(&self) -> &'static str {
        match self {
            VcsType::GitHub => "GITHUB",
            VcsType::Bitbucket => "BITBUCKET",
            VcsType::CircleCi => "CIRCLECI",
        }
    }

    /// Long provider name (`github`, `bitbucket`, `circleci`)
    pub fn long_name(&self) -> &'static str {
        match self {
            VcsType::GitHub => "github",
            VcsType::Bitbucket => "bitbucket",
            VcsType::CircleCi => "circleci",
        }
    }
}

impl FromStr for VcsType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gh" | "github" => Ok(VcsType::GitHub),
            "bb" | "bitbucket" => Ok(VcsType::Bitbucket),
            "circleci" => Ok(VcsType::CircleCi),
            other => Err(Error::InvalidArgument(format!(
                "unknown VCS type '{}': expected github, bitbucket or circleci",
                other
            ))),
        }
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Organization that owns contexts, namespaces and policies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Owner {
    /// Organization UUID
    Id(String),
    /// VCS type plus organization name
    Slug { vcs: VcsType, name: String },
}

impl Owner {
    /// Build an owner from either an org ID or a `<vcs> <org>` pair.
    pub fn from_parts(
        org_id: Option<&str>,
        vcs: Option<&str>,
        org_name: Option<&str>,
    ) -> crate::error::Result<Self> {
        match (org_id, vcs, org_name) {
            (Some(id), _, _) if !id.is_empty() => Ok(Owner::Id(id.to_string())),
            (_, Some(vcs), Some(name)) => Ok(Owner::Slug {
                vcs: vcs.parse()?,
                name: name.to_string(),
            }),
            _ => Err(Error::InvalidArgument(
                "provide --org-id or both <vcs-type> and <org-name>".to_string(),
            )),
        }
    }

    /// Slug form `gh/org`, when the owner was named rather than identified
    pub fn slug(&self) -> Option<String> {
        match self {
            Owner::Id(_) => None,
            Owner::Slug { vcs, name } => Some(format!("{}/{}", vcs.slug_prefix(), name)),
        }
    }

    /// Query parameters identifying the owner on REST list endpoints
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Owner::Id(id) => vec![("owner-id", id.clone())],
            Owner::Slug { .. } => vec![("owner-slug", self.slug().unwrap_or_default())],
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Id(id) => f.write_str(id),
            Owner::Slug { vcs, name } => write!(f, "{}/{}", vcs.slug_prefix(), name),
        }
    }
}

/// Project slug `vcs/org/repo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSlug {
    pub vcs: VcsType,
    pub org: String,
    pub repo: String,
}

impl FromStr for ProjectSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [vcs, org, repo] if !org.is_empty() && !repo.is_empty() => Ok(ProjectSlug {
                vcs: vcs.parse()?,
                org: org.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(Error::InvalidArgument(format!(
                "invalid project slug '{}': expected <vcs>/<org>/<repo>",
                s
            ))),
        }
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.vcs.slug_prefix(), self.org, self.repo)
    }
}
