//! Authenticated user and organization membership models

use serde::{Deserialize, Serialize};

/// The user the API token belongs to (`GET /me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Me {
    /// User ID
    pub id: String,

    /// VCS login
    pub login: String,

    /// Display name, when the user set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Me {
    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

/// Organization the user collaborates with (`GET /me/collaborations`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaboration {
    /// Organization ID
    pub id: String,

    /// Organization name
    pub name: String,

    /// VCS provider (github, bitbucket, circleci)
    #[serde(rename = "vcs-type", default)]
    pub vcs_type: String,

    /// Organization slug (`gh/acme`)
    #[serde(default)]
    pub slug: String,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
