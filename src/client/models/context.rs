//! Context and context environment variable models

use serde::{Deserialize, Serialize};

use super::vcs::Owner;

/// Organization context holding shared secrets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Context ID
    pub id: String,

    /// Context name, unique within the owner
    pub name: String,

    /// Creation timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Environment variable stored in a context; values are never returned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextEnvVar {
    /// Variable name
    pub variable: String,

    /// Owning context ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Owner reference in a create-context body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OwnerRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(rename = "type")]
    pub owner_type: String,
}

impl From<&Owner> for OwnerRef {
    fn from(owner: &Owner) -> Self {
        match owner {
            Owner::Id(id) => Self {
                id: Some(id.clone()),
                slug: None,
                owner_type: "organization".to_string(),
            },
            Owner::Slug { .. } => Self {
                id: None,
                slug: owner.slug(),
                owner_type: "organization".to_string(),
            },
        }
    }
}

/// Body of `POST /context`
#[derive(Debug, Clone, Serialize)]
pub struct CreateContextRequest {
    pub name: String,
    pub owner: OwnerRef,
}

/// Body of `PUT /context/{id}/environment-variable/{name}`
#[derive(Debug, Clone, Serialize)]
pub struct StoreSecretRequest {
    pub value: String,
}
