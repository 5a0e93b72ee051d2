//! Project and project environment variable models

use serde::{Deserialize, Serialize};

/// A followed project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project slug (`gh/acme/api`)
    pub slug: String,

    /// Repository name
    pub name: String,

    /// Project ID
    pub id: String,

    /// Owning organization name
    #[serde(default)]
    pub organization_name: String,

    /// Owning organization slug
    #[serde(default)]
    pub organization_slug: String,

    /// Owning organization ID
    #[serde(default)]
    pub organization_id: String,

    /// Repository details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs_info: Option<VcsInfo>,
}

/// Repository details attached to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcsInfo {
    #[serde(default)]
    pub vcs_url: String,

    #[serde(default)]
    pub provider: String,

    #[serde(default)]
    pub default_branch: String,
}

/// Project environment variable; the value comes back masked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvVar {
    pub name: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /organization/{org}/project`
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

/// Body of `POST /project/{slug}/envvar`
#[derive(Debug, Clone, Serialize)]
pub struct CreateEnvVarRequest {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserializes() {
        let project: Project = serde_json::from_str(
            r#"{
                "slug": "gh/acme/api",
                "name": "api",
                "id": "p-1",
                "organization_name": "acme",
                "organization_slug": "gh/acme",
                "organization_id": "o-1",
                "vcs_info": {
                    "vcs_url": "https://github.com/acme/api",
                    "provider": "GitHub",
                    "default_branch": "main"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(project.slug, "gh/acme/api");
        assert_eq!(project.vcs_info.unwrap().default_branch, "main");
    }
}
