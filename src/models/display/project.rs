//! Project display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Project, ProjectEnvVar};
use crate::output::formatters::{format_optional_timestamp, or_dash};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectDisplay {
    #[tabled(rename = "SLUG")]
    pub slug: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    #[tabled(rename = "DEFAULT BRANCH")]
    pub default_branch: String,
}

impl From<Project> for ProjectDisplay {
    fn from(project: Project) -> Self {
        let default_branch = or_dash(
            project
                .vcs_info
                .as_ref()
                .map(|v| v.default_branch.as_str()),
        );
        Self {
            slug: project.slug,
            name: project.name,
            id: project.id,
            organization: project.organization_name,
            default_branch,
        }
    }
}

/// Project environment variable with its masked value
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectEnvVarDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "VALUE")]
    pub value: String,

    #[tabled(rename = "CREATED")]
    pub created_at: String,
}

impl From<ProjectEnvVar> for ProjectEnvVarDisplay {
    fn from(var: ProjectEnvVar) -> Self {
        Self {
            created_at: format_optional_timestamp(var.created_at.as_deref()),
            name: var.name,
            value: var.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::VcsInfo;

    #[test]
    fn test_project_display_branch() {
        let mut project = Project {
            slug: "gh/acme/api".to_string(),
            name: "api".to_string(),
            id: "p1".to_string(),
            organization_name: "acme".to_string(),
            organization_slug: "gh/acme".to_string(),
            organization_id: "o1".to_string(),
            vcs_info: None,
        };
        assert_eq!(ProjectDisplay::from(project.clone()).default_branch, "-");

        project.vcs_info = Some(VcsInfo {
            vcs_url: String::new(),
            provider: "GitHub".to_string(),
            default_branch: "main".to_string(),
        });
        assert_eq!(ProjectDisplay::from(project).default_branch, "main");
    }
}
