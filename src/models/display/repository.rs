//! Repository display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Repository;
use crate::output::formatters::or_dash;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepositoryDisplay {
    #[tabled(rename = "NAME")]
    pub full_name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "DEFAULT BRANCH")]
    pub default_branch: String,

    #[tabled(rename = "VISIBILITY")]
    pub visibility: String,
}

impl From<Repository> for RepositoryDisplay {
    fn from(repo: Repository) -> Self {
        Self {
            default_branch: or_dash(repo.default_branch.as_deref()),
            visibility: if repo.private { "private" } else { "public" }.to_string(),
            full_name: repo.full_name,
            id: repo.id,
        }
    }
}
