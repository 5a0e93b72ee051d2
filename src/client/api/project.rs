//! Project and project environment variable operations

use async_trait::async_trait;

use crate::client::models::{Project, ProjectEnvVar, ProjectSlug};
use crate::client::pagination::{Page, collect_all_pages};
use crate::error::Result;

#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Look up a project by slug
    async fn get_project(&self, slug: &ProjectSlug) -> Result<Project>;

    /// Create a project in an organization (`gh/org` slug or org ID)
    async fn create_project(&self, org: &str, name: &str) -> Result<Project>;

    /// Fetch one page of a project's environment variables (values masked)
    async fn list_project_env_vars_page(
        &self,
        slug: &ProjectSlug,
        page_token: Option<String>,
    ) -> Result<Page<ProjectEnvVar>>;

    /// Create a project environment variable
    async fn create_project_env_var(
        &self,
        slug: &ProjectSlug,
        name: &str,
        value: &str,
    ) -> Result<ProjectEnvVar>;

    /// Delete a project environment variable
    async fn delete_project_env_var(&self, slug: &ProjectSlug, name: &str) -> Result<()>;

    /// Every environment variable of a project
    async fn list_project_env_vars(
        &self,
        slug: &ProjectSlug,
        limit: Option<usize>,
    ) -> Result<Vec<ProjectEnvVar>> {
        collect_all_pages(|token| self.list_project_env_vars_page(slug, token), limit).await
    }
}
