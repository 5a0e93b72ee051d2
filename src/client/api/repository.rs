//! GitHub App repository listing

use async_trait::async_trait;

use crate::client::models::Repository;
use crate::client::pagination::{Page, collect_all_pages};
use crate::error::Result;

#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Fetch one page of repositories the organization's GitHub App can see
    async fn list_repositories_page(
        &self,
        org_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<Repository>>;

    /// Every repository visible to the organization
    async fn list_repositories(
        &self,
        org_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Repository>> {
        collect_all_pages(|token| self.list_repositories_page(org_id, token), limit).await
    }
}
