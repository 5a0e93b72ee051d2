//! Context and context environment variable operations

use async_trait::async_trait;

use crate::client::models::{Context, ContextEnvVar, Owner};
use crate::client::pagination::{Page, collect_all_pages};
use crate::error::{ApiError, Result};

#[async_trait]
pub trait ContextApi: Send + Sync {
    /// Fetch one page of an owner's contexts
    async fn list_contexts_page(
        &self,
        owner: &Owner,
        page_token: Option<String>,
    ) -> Result<Page<Context>>;

    /// Create a context owned by `owner`
    async fn create_context(&self, owner: &Owner, name: &str) -> Result<Context>;

    /// Delete a context by ID
    async fn delete_context(&self, context_id: &str) -> Result<()>;

    /// Fetch one page of a context's environment variables
    async fn list_context_env_vars_page(
        &self,
        context_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<ContextEnvVar>>;

    /// Create or replace an environment variable in a context
    async fn store_context_env_var(
        &self,
        context_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ContextEnvVar>;

    /// Remove an environment variable from a context
    async fn remove_context_env_var(&self, context_id: &str, name: &str) -> Result<()>;

    /// Every context of `owner`
    async fn list_contexts(&self, owner: &Owner, limit: Option<usize>) -> Result<Vec<Context>> {
        collect_all_pages(|token| self.list_contexts_page(owner, token), limit).await
    }

    /// Every environment variable of a context
    async fn list_context_env_vars(&self, context_id: &str) -> Result<Vec<ContextEnvVar>> {
        collect_all_pages(|token| self.list_context_env_vars_page(context_id, token), None).await
    }

    /// Find a context by name among the owner's contexts.
    async fn find_context(&self, owner: &Owner, name: &str) -> Result<Context> {
        self.list_contexts(owner, None)
            .await?
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| {
                ApiError::NotFound(format!("context '{}' does not exist for {}", name, owner))
                    .into()
            })
    }
}
