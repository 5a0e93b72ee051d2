//! Pipeline trigger operations

use async_trait::async_trait;

use crate::client::models::{CreateTriggerRequest, Trigger};
use crate::client::pagination::{Page, collect_all_pages};
use crate::error::Result;

#[async_trait]
pub trait TriggerApi: Send + Sync {
    async fn list_triggers_page(
        &self,
        project_id: &str,
        definition_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<Trigger>>;

    async fn create_trigger(
        &self,
        project_id: &str,
        definition_id: &str,
        request: &CreateTriggerRequest,
    ) -> Result<Trigger>;

    /// Every trigger attached to a pipeline definition
    async fn list_triggers(
        &self,
        project_id: &str,
        definition_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Trigger>> {
        collect_all_pages(
            |token| self.list_triggers_page(project_id, definition_id, token),
            limit,
        )
        .await
    }
}
