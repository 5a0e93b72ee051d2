//! Pipeline definition, listing and run operations

use async_trait::async_trait;

use crate::client::models::{
    CreatePipelineDefinitionRequest, Pipeline, PipelineCreated, PipelineDefinition, ProjectSlug,
    RunPipelineRequest,
};
use crate::client::pagination::{Page, collect_all_pages};
use crate::error::Result;

#[async_trait]
pub trait PipelineApi: Send + Sync {
    /// Fetch one page of a project's pipeline definitions
    async fn list_pipeline_definitions_page(
        &self,
        project_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<PipelineDefinition>>;

    async fn create_pipeline_definition(
        &self,
        project_id: &str,
        request: &CreatePipelineDefinitionRequest,
    ) -> Result<PipelineDefinition>;

    /// Fetch one page of recent pipelines, optionally for a single branch
    async fn list_pipelines_page(
        &self,
        slug: &ProjectSlug,
        branch: Option<&str>,
        page_token: Option<String>,
    ) -> Result<Page<Pipeline>>;

    /// Trigger a pipeline run
    async fn run_pipeline(
        &self,
        slug: &ProjectSlug,
        request: &RunPipelineRequest,
    ) -> Result<PipelineCreated>;

    /// Every pipeline definition of a project
    async fn list_pipeline_definitions(
        &self,
        project_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PipelineDefinition>> {
        collect_all_pages(
            |token| self.list_pipeline_definitions_page(project_id, token),
            limit,
        )
        .await
    }

    /// Recent pipelines of a project, newest first
    async fn list_pipelines(
        &self,
        slug: &ProjectSlug,
        branch: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Pipeline>> {
        collect_all_pages(|token| self.list_pipelines_page(slug, branch, token), limit).await
    }
}
