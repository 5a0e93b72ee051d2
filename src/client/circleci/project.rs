use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::ProjectApi;
use crate::client::models::{
    CreateEnvVarRequest, CreateProjectRequest, Project, ProjectEnvVar, ProjectSlug,
};
use crate::client::pagination::{Page, page_query};
use crate::error::Result;

#[async_trait]
impl ProjectApi for CircleCiClient {
    async fn get_project(&self, slug: &ProjectSlug) -> Result<Project> {
        self.rest.get(&format!("/project/{}", slug), &[]).await
    }

    async fn create_project(&self, org: &str, name: &str) -> Result<Project> {
        let body = CreateProjectRequest {
            name: name.to_string(),
        };
        self.rest
            .post(&format!("/organization/{}/project", org), &[], &body)
            .await
    }

    async fn list_project_env_vars_page(
        &self,
        slug: &ProjectSlug,
        page_token: Option<String>,
    ) -> Result<Page<ProjectEnvVar>> {
        self.rest
            .get(
                &format!("/project/{}/envvar", slug),
                &page_query(page_token.as_deref()),
            )
            .await
    }

    async fn create_project_env_var(
        &self,
        slug: &ProjectSlug,
        name: &str,
        value: &str,
    ) -> Result<ProjectEnvVar> {
        let body = CreateEnvVarRequest {
            name: name.to_string(),
            value: value.to_string(),
        };
        self.rest
            .post(&format!("/project/{}/envvar", slug), &[], &body)
            .await
    }

    async fn delete_project_env_var(&self, slug: &ProjectSlug, name: &str) -> Result<()> {
        let _: serde_json::Value = self
            .rest
            .delete(&format!("/project/{}/envvar/{}", slug, name))
            .await?;
        Ok(())
    }
}
