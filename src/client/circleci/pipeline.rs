use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::PipelineApi;
use crate::client::models::{
    CreatePipelineDefinitionRequest, Pipeline, PipelineCreated, PipelineDefinition, ProjectSlug,
    RunPipelineRequest,
};
use crate::client::pagination::{Page, page_query};
use crate::error::Result;

#[async_trait]
impl PipelineApi for CircleCiClient {
    async fn list_pipeline_definitions_page(
        &self,
        project_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<PipelineDefinition>> {
        self.rest
            .get(
                &format!("/projects/{}/pipeline-definitions", project_id),
                &page_query(page_token.as_deref()),
            )
            .await
    }

    async fn create_pipeline_definition(
        &self,
        project_id: &str,
        request: &CreatePipelineDefinitionRequest,
    ) -> Result<PipelineDefinition> {
        self.rest
            .post(
                &format!("/projects/{}/pipeline-definitions", project_id),
                &[],
                request,
            )
            .await
    }

    async fn list_pipelines_page(
        &self,
        slug: &ProjectSlug,
        branch: Option<&str>,
        page_token: Option<String>,
    ) -> Result<Page<Pipeline>> {
        let mut query = page_query(page_token.as_deref());
        if let Some(branch) = branch {
            query.push(("branch", branch.to_string()));
        }
        self.rest
            .get(&format!("/project/{}/pipeline", slug), &query)
            .await
    }

    async fn run_pipeline(
        &self,
        slug: &ProjectSlug,
        request: &RunPipelineRequest,
    ) -> Result<PipelineCreated> {
        self.rest
            .post(&format!("/project/{}/pipeline/run", slug), &[], request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use crate::client::models::BranchRef;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_pipelines_honours_limit_and_branch() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/v2/project/gh/acme/api/pipeline")
            .match_query(Matcher::Exact("branch=main".into()))
            .with_body(
                r#"{"items": [
                    {"id": "p3", "number": 3, "state": "created"},
                    {"id": "p2", "number": 2, "state": "created"}
                ], "next_page_token": "more"}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let slug: ProjectSlug = "gh/acme/api".parse().unwrap();
        let pipelines = client
            .list_pipelines(&slug, Some("main"), Some(1))
            .await
            .unwrap();

        assert_eq!(pipelines.len(), 1);
        assert_eq!(pipelines[0].number, 3);
        first.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_definition_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v2/projects/proj-1/pipeline-definitions")
            .match_body(Matcher::Json(json!({
                "name": "build",
                "config_source": {
                    "provider": "github_app",
                    "repo": {"external_id": "42"},
                    "file_path": ".circleci/config.yml"
                },
                "checkout_source": {"provider": "github_app", "repo": {"external_id": "42"}}
            })))
            .with_status(201)
            .with_body(
                r#"{"id": "d1", "name": "build",
                    "config_source": {"provider": "github_app", "repo": {"full_name": "acme/api", "external_id": "42"}, "file_path": ".circleci/config.yml"}}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let request = CreatePipelineDefinitionRequest::github_app(
            "build",
            None,
            "42",
            ".circleci/config.yml",
            None,
        );
        let def = client
            .create_pipeline_definition("proj-1", &request)
            .await
            .unwrap();
        assert_eq!(def.id, "d1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_pipeline() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v2/project/gh/acme/api/pipeline/run")
            .match_body(Matcher::Json(json!({
                "definition_id": "d1",
                "config": {"branch": "main"},
                "checkout": {"branch": "main"}
            })))
            .with_status(201)
            .with_body(r#"{"id": "p9", "number": 9, "state": "created", "created_at": "2024-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let slug: ProjectSlug = "gh/acme/api".parse().unwrap();
        let request = RunPipelineRequest {
            definition_id: Some("d1".into()),
            config: Some(BranchRef {
                branch: "main".into(),
            }),
            checkout: Some(BranchRef {
                branch: "main".into(),
            }),
            ..Default::default()
        };
        let created = client.run_pipeline(&slug, &request).await.unwrap();
        assert_eq!(created.number, 9);
        mock.assert_async().await;
    }
}
