use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::ContextApi;
use crate::client::models::{
    Context, ContextEnvVar, CreateContextRequest, Owner, OwnerRef, StoreSecretRequest,
};
use crate::client::pagination::{Page, page_query};
use crate::error::Result;

#[async_trait]
impl ContextApi for CircleCiClient {
    async fn list_contexts_page(
        &self,
        owner: &Owner,
        page_token: Option<String>,
    ) -> Result<Page<Context>> {
        let mut query = owner.query_params();
        query.extend(page_query(page_token.as_deref()));
        self.rest.get("/context", &query).await
    }

    async fn create_context(&self, owner: &Owner, name: &str) -> Result<Context> {
        let body = CreateContextRequest {
            name: name.to_string(),
            owner: OwnerRef::from(owner),
        };
        self.rest.post("/context", &[], &body).await
    }

    async fn delete_context(&self, context_id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .rest
            .delete(&format!("/context/{}", context_id))
            .await?;
        Ok(())
    }

    async fn list_context_env_vars_page(
        &self,
        context_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<ContextEnvVar>> {
        self.rest
            .get(
                &format!("/context/{}/environment-variable", context_id),
                &page_query(page_token.as_deref()),
            )
            .await
    }

    async fn store_context_env_var(
        &self,
        context_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ContextEnvVar> {
        let body = StoreSecretRequest {
            value: value.to_string(),
        };
        self.rest
            .put(
                &format!("/context/{}/environment-variable/{}", context_id, name),
                &body,
            )
            .await
    }

    async fn remove_context_env_var(&self, context_id: &str, name: &str) -> Result<()> {
        let _: serde_json::Value = self
            .rest
            .delete(&format!(
                "/context/{}/environment-variable/{}",
                context_id, name
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use crate::client::models::VcsType;
    use crate::error::{ApiError, Error};
    use mockito::Matcher;
    use serde_json::json;

    fn acme() -> Owner {
        Owner::Slug {
            vcs: VcsType::GitHub,
            name: "acme".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_contexts_walks_every_page() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/v2/context")
            .match_query(Matcher::Exact("owner-slug=gh%2Facme".into()))
            .with_body(
                r#"{"items": [{"id": "c1", "name": "deploy"}], "next_page_token": "p2"}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/v2/context")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("owner-slug".into(), "gh/acme".into()),
                Matcher::UrlEncoded("page-token".into(), "p2".into()),
            ]))
            .with_body(r#"{"items": [{"id": "c2", "name": "staging"}], "next_page_token": null}"#)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let contexts = client.list_contexts(&acme(), None).await.unwrap();

        let names: Vec<&str> = contexts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["deploy", "staging"]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_context_reports_missing_name() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/context")
            .match_query(Matcher::Any)
            .with_body(r#"{"items": [{"id": "c1", "name": "deploy"}]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let found = client.find_context(&acme(), "deploy").await.unwrap();
        assert_eq!(found.id, "c1");

        match client.find_context(&acme(), "nope").await {
            Err(Error::Api(ApiError::NotFound(msg))) => assert!(msg.contains("'nope'")),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_context_sends_owner() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v2/context")
            .match_body(Matcher::Json(json!({
                "name": "deploy",
                "owner": {"id": "org-uuid", "type": "organization"}
            })))
            .with_status(201)
            .with_body(r#"{"id": "c9", "name": "deploy", "created_at": "2024-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let ctx = client
            .create_context(&Owner::Id("org-uuid".into()), "deploy")
            .await
            .unwrap();
        assert_eq!(ctx.id, "c9");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_secret_round_trip_paths() {
        let mut server = mockito::Server::new_async().await;
        let store = server
            .mock("PUT", "/api/v2/context/c1/environment-variable/API_KEY")
            .match_body(Matcher::Json(json!({"value": "s3cret"})))
            .with_body(r#"{"variable": "API_KEY", "context_id": "c1"}"#)
            .create_async()
            .await;
        let remove = server
            .mock("DELETE", "/api/v2/context/c1/environment-variable/API_KEY")
            .with_body(r#"{"message": "Environment variable deleted."}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let var = client
            .store_context_env_var("c1", "API_KEY", "s3cret")
            .await
            .unwrap();
        assert_eq!(var.variable, "API_KEY");
        client.remove_context_env_var("c1", "API_KEY").await.unwrap();

        store.assert_async().await;
        remove.assert_async().await;
    }
}
