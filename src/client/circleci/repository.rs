use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::RepositoryApi;
use crate::client::models::Repository;
use crate::client::pagination::{Page, page_query};
use crate::error::Result;

#[async_trait]
impl RepositoryApi for CircleCiClient {
    async fn list_repositories_page(
        &self,
        org_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<Repository>> {
        self.rest
            .get(
                &format!("/private/soc/github-app/organization/{}/repositories", org_id),
                &page_query(page_token.as_deref()),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use crate::error::{ApiError, Error};
    use mockito::Matcher;

    const PATH: &str = "/api/v2/private/soc/github-app/organization/o1/repositories";

    #[tokio::test]
    async fn test_repositories_accept_numeric_ids() {
        let mut server = mockito::Server::new_async().await;
        let _p1 = server
            .mock("GET", PATH)
            .match_query(Matcher::Missing)
            .with_body(
                r#"{"items": [{"id": 42, "full_name": "acme/api", "default_branch": "main", "private": true}],
                    "next_page_token": "n"}"#,
            )
            .create_async()
            .await;
        let _p2 = server
            .mock("GET", PATH)
            .match_query(Matcher::UrlEncoded("page-token".into(), "n".into()))
            .with_body(r#"{"items": [{"id": "43", "full_name": "acme/web"}]}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let repos = client.list_repositories("o1", None).await.unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].id, "42");
        assert!(repos[0].private);
        assert_eq!(repos[1].id, "43");
    }

    #[tokio::test]
    async fn test_page_error_aborts_listing() {
        let mut server = mockito::Server::new_async().await;
        let _p1 = server
            .mock("GET", PATH)
            .match_query(Matcher::Missing)
            .with_body(r#"{"items": [{"id": 1, "full_name": "acme/a"}], "next_page_token": "n"}"#)
            .create_async()
            .await;
        let _p2 = server
            .mock("GET", PATH)
            .match_query(Matcher::UrlEncoded("page-token".into(), "n".into()))
            .with_status(500)
            .with_body(r#"{"message": "internal"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        match client.list_repositories("o1", None).await {
            Err(Error::Api(ApiError::ServerError(msg))) => assert_eq!(msg, "internal"),
            other => panic!("expected server error, got {:?}", other),
        }
    }
}
