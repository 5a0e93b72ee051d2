use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::TriggerApi;
use crate::client::models::{CreateTriggerRequest, Trigger};
use crate::client::pagination::{Page, page_query};
use crate::error::Result;

fn triggers_path(project_id: &str, definition_id: &str) -> String {
    format!(
        "/projects/{}/pipeline-definitions/{}/triggers",
        project_id, definition_id
    )
}

#[async_trait]
impl TriggerApi for CircleCiClient {
    async fn list_triggers_page(
        &self,
        project_id: &str,
        definition_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<Trigger>> {
        self.rest
            .get(
                &triggers_path(project_id, definition_id),
                &page_query(page_token.as_deref()),
            )
            .await
    }

    async fn create_trigger(
        &self,
        project_id: &str,
        definition_id: &str,
        request: &CreateTriggerRequest,
    ) -> Result<Trigger> {
        request.validate()?;
        self.rest
            .post(&triggers_path(project_id, definition_id), &[], request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use crate::client::models::{EventSource, PROVIDER_WEBHOOK};
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_webhook_trigger() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v2/projects/p1/pipeline-definitions/d1/triggers")
            .match_body(Matcher::Json(json!({
                "name": "hook",
                "event_source": {"provider": "webhook"}
            })))
            .with_status(201)
            .with_body(
                r#"{"id": "t1", "name": "hook",
                    "event_source": {"provider": "webhook", "webhook": {"url": "https://hooks.example/t1"}}}"#,
            )
            .create_async()
            .await;

        let request = CreateTriggerRequest {
            name: "hook".into(),
            description: None,
            event_source: EventSource {
                provider: PROVIDER_WEBHOOK.into(),
                repo: None,
                webhook: None,
            },
            event_preset: None,
            checkout_ref: None,
            config_ref: None,
        };

        let client = test_client(&server.url());
        let trigger = client.create_trigger("p1", "d1", &request).await.unwrap();
        assert_eq!(
            trigger.event_source.webhook.unwrap().url,
            "https://hooks.example/t1"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_trigger_never_hits_the_server() {
        let client = test_client("http://127.0.0.1:1");
        let request = CreateTriggerRequest {
            name: "hook".into(),
            description: None,
            event_source: EventSource {
                provider: PROVIDER_WEBHOOK.into(),
                repo: None,
                webhook: None,
            },
            event_preset: Some("all-pushes".into()),
            checkout_ref: None,
            config_ref: None,
        };
        assert!(client.create_trigger("p1", "d1", &request).await.is_err());
    }

    #[tokio::test]
    async fn test_list_triggers() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/projects/p1/pipeline-definitions/d1/triggers")
            .with_body(
                r#"{"items": [{"id": "t1", "name": "push", "event_source": {"provider": "github_app", "repo": {"external_id": "42"}}, "event_preset": "all-pushes"}]}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let triggers = client.list_triggers("p1", "d1", None).await.unwrap();
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].event_preset.as_deref(), Some("all-pushes"));
    }
}
