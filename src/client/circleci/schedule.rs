use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::ScheduleApi;
use crate::client::models::{
    CreateScheduleRequest, ProjectSlug, Schedule, UpdateScheduleRequest,
};
use crate::client::pagination::{Page, page_query};
use crate::error::Result;

#[async_trait]
impl ScheduleApi for CircleCiClient {
    async fn list_schedules_page(
        &self,
        slug: &ProjectSlug,
        page_token: Option<String>,
    ) -> Result<Page<Schedule>> {
        self.rest
            .get(
                &format!("/project/{}/schedule", slug),
                &page_query(page_token.as_deref()),
            )
            .await
    }

    async fn get_schedule(&self, schedule_id: &str) -> Result<Schedule> {
        self.rest
            .get(&format!("/schedule/{}", schedule_id), &[])
            .await
    }

    async fn create_schedule(
        &self,
        slug: &ProjectSlug,
        request: &CreateScheduleRequest,
    ) -> Result<Schedule> {
        self.rest
            .post(&format!("/project/{}/schedule", slug), &[], request)
            .await
    }

    async fn update_schedule(
        &self,
        schedule_id: &str,
        request: &UpdateScheduleRequest,
    ) -> Result<Schedule> {
        self.rest
            .patch(&format!("/schedule/{}", schedule_id), request)
            .await
    }

    async fn delete_schedule(&self, schedule_id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .rest
            .delete(&format!("/schedule/{}", schedule_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use crate::client::models::Timetable;
    use mockito::Matcher;
    use serde_json::{Map, json};

    const SCHEDULE: &str = r#"{
        "id": "s1", "name": "nightly", "project-slug": "gh/acme/api",
        "timetable": {"per-hour": 1, "hours-of-day": [3], "days-of-week": ["MON"]},
        "actor": {"id": "u1", "login": "octocat", "name": "Octo"},
        "parameters": {"deploy": true}
    }"#;

    #[tokio::test]
    async fn test_create_schedule_uses_kebab_case() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v2/project/gh/acme/api/schedule")
            .match_body(Matcher::Json(json!({
                "name": "nightly",
                "attribution-actor": "current",
                "parameters": {"branch": "main"},
                "timetable": {"per-hour": 1, "hours-of-day": [3], "days-of-week": ["MON"]}
            })))
            .with_status(201)
            .with_body(SCHEDULE)
            .create_async()
            .await;

        let mut parameters = Map::new();
        parameters.insert("branch".into(), json!("main"));
        let request = CreateScheduleRequest {
            name: "nightly".into(),
            description: None,
            attribution_actor: "current".into(),
            parameters,
            timetable: Timetable {
                per_hour: 1,
                hours_of_day: vec![3],
                days_of_week: vec!["MON".into()],
                ..Default::default()
            },
        };

        let client = test_client(&server.url());
        let slug: ProjectSlug = "gh/acme/api".parse().unwrap();
        let schedule = client.create_schedule(&slug, &request).await.unwrap();

        assert_eq!(schedule.project_slug, "gh/acme/api");
        assert_eq!(schedule.timetable.hours_of_day, vec![3]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_sends_only_set_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v2/schedule/s1")
            .match_body(Matcher::Json(json!({"description": "runs at 3"})))
            .with_body(SCHEDULE)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let request = UpdateScheduleRequest {
            description: Some("runs at 3".into()),
            ..Default::default()
        };
        client.update_schedule("s1", &request).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_and_delete_schedule() {
        let mut server = mockito::Server::new_async().await;
        let _get = server
            .mock("GET", "/api/v2/schedule/s1")
            .with_body(SCHEDULE)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/v2/schedule/s1")
            .with_body(r#"{"message": "Schedule deleted."}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let schedule = client.get_schedule("s1").await.unwrap();
        assert_eq!(schedule.actor.unwrap().login, "octocat");
        client.delete_schedule("s1").await.unwrap();
        delete.assert_async().await;
    }
}
