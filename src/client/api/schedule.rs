//! Scheduled pipeline operations

use async_trait::async_trait;

use crate::client::models::{
    CreateScheduleRequest, ProjectSlug, Schedule, UpdateScheduleRequest,
};
use crate::client::pagination::{Page, collect_all_pages};
use crate::error::Result;

#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn list_schedules_page(
        &self,
        slug: &ProjectSlug,
        page_token: Option<String>,
    ) -> Result<Page<Schedule>>;

    async fn get_schedule(&self, schedule_id: &str) -> Result<Schedule>;

    async fn create_schedule(
        &self,
        slug: &ProjectSlug,
        request: &CreateScheduleRequest,
    ) -> Result<Schedule>;

    /// Send only the fields set on `request`
    async fn update_schedule(
        &self,
        schedule_id: &str,
        request: &UpdateScheduleRequest,
    ) -> Result<Schedule>;

    async fn delete_schedule(&self, schedule_id: &str) -> Result<()>;

    /// Every schedule of a project
    async fn list_schedules(
        &self,
        slug: &ProjectSlug,
        limit: Option<usize>,
    ) -> Result<Vec<Schedule>> {
        collect_all_pages(|token| self.list_schedules_page(slug, token), limit).await
    }
}
