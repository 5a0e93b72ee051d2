//! Config policy bundle and decision log operations

use async_trait::async_trait;

use crate::client::models::{
    BundleDiff, DecisionLog, DecisionQuery, DecisionSettings, PolicyBundle,
};
use crate::client::pagination::collect_offset_pages;
use crate::error::Result;

/// Operations scoped to `owner/{owner_id}/context/{context}`
#[async_trait]
pub trait PolicyApi: Send + Sync {
    /// Active policy bundle
    async fn fetch_policy_bundle(&self, owner_id: &str, context: &str) -> Result<PolicyBundle>;

    /// Upload a bundle; a dry run reports the diff without applying it
    async fn push_policy_bundle(
        &self,
        owner_id: &str,
        context: &str,
        bundle: &PolicyBundle,
        dry_run: bool,
    ) -> Result<BundleDiff>;

    /// Decision logs starting at `offset`
    async fn list_decisions_page(
        &self,
        owner_id: &str,
        context: &str,
        query: &DecisionQuery,
        offset: usize,
    ) -> Result<Vec<DecisionLog>>;

    async fn get_decision_settings(&self, owner_id: &str, context: &str)
    -> Result<DecisionSettings>;

    async fn set_decision_settings(
        &self,
        owner_id: &str,
        context: &str,
        settings: &DecisionSettings,
    ) -> Result<DecisionSettings>;

    /// Every decision log matching `query`
    async fn list_decisions(
        &self,
        owner_id: &str,
        context: &str,
        query: &DecisionQuery,
        limit: Option<usize>,
    ) -> Result<Vec<DecisionLog>> {
        collect_offset_pages(
            |offset| self.list_decisions_page(owner_id, context, query, offset),
            limit,
        )
        .await
    }
}
