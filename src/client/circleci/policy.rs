use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::PolicyApi;
use crate::client::models::{
    BundleDiff, BundlePayload, DecisionLog, DecisionQuery, DecisionSettings, PolicyBundle,
};
use crate::error::Result;

fn scope(owner_id: &str, context: &str) -> String {
    format!("/owner/{}/context/{}", owner_id, context)
}

#[async_trait]
impl PolicyApi for CircleCiClient {
    async fn fetch_policy_bundle(&self, owner_id: &str, context: &str) -> Result<PolicyBundle> {
        let bundle: Option<PolicyBundle> = self
            .policy
            .get(&format!("{}/policy-bundle", scope(owner_id, context)), &[])
            .await?;
        Ok(bundle.unwrap_or_default())
    }

    async fn push_policy_bundle(
        &self,
        owner_id: &str,
        context: &str,
        bundle: &PolicyBundle,
        dry_run: bool,
    ) -> Result<BundleDiff> {
        let query = if dry_run {
            vec![("dry", "true".to_string())]
        } else {
            Vec::new()
        };
        let body = BundlePayload {
            policies: bundle.clone(),
        };
        let diff: Option<BundleDiff> = self
            .policy
            .post(
                &format!("{}/policy-bundle", scope(owner_id, context)),
                &query,
                &body,
            )
            .await?;
        Ok(diff.unwrap_or_default())
    }

    async fn list_decisions_page(
        &self,
        owner_id: &str,
        context: &str,
        query: &DecisionQuery,
        offset: usize,
    ) -> Result<Vec<DecisionLog>> {
        let logs: Option<Vec<DecisionLog>> = self
            .policy
            .get(
                &format!("{}/decision", scope(owner_id, context)),
                &query.to_query_params(offset),
            )
            .await?;
        Ok(logs.unwrap_or_default())
    }

    async fn get_decision_settings(
        &self,
        owner_id: &str,
        context: &str,
    ) -> Result<DecisionSettings> {
        self.policy
            .get(
                &format!("{}/decision/settings", scope(owner_id, context)),
                &[],
            )
            .await
    }

    async fn set_decision_settings(
        &self,
        owner_id: &str,
        context: &str,
        settings: &DecisionSettings,
    ) -> Result<DecisionSettings> {
        self.policy
            .patch(
                &format!("{}/decision/settings", scope(owner_id, context)),
                settings,
            )
            .await
    }
}
