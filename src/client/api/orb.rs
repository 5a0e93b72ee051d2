//! Orb registry and namespace operations

use async_trait::async_trait;
use semver::Version;

use crate::client::models::{OrbRef, OrbSummary, OrbVersion, VcsType};
use crate::client::pagination::{Page, collect_all_pages};
use crate::error::Result;
use crate::util::version::Segment;

#[async_trait]
pub trait OrbApi: Send + Sync {
    /// Fetch one page of the registry; `namespace` restricts to one namespace
    async fn list_orbs_page(
        &self,
        namespace: Option<&str>,
        uncertified: bool,
        cursor: Option<String>,
    ) -> Result<Page<OrbSummary>>;

    /// Look up a published orb version; `None` when it does not exist
    async fn orb_version(&self, orb: &OrbRef) -> Result<Option<OrbVersion>>;

    /// ID of an existing orb
    async fn orb_id(&self, orb: &OrbRef) -> Result<Option<String>>;

    /// Highest published version of an orb, if any
    async fn latest_orb_version(&self, orb: &OrbRef) -> Result<Option<Version>>;

    /// ID of a namespace, if it exists
    async fn namespace_id(&self, namespace: &str) -> Result<Option<String>>;

    /// ID of an organization by VCS and name
    async fn organization_id(&self, vcs: VcsType, name: &str) -> Result<String>;

    /// Create an orb in a namespace
    async fn create_orb(&self, namespace_id: &str, name: &str, private: bool) -> Result<()>;

    /// Publish `source` as `version` (semver or `dev:label`), returning the version stored
    async fn publish_orb(&self, orb_id: &str, version: &str, source: &str) -> Result<String>;

    /// Promote a dev version to the next semantic version
    async fn promote_orb(
        &self,
        orb_id: &str,
        dev_version: &str,
        segment: Segment,
    ) -> Result<String>;

    /// Create a namespace owned by an organization
    async fn create_namespace(&self, name: &str, organization_id: &str) -> Result<()>;

    /// Every orb in the registry (or one namespace)
    async fn list_orbs(
        &self,
        namespace: Option<&str>,
        uncertified: bool,
        limit: Option<usize>,
    ) -> Result<Vec<OrbSummary>> {
        collect_all_pages(
            |cursor| self.list_orbs_page(namespace, uncertified, cursor),
            limit,
        )
        .await
    }
}
