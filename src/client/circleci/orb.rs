use async_trait::async_trait;
use semver::Version;
use serde::Deserialize;
use serde_json::json;

use super::CircleCiClient;
use crate::client::api::OrbApi;
use crate::client::graphql::{GraphQLError, check_payload_errors};
use crate::client::models::{OrbRef, OrbSummary, OrbVersion, VcsType};
use crate::client::pagination::{Connection, Page};
use crate::error::{ApiError, Result};
use crate::util::version::{self, Segment};

const ORB_FIELDS: &str = r#"
        name
        statistics {
          last30DaysBuildCount
          last30DaysProjectCount
          last30DaysOrganizationCount
        }
        versions(count: 1) { version createdAt }"#;

fn list_orbs_query() -> String {
    format!(
        r#"query ListOrbs($after: String!, $certifiedOnly: Boolean!) {{
  orbs(first: 20, after: $after, certifiedOnly: $certifiedOnly) {{
    edges {{
      cursor
      node {{{}
      }}
    }}
    pageInfo {{ hasNextPage }}
  }}
}}"#,
        ORB_FIELDS
    )
}

fn namespace_orbs_query() -> String {
    format!(
        r#"query NamespaceOrbs($namespace: String, $after: String!) {{
  registryNamespace(name: $namespace) {{
    name
    orbs(first: 20, after: $after) {{
      edges {{
        cursor
        node {{{}
        }}
      }}
      pageInfo {{ hasNextPage }}
    }}
  }}
}}"#,
        ORB_FIELDS
    )
}

const ORB_VERSION_QUERY: &str = r#"query OrbVersion($orbVersionRef: String!) {
  orbVersion(orbVersionRef: $orbVersionRef) {
    id
    version
    source
    createdAt
    orb {
      id
      name
      createdAt
      statistics {
        last30DaysBuildCount
        last30DaysProjectCount
        last30DaysOrganizationCount
      }
      versions { version createdAt }
    }
  }
}"#;

const ORB_LOOKUP_QUERY: &str = r#"query OrbLookup($name: String!) {
  orb(name: $name) {
    id
    versions(count: 1) { version }
  }
}"#;

const NAMESPACE_QUERY: &str = r#"query Namespace($name: String!) {
  registryNamespace(name: $name) { id }
}"#;

const ORGANIZATION_QUERY: &str = r#"query Organization($name: String!, $vcsType: VCSType!) {
  organization(name: $name, vcsType: $vcsType) { id }
}"#;

const CREATE_ORB_MUTATION: &str = r#"mutation CreateOrb($name: String!, $registryNamespaceId: UUID!, $isPrivate: Boolean!) {
  createOrb(name: $name, registryNamespaceId: $registryNamespaceId, isPrivate: $isPrivate) {
    orb { id }
    errors { message }
  }
}"#;

const PUBLISH_ORB_MUTATION: &str = r#"mutation PublishOrb($config: String!, $orbId: UUID!, $version: String!) {
  publishOrb(orbId: $orbId, orbYaml: $config, version: $version) {
    orb { version }
    errors { message }
  }
}"#;

const PROMOTE_ORB_MUTATION: &str = r#"mutation PromoteOrb($orbId: UUID!, $devVersion: String!, $semanticVersion: String!) {
  promoteOrb(orbId: $orbId, devVersion: $devVersion, semanticVersion: $semanticVersion) {
    orb { version }
    errors { message }
  }
}"#;

const CREATE_NAMESPACE_MUTATION: &str = r#"mutation CreateNamespace($name: String!, $organizationId: UUID!) {
  createNamespace(name: $name, organizationId: $organizationId) {
    namespace { id }
    errors { message }
  }
}"#;

#[derive(Deserialize)]
struct OrbsData {
    orbs: Connection<OrbSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NamespaceOrbsData {
    registry_namespace: Option<NamespaceOrbs>,
}

#[derive(Deserialize)]
struct NamespaceOrbs {
    orbs: Connection<OrbSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrbVersionData {
    orb_version: Option<OrbVersion>,
}

#[derive(Deserialize)]
struct OrbLookupData {
    orb: Option<OrbLookup>,
}

#[derive(Deserialize)]
struct OrbLookup {
    id: String,
    #[serde(default)]
    versions: Vec<VersionOnly>,
}

#[derive(Deserialize)]
struct VersionOnly {
    version: String,
}

#[derive(Deserialize)]
struct IdOnly {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NamespaceData {
    registry_namespace: Option<IdOnly>,
}

#[derive(Deserialize)]
struct OrganizationData {
    organization: Option<IdOnly>,
}

/// Mutation result shape shared by create/publish/promote
#[derive(Deserialize)]
struct Payload<T> {
    orb: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrbData {
    create_orb: Payload<IdOnly>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublishOrbData {
    publish_orb: Payload<VersionOnly>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromoteOrbData {
    promote_orb: Payload<VersionOnly>,
}

#[derive(Deserialize)]
struct NamespacePayload {
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateNamespaceData {
    create_namespace: NamespacePayload,
}

impl CircleCiClient {
    async fn lookup_orb(&self, orb: &OrbRef) -> Result<Option<OrbLookup>> {
        let data: OrbLookupData = self
            .graphql
            .run(ORB_LOOKUP_QUERY, json!({ "name": orb.full_name() }))
            .await?;
        Ok(data.orb)
    }
}

fn published_version(payload: Payload<VersionOnly>) -> Result<String> {
    check_payload_errors(&payload.errors)?;
    payload
        .orb
        .map(|o| o.version)
        .ok_or_else(|| ApiError::InvalidResponse("registry returned no orb version".into()).into())
}

#[async_trait]
impl OrbApi for CircleCiClient {
    async fn list_orbs_page(
        &self,
        namespace: Option<&str>,
        uncertified: bool,
        cursor: Option<String>,
    ) -> Result<Page<OrbSummary>> {
        let after = cursor.unwrap_or_default();

        match namespace {
            Some(ns) => {
                let data: NamespaceOrbsData = self
                    .graphql
                    .run(
                        &namespace_orbs_query(),
                        json!({ "namespace": ns, "after": after }),
                    )
                    .await?;
                let orbs = data.registry_namespace.ok_or_else(|| {
                    ApiError::NotFound(format!("namespace '{}' does not exist", ns))
                })?;
                Ok(orbs.orbs.into_page())
            }
            None => {
                let data: OrbsData = self
                    .graphql
                    .run(
                        &list_orbs_query(),
                        json!({ "after": after, "certifiedOnly": !uncertified }),
                    )
                    .await?;
                Ok(data.orbs.into_page())
            }
        }
    }

    async fn orb_version(&self, orb: &OrbRef) -> Result<Option<OrbVersion>> {
        let reference = match orb.version {
            Some(_) => orb.to_string(),
            None => format!("{}@volatile", orb.full_name()),
        };
        let data: OrbVersionData = self
            .graphql
            .run(ORB_VERSION_QUERY, json!({ "orbVersionRef": reference }))
            .await?;
        Ok(data.orb_version)
    }

    async fn orb_id(&self, orb: &OrbRef) -> Result<Option<String>> {
        Ok(self.lookup_orb(orb).await?.map(|o| o.id))
    }

    async fn latest_orb_version(&self, orb: &OrbRef) -> Result<Option<Version>> {
        let latest = self
            .lookup_orb(orb)
            .await?
            .and_then(|o| o.versions.into_iter().next());
        latest.map(|v| version::parse(&v.version)).transpose()
    }

    async fn namespace_id(&self, namespace: &str) -> Result<Option<String>> {
        let data: NamespaceData = self
            .graphql
            .run(NAMESPACE_QUERY, json!({ "name": namespace }))
            .await?;
        Ok(data.registry_namespace.map(|n| n.id))
    }

    async fn organization_id(&self, vcs: VcsType, name: &str) -> Result<String> {
        let data: OrganizationData = self
            .graphql
            .run(
                ORGANIZATION_QUERY,
                json!({ "name": name, "vcsType": vcs.graphql_name() }),
            )
            .await?;
        data.organization.map(|o| o.id).ok_or_else(|| {
            ApiError::NotFound(format!("organization '{}' on {} does not exist", name, vcs)).into()
        })
    }

    async fn create_orb(&self, namespace_id: &str, name: &str, private: bool) -> Result<()> {
        let data: CreateOrbData = self
            .graphql
            .run(
                CREATE_ORB_MUTATION,
                json!({
                    "name": name,
                    "registryNamespaceId": namespace_id,
                    "isPrivate": private,
                }),
            )
            .await?;
        check_payload_errors(&data.create_orb.errors)
    }

    async fn publish_orb(&self, orb_id: &str, version: &str, source: &str) -> Result<String> {
        let data: PublishOrbData = self
            .graphql
            .run(
                PUBLISH_ORB_MUTATION,
                json!({ "config": source, "orbId": orb_id, "version": version }),
            )
            .await?;
        published_version(data.publish_orb)
    }

    async fn promote_orb(
        &self,
        orb_id: &str,
        dev_version: &str,
        segment: Segment,
    ) -> Result<String> {
        let data: PromoteOrbData = self
            .graphql
            .run(
                PROMOTE_ORB_MUTATION,
                json!({
                    "orbId": orb_id,
                    "devVersion": dev_version,
                    "semanticVersion": segment.as_str(),
                }),
            )
            .await?;
        published_version(data.promote_orb)
    }

    async fn create_namespace(&self, name: &str, organization_id: &str) -> Result<()> {
        let data: CreateNamespaceData = self
            .graphql
            .run(
                CREATE_NAMESPACE_MUTATION,
                json!({ "name": name, "organizationId": organization_id }),
            )
            .await?;
        check_payload_errors(&data.create_namespace.errors)
    }
}
