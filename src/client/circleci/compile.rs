use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::CircleCiClient;
use crate::client::api::CompileApi;
use crate::client::models::{ConfigResponse, PipelineValue};
use crate::error::Result;

const ORB_CONFIG_QUERY: &str = r#"query ValidateOrb($orbYaml: String!) {
  orbConfig(orbYaml: $orbYaml) {
    valid
    errors { message }
    sourceYaml
    outputYaml
  }
}"#;

const BUILD_CONFIG_QUERY: &str = r#"query ValidateConfig($config: String!, $pipelineParametersJson: String, $pipelineValues: [StringKeyVal!]) {
  buildConfig(configYaml: $config, pipelineParametersJson: $pipelineParametersJson, pipelineValues: $pipelineValues) {
    valid
    errors { message }
    sourceYaml
    outputYaml
  }
}"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrbConfigData {
    orb_config: ConfigResponse,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildConfigData {
    build_config: ConfigResponse,
}

#[async_trait]
impl CompileApi for CircleCiClient {
    async fn compile_orb(&self, orb_yaml: &str) -> Result<ConfigResponse> {
        let data: OrbConfigData = self
            .graphql
            .run(ORB_CONFIG_QUERY, json!({ "orbYaml": orb_yaml }))
            .await?;
        Ok(data.orb_config)
    }

    async fn compile_config(
        &self,
        config_yaml: &str,
        pipeline_values: &[PipelineValue],
        pipeline_parameters: Option<&str>,
    ) -> Result<ConfigResponse> {
        let variables = json!({
            "config": config_yaml,
            "pipelineValues": pipeline_values,
            "pipelineParametersJson": pipeline_parameters,
        });
        let data: BuildConfigData = self.graphql.run(BUILD_CONFIG_QUERY, variables).await?;
        Ok(data.build_config)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_compile_config_sends_values() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql-unstable")
            .match_header("authorization", "test-token")
            .match_body(Matcher::PartialJson(json!({
                "variables": {
                    "config": "version: 2.1\n",
                    "pipelineValues": [{"key": "git.branch", "val": "main"}]
                }
            })))
            .with_body(
                r#"{"data": {"buildConfig": {"valid": true, "errors": [], "sourceYaml": "version: 2.1\n", "outputYaml": "version: 2\n"}}}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let values = vec![PipelineValue {
            key: "git.branch".into(),
            val: "main".into(),
        }];
        let response = client
            .compile_config("version: 2.1\n", &values, None)
            .await
            .unwrap();

        assert!(response.valid);
        assert_eq!(response.output_yaml.as_deref(), Some("version: 2\n"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_compile_orb_returns_invalid_result() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql-unstable")
            .with_body(
                r#"{"data": {"orbConfig": {"valid": false, "errors": [{"message": "bad key"}, {"message": "missing version"}]}}}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let response = client.compile_orb("nope: 1").await.unwrap();

        assert!(!response.valid);
        assert_eq!(response.errors.len(), 2);
    }
}
