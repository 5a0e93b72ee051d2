//! Server-side config and orb compilation

use async_trait::async_trait;

use crate::client::models::{ConfigResponse, PipelineValue};
use crate::error::Result;

#[async_trait]
pub trait CompileApi: Send + Sync {
    /// Validate and expand an orb's YAML source
    async fn compile_orb(&self, orb_yaml: &str) -> Result<ConfigResponse>;

    /// Validate and expand a project config
    async fn compile_config(
        &self,
        config_yaml: &str,
        pipeline_values: &[PipelineValue],
        pipeline_parameters: Option<&str>,
    ) -> Result<ConfigResponse>;
}
