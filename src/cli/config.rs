//! Pipeline config commands
//!
//! Validation and processing happen server-side: the YAML text is sent with
//! pipeline values derived from the local git checkout, and the compiled
//! result (or its errors) is printed.

use std::path::Path;

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::input::{STDIN_PATH, read_source};
use crate::client::CompileApi;
use crate::client::models::ConfigResponse;
use crate::error::{ApiError, Error, Result};
use crate::util::{git, pack};

/// Turn an invalid compile result into an error listing every server message.
pub fn ensure_valid(response: ConfigResponse) -> Result<ConfigResponse> {
    if response.valid {
        return Ok(response);
    }

    let messages = response.error_messages();
    if messages.is_empty() {
        return Err(ApiError::GraphQL("config is invalid".to_string()).into());
    }
    Err(ApiError::graphql(messages).into())
}

/// Check that `--pipeline-parameters` is a JSON object before sending it.
fn check_parameters(raw: Option<&str>) -> Result<()> {
    if let Some(raw) = raw {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
            Error::InvalidArgument(format!("--pipeline-parameters is not valid JSON: {}", e))
        })?;
        if !value.is_object() {
            return Err(Error::InvalidArgument(
                "--pipeline-parameters must be a JSON object".to_string(),
            ));
        }
    }
    Ok(())
}

async fn compile(
    opts: &GlobalOptions,
    path: &str,
    pipeline_parameters: Option<&str>,
) -> Result<ConfigResponse> {
    check_parameters(pipeline_parameters)?;
    let yaml = read_source(path)?;

    let info = git::inspect(Path::new("."));
    let values = git::pipeline_value_list(&info);
    debug!("Compiling {} with {} pipeline values", path, values.len());

    let ctx = CommandContext::anonymous(opts)?;
    let response = ctx
        .client
        .compile_config(&yaml, &values, pipeline_parameters)
        .await?;
    ensure_valid(response)
}

/// Run the config validate command
pub async fn validate(opts: &GlobalOptions, path: &str) -> Result<()> {
    compile(opts, path, None).await?;

    if path == STDIN_PATH {
        println!("Config input is valid.");
    } else {
        println!("Config file at {} is valid.", path);
    }
    Ok(())
}

/// Run the config process command
pub async fn process(
    opts: &GlobalOptions,
    path: &str,
    pipeline_parameters: Option<&str>,
) -> Result<()> {
    let response = compile(opts, path, pipeline_parameters).await?;
    print!("{}", response.output_yaml.unwrap_or_default());
    Ok(())
}

/// Run the config pack command
pub fn pack(dir: &str) -> Result<()> {
    print!("{}", pack::pack_to_string(Path::new(dir))?);
    Ok(())
}
