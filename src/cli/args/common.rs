//! Common CLI types shared across commands

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rounded table for humans (default)
    #[default]
    Table,
    /// Tab-separated rows with a header line
    Plain,
    /// JSON wrapped in `{data, meta}`
    Json,
}

/// Parse a `key=value` argument.
///
/// Values stay strings, so branch names like `1.10` survive intact; only
/// `true` and `false` become booleans.
pub fn parse_key_value(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        Error::InvalidArgument(format!("expected key=value, got '{}'", raw))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "missing key in '{}'",
            raw
        )));
    }

    let value = match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    };
    Ok((key.to_string(), value))
}

/// Collect repeated `key=value` arguments into a JSON object.
pub fn parse_parameters(raw: &[String]) -> Result<Map<String, Value>> {
    raw.iter().map(|p| parse_key_value(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_booleans_are_promoted() {
        assert_eq!(parse_key_value("deploy=true").unwrap(), ("deploy".into(), json!(true)));
        assert_eq!(parse_key_value("dry=false").unwrap(), ("dry".into(), json!(false)));
        assert_eq!(parse_key_value("count=3").unwrap(), ("count".into(), json!("3")));
        assert_eq!(
            parse_key_value("branch=main").unwrap(),
            ("branch".into(), json!("main"))
        );
        assert_eq!(parse_key_value("url=a=b").unwrap(), ("url".into(), json!("a=b")));
    }

    #[test]
    fn test_numeric_looking_branches_stay_strings() {
        assert_eq!(parse_key_value("branch=1.10").unwrap(), ("branch".into(), json!("1.10")));
        assert_eq!(parse_key_value("branch=2024").unwrap(), ("branch".into(), json!("2024")));
        assert_eq!(parse_key_value("tags=[1]").unwrap(), ("tags".into(), json!("[1]")));
    }

    #[test]
    fn test_rejects_malformed_pairs() {
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_parse_parameters() {
        let params =
            parse_parameters(&["a=1".to_string(), "b=two".to_string()]).unwrap();
        assert_eq!(params["a"], json!("1"));
        assert_eq!(params["b"], json!("two"));
    }
}
