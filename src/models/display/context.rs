//! Context display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Context, ContextEnvVar};
use crate::output::formatters::format_optional_timestamp;

/// Context display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ContextDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "CREATED")]
    pub created_at: String,
}

impl From<Context> for ContextDisplay {
    fn from(ctx: Context) -> Self {
        Self {
            created_at: format_optional_timestamp(ctx.created_at.as_deref()),
            name: ctx.name,
            id: ctx.id,
        }
    }
}

/// Context environment variable; values are never returned by the API.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ContextEnvVarDisplay {
    #[tabled(rename = "VARIABLE")]
    pub variable: String,

    #[tabled(rename = "UPDATED")]
    pub updated_at: String,
}

impl From<ContextEnvVar> for ContextEnvVarDisplay {
    fn from(var: ContextEnvVar) -> Self {
        Self {
            updated_at: format_optional_timestamp(
                var.updated_at.as_deref().or(var.created_at.as_deref()),
            ),
            variable: var.variable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let display = ContextDisplay::from(Context {
            id: "c1".to_string(),
            name: "deploy".to_string(),
            created_at: None,
        });
        assert_eq!(display.name, "deploy");
        assert_eq!(display.created_at, "N/A");
    }

    #[test]
    fn test_env_var_falls_back_to_created() {
        let display = ContextEnvVarDisplay::from(ContextEnvVar {
            variable: "API_KEY".to_string(),
            context_id: Some("c1".to_string()),
            created_at: Some("2025-01-15T12:00:00Z".to_string()),
            updated_at: None,
        });
        assert!(display.updated_at.contains("01/15/2025"));
    }
}
