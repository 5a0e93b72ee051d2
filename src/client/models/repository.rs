//! Repository models for GitHub App organizations

use serde::{Deserialize, Deserializer, Serialize};

/// Repository visible to the organization's GitHub App installation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Provider repository ID
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// `owner/name`
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub private: bool,
}

/// Providers return numeric IDs; keep them as strings everywhere else
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_becomes_string() {
        let repo: Repository =
            serde_json::from_str(r#"{"id": 123456, "full_name": "acme/api", "private": true}"#)
                .unwrap();
        assert_eq!(repo.id, "123456");
        assert!(repo.private);
    }

    #[test]
    fn test_string_id_kept() {
        let repo: Repository =
            serde_json::from_str(r#"{"id": "R_abc", "full_name": "acme/web"}"#).unwrap();
        assert_eq!(repo.id, "R_abc");
        assert!(!repo.private);
    }
}
