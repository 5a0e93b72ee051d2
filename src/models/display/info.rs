//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Collaboration;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "SLUG")]
    pub slug: String,
}

impl From<Collaboration> for OrgDisplay {
    fn from(org: Collaboration) -> Self {
        Self {
            name: org.name,
            id: org.id,
            slug: org.slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_display_from_collaboration() {
        let display = OrgDisplay::from(Collaboration {
            id: "o1".to_string(),
            name: "acme".to_string(),
            vcs_type: "github".to_string(),
            slug: "gh/acme".to_string(),
            avatar_url: None,
        });

        assert_eq!(display.name, "acme");
        assert_eq!(display.slug, "gh/acme");
    }
}
