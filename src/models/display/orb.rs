//! Orb listing display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::OrbSummary;
use crate::output::formatters::or_dash;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrbDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "LATEST")]
    pub latest: String,

    #[tabled(rename = "BUILDS (30D)")]
    pub builds: u64,

    #[tabled(rename = "PROJECTS (30D)")]
    pub projects: u64,

    #[tabled(rename = "ORGS (30D)")]
    pub organizations: u64,
}

impl From<OrbSummary> for OrbDisplay {
    fn from(orb: OrbSummary) -> Self {
        let stats = orb.statistics.clone().unwrap_or_default();
        Self {
            latest: or_dash(orb.latest_version()),
            builds: stats.last30_days_build_count,
            projects: stats.last30_days_project_count,
            organizations: stats.last30_days_organization_count,
            name: orb.name,
        }
    }
}

/// Name and latest version only, for listings without `--details`
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrbBriefDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "LATEST")]
    pub latest: String,
}

impl From<OrbSummary> for OrbBriefDisplay {
    fn from(orb: OrbSummary) -> Self {
        Self {
            latest: or_dash(orb.latest_version()),
            name: orb.name,
        }
    }
}
