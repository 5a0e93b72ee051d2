//! Trigger display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Trigger;
use crate::output::formatters::or_dash;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TriggerDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "SOURCE")]
    pub source: String,

    #[tabled(rename = "EVENT")]
    pub event: String,

    /// Repository name for GitHub App triggers, webhook URL otherwise
    #[tabled(rename = "TARGET")]
    pub target: String,
}

impl From<Trigger> for TriggerDisplay {
    fn from(trigger: Trigger) -> Self {
        let source = &trigger.event_source;
        let target = source
            .repo
            .as_ref()
            .map(|r| r.full_name.clone().unwrap_or_else(|| r.external_id.clone()))
            .or_else(|| source.webhook.as_ref().map(|w| w.url.clone()));

        Self {
            source: source.provider.clone(),
            event: or_dash(trigger.event_preset.as_deref()),
            target: or_dash(target.as_deref()),
            name: trigger.name,
            id: trigger.id,
        }
    }
}
