//! Scheduled pipeline models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Valid `days-of-week` values
pub const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Valid `months` values
pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Pipeline schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Schedule {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub project_slug: String,

    pub timetable: Timetable,

    /// User the pipelines are attributed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    /// Pipeline parameters (including `branch` or `tag`)
    #[serde(default)]
    pub parameters: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// When a schedule fires
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Timetable {
    /// Runs per hour (1-60)
    pub per_hour: u32,

    /// Hours of the day (UTC, 0-23)
    #[serde(default)]
    pub hours_of_day: Vec<u32>,

    /// Days of the week (`MON`..`SUN`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<String>,

    /// Days of the month (1-31)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_month: Vec<u32>,

    /// Months (`JAN`..`DEC`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<String>,
}

impl Timetable {
    /// Check ranges before anything is sent to the API.
    pub fn validate(&self) -> Result<()> {
        if !(1..=60).contains(&self.per_hour) {
            return Err(Error::InvalidArgument(format!(
                "per-hour must be between 1 and 60, got {}",
                self.per_hour
            )));
        }
        if self.hours_of_day.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one hour of the day is required".to_string(),
            ));
        }
        if let Some(hour) = self.hours_of_day.iter().find(|h| **h > 23) {
            return Err(Error::InvalidArgument(format!(
                "hours-of-day must be between 0 and 23, got {}",
                hour
            )));
        }
        if self.days_of_week.is_empty() && self.days_of_month.is_empty() {
            return Err(Error::InvalidArgument(
                "either days-of-week or days-of-month is required".to_string(),
            ));
        }
        if let Some(day) = self
            .days_of_week
            .iter()
            .find(|d| !WEEKDAYS.contains(&d.as_str()))
        {
            return Err(Error::InvalidArgument(format!(
                "invalid day of week '{}': expected one of {}",
                day,
                WEEKDAYS.join(", ")
            )));
        }
        if let Some(day) = self.days_of_month.iter().find(|d| !(1..=31).contains(*d)) {
            return Err(Error::InvalidArgument(format!(
                "days-of-month must be between 1 and 31, got {}",
                day
            )));
        }
        if let Some(month) = self
            .months
            .iter()
            .find(|m| !MONTHS.contains(&m.as_str()))
        {
            return Err(Error::InvalidArgument(format!(
                "invalid month '{}': expected one of {}",
                month,
                MONTHS.join(", ")
            )));
        }
        Ok(())
    }
}

/// Schedule actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,

    #[serde(default)]
    pub login: String,

    #[serde(default)]
    pub name: String,
}

/// Body of `POST /project/{slug}/schedule`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateScheduleRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub attribution_actor: String,

    pub parameters: Map<String, Value>,

    pub timetable: Timetable,
}

/// Body of `PATCH /schedule/{id}`; only provided fields are sent
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_actor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timetable: Option<Timetable>,
}

impl UpdateScheduleRequest {
    /// True when nothing would be changed
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.attribution_actor.is_none()
            && self.parameters.is_none()
            && self.timetable.is_none()
    }
}
