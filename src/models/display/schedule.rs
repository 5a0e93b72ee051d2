//! Schedule display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Schedule;
use crate::output::formatters::{join_or_dash, or_dash};

/// Schedule with its timetable flattened into columns
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScheduleDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PER HOUR")]
    pub per_hour: u32,

    #[tabled(rename = "HOURS")]
    pub hours: String,

    #[tabled(rename = "DAYS")]
    pub days: String,

    #[tabled(rename = "ACTOR")]
    pub actor: String,
}

impl From<Schedule> for ScheduleDisplay {
    fn from(schedule: Schedule) -> Self {
        let timetable = &schedule.timetable;
        let days = if timetable.days_of_week.is_empty() {
            join_or_dash(&timetable.days_of_month)
        } else {
            join_or_dash(&timetable.days_of_week)
        };

        Self {
            per_hour: timetable.per_hour,
            hours: join_or_dash(&timetable.hours_of_day),
            days,
            actor: or_dash(schedule.actor.as_ref().map(|a| a.login.as_str())),
            id: schedule.id,
            name: schedule.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Timetable;

    #[test]
    fn test_schedule_display_prefers_weekdays() {
        let schedule = Schedule {
            id: "s1".to_string(),
            name: "nightly".to_string(),
            description: None,
            project_slug: "gh/acme/api".to_string(),
            timetable: Timetable {
                per_hour: 2,
                hours_of_day: vec![1, 13],
                days_of_week: vec!["MON".into(), "FRI".into()],
                days_of_month: vec![1],
                months: vec![],
            },
            actor: None,
            parameters: Default::default(),
            created_at: None,
            updated_at: None,
        };

        let display = ScheduleDisplay::from(schedule);
        assert_eq!(display.hours, "1,13");
        assert_eq!(display.days, "MON,FRI");
        assert_eq!(display.actor, "-");
    }
}
