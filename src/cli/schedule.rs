//! Scheduled pipeline commands

use colored::Colorize;
use serde_json::{Map, Value};

use crate::cli::args::{GlobalOptions, parse_parameters};
use crate::cli::handlers::run_list_command;
use crate::cli::input::confirm;
use crate::cli::{AttributionActor, CommandContext, LimitArgs, OutputFormat, ScheduleFields};
use crate::client::ScheduleApi;
use crate::client::models::{
    CreateScheduleRequest, ProjectSlug, Schedule, Timetable, UpdateScheduleRequest,
};
use crate::error::{Error, Result};
use crate::models::ScheduleDisplay;
use crate::output::formatters::{format_optional_timestamp, join_or_dash, or_dash};
use crate::output::json::format_json;
use crate::output::print_one;
use crate::output::table::format_details;

impl ScheduleFields {
    fn has_timetable(&self) -> bool {
        self.per_hour.is_some()
            || !self.hours_of_day.is_empty()
            || !self.days_of_week.is_empty()
            || !self.days_of_month.is_empty()
            || !self.months.is_empty()
    }

    /// Overlay the timetable flags on `base` and validate the result.
    fn timetable(&self, base: Timetable) -> Result<Timetable> {
        let mut timetable = base;
        if let Some(per_hour) = self.per_hour {
            timetable.per_hour = per_hour;
        }
        if !self.hours_of_day.is_empty() {
            timetable.hours_of_day = self.hours_of_day.clone();
        }
        if !self.days_of_week.is_empty() {
            timetable.days_of_week = upper(&self.days_of_week);
        }
        if !self.days_of_month.is_empty() {
            timetable.days_of_month = self.days_of_month.clone();
        }
        if !self.months.is_empty() {
            timetable.months = upper(&self.months);
        }

        timetable.validate()?;
        Ok(timetable)
    }

    fn parameters(&self) -> Result<Option<Map<String, Value>>> {
        if self.parameters.is_empty() {
            Ok(None)
        } else {
            parse_parameters(&self.parameters).map(Some)
        }
    }
}

fn upper(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_ascii_uppercase()).collect()
}

/// Build the create body from flags, checking the timetable locally.
pub fn create_request(
    name: &str,
    actor: AttributionActor,
    fields: &ScheduleFields,
) -> Result<CreateScheduleRequest> {
    if fields.per_hour.is_none() {
        return Err(Error::InvalidArgument("--per-hour is required".to_string()));
    }
    let parameters = fields.parameters()?.ok_or_else(|| {
        Error::InvalidArgument(
            "--parameters is required; pass at least one key=value, e.g. branch=main".to_string(),
        )
    })?;

    Ok(CreateScheduleRequest {
        name: name.to_string(),
        description: fields.description.clone(),
        attribution_actor: actor.as_str().to_string(),
        parameters,
        timetable: fields.timetable(Timetable::default())?,
    })
}

/// Run the schedule list command
pub async fn list(opts: &GlobalOptions, slug: &str, limit: &LimitArgs) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;

    run_list_command::<Schedule, ScheduleDisplay, _, _>(
        opts,
        limit,
        "schedules",
        |client, limit| async move { client.list_schedules(&slug, limit).await },
    )
    .await
}

/// Run the schedule get command
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let schedule = ctx.client.get_schedule(id).await?;
    print_schedule(schedule, ctx.format)
}

fn print_schedule(schedule: Schedule, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", format_json(&schedule)?);
            Ok(())
        }
        OutputFormat::Plain => print_one(ScheduleDisplay::from(schedule), format),
        OutputFormat::Table => {
            let timetable = &schedule.timetable;
            let parameters = schedule
                .parameters
                .iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{}={}", k, s),
                    other => format!("{}={}", k, other),
                })
                .collect::<Vec<_>>();

            println!(
                "{}",
                format_details(&[
                    ("ID", schedule.id.clone()),
                    ("Name", schedule.name.clone()),
                    ("Description", or_dash(schedule.description.as_deref())),
                    ("Project", schedule.project_slug.clone()),
                    ("Per hour", timetable.per_hour.to_string()),
                    ("Hours of day", join_or_dash(&timetable.hours_of_day)),
                    ("Days of week", join_or_dash(&timetable.days_of_week)),
                    ("Days of month", join_or_dash(&timetable.days_of_month)),
                    ("Months", join_or_dash(&timetable.months)),
                    (
                        "Actor",
                        or_dash(schedule.actor.as_ref().map(|a| a.login.as_str())),
                    ),
                    ("Parameters", join_or_dash(&parameters)),
                    (
                        "Updated",
                        format_optional_timestamp(schedule.updated_at.as_deref()),
                    ),
                ])
            );
            Ok(())
        }
    }
}

/// Run the schedule create command
pub async fn create(
    opts: &GlobalOptions,
    slug: &str,
    name: &str,
    actor: AttributionActor,
    fields: &ScheduleFields,
) -> Result<()> {
    let slug: ProjectSlug = slug.parse()?;
    let request = create_request(name, actor, fields)?;

    let ctx = CommandContext::new(opts)?;
    let schedule = ctx.client.create_schedule(&slug, &request).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created schedule {}", "✓".green(), schedule.name.bold());
    }
    print_one(ScheduleDisplay::from(schedule), ctx.format)
}

/// Run the schedule update command
///
/// Timetable flags are merged into the schedule's current timetable, since
/// the API replaces the timetable as a whole.
pub async fn update(
    opts: &GlobalOptions,
    id: &str,
    name: Option<String>,
    actor: Option<AttributionActor>,
    fields: &ScheduleFields,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let timetable = if fields.has_timetable() {
        let current = ctx.client.get_schedule(id).await?;
        Some(fields.timetable(current.timetable)?)
    } else {
        None
    };

    let request = UpdateScheduleRequest {
        name,
        description: fields.description.clone(),
        attribution_actor: actor.map(|a| a.as_str().to_string()),
        parameters: fields.parameters()?,
        timetable,
    };
    if request.is_empty() {
        return Err(Error::InvalidArgument(
            "nothing to update; pass at least one field".to_string(),
        ));
    }

    let schedule = ctx.client.update_schedule(id, &request).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Updated schedule {}", "✓".green(), schedule.name.bold());
    }
    print_one(ScheduleDisplay::from(schedule), ctx.format)
}

/// Run the schedule delete command
pub async fn delete(opts: &GlobalOptions, id: &str, force: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !confirm(&format!("Delete schedule {}?", id), force)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client.delete_schedule(id).await?;
    println!("{} Deleted schedule {}", "✓".green(), id);
    Ok(())
}
