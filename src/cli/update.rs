//! Manual update check

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::output::json::format_json;
use crate::output::progress::with_spinner;
use crate::update::{self, RELEASES_URL, UpdateStatus};

#[derive(Debug, Serialize)]
struct UpdateReport {
    current: String,
    latest: String,
    update_available: bool,
    url: String,
}

impl From<&UpdateStatus> for UpdateReport {
    fn from(status: &UpdateStatus) -> Self {
        Self {
            current: status.current.to_string(),
            latest: status.latest.to_string(),
            update_available: status.update_available(),
            url: status.url.clone(),
        }
    }
}

/// Render the outcome of a check for `format`.
fn render(status: &UpdateStatus, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(format_json(&UpdateReport::from(status))?);
    }

    Ok(if status.update_available() {
        format!(
            "{} circleci {} is available (you have {})\n  Download it from {}",
            "!".yellow(),
            status.latest.to_string().bold(),
            status.current,
            status.url
        )
    } else {
        format!(
            "{} circleci {} is the latest version",
            "✓".green(),
            status.current
        )
    })
}

/// Run the update check command
pub async fn check(opts: &GlobalOptions) -> Result<()> {
    let current = update::current_version()?;
    let status = with_spinner(
        "Checking for updates...",
        update::check(RELEASES_URL, current),
    )
    .await?;

    println!("{}", render(&status, opts.format)?);
    Ok(())
}
