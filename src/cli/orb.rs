//! Orb registry commands

use std::path::Path;

use colored::Colorize;
use log::debug;
use semver::Version;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::config::ensure_valid;
use crate::cli::input::{confirm, read_source};
use crate::cli::{LimitArgs, OutputFormat};
use crate::client::models::{OrbRef, OrbVersion};
use crate::client::{CompileApi, OrbApi};
use crate::error::{ApiError, Error, Result};
use crate::models::{OrbBriefDisplay, OrbDisplay};
use crate::output::Formattable;
use crate::output::formatters::{format_optional_timestamp, or_dash};
use crate::output::json::format_json;
use crate::output::progress::with_spinner;
use crate::output::table::format_details;
use crate::util::pack;
use crate::util::version::{self, Segment};

/// Run the orb list command
///
/// Works without a token; only public orbs are listed then.
pub async fn list(
    opts: &GlobalOptions,
    namespace: Option<&str>,
    uncertified: bool,
    details: bool,
    limit: &LimitArgs,
) -> Result<()> {
    let ctx = CommandContext::anonymous(opts)?;

    let orbs = with_spinner(
        "Fetching orbs...",
        ctx.client.list_orbs(namespace, uncertified, limit.limit),
    )
    .await?;
    debug!("Fetched {} orbs", orbs.len());

    if details {
        let rows: Vec<OrbDisplay> = orbs.into_iter().map(Into::into).collect();
        rows.print(ctx.format)
    } else {
        let rows: Vec<OrbBriefDisplay> = orbs.into_iter().map(Into::into).collect();
        rows.print(ctx.format)
    }
}

async fn fetch_version(ctx: &CommandContext, orb: &OrbRef) -> Result<OrbVersion> {
    ctx.client
        .orb_version(orb)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("orb '{}' does not exist", orb)).into())
}

/// Run the orb info command
pub async fn info(opts: &GlobalOptions, orb: &str) -> Result<()> {
    let orb: OrbRef = orb.parse()?;
    let ctx = CommandContext::anonymous(opts)?;
    let version = fetch_version(&ctx, &orb).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&version)?);
        return Ok(());
    }

    let stats = &version.orb.statistics;
    let latest = version.orb.versions.first().map(|v| v.version.as_str());
    println!(
        "{}",
        format_details(&[
            ("Name", version.orb.name.clone()),
            ("Version", version.version.clone()),
            ("Latest", or_dash(latest)),
            ("Versions", version.orb.versions.len().to_string()),
            ("Created", format_optional_timestamp(version.orb.created_at.as_deref())),
            ("Published", format_optional_timestamp(version.created_at.as_deref())),
            ("Builds (30d)", stats.last30_days_build_count.to_string()),
            ("Projects (30d)", stats.last30_days_project_count.to_string()),
            ("Orgs (30d)", stats.last30_days_organization_count.to_string()),
        ])
    );
    println!(
        "\nLearn more at {}",
        format!("https://circleci.com/developer/orbs/orb/{}", orb.full_name()).cyan()
    );
    Ok(())
}

/// Run the orb source command
pub async fn source(opts: &GlobalOptions, orb: &str) -> Result<()> {
    let orb: OrbRef = orb.parse()?;
    let ctx = CommandContext::anonymous(opts)?;
    let version = fetch_version(&ctx, &orb).await?;

    print!("{}", version.source);
    if !version.source.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Run the orb validate command
pub async fn validate(opts: &GlobalOptions, path: &str) -> Result<()> {
    let yaml = read_source(path)?;
    let ctx = CommandContext::anonymous(opts)?;

    ensure_valid(ctx.client.compile_orb(&yaml).await?)?;

    if path == crate::cli::input::STDIN_PATH {
        println!("Orb input is valid.");
    } else {
        println!("Orb at {} is valid.", path);
    }
    Ok(())
}

/// Run the orb process command
pub async fn process(opts: &GlobalOptions, path: &str) -> Result<()> {
    let yaml = read_source(path)?;
    let ctx = CommandContext::anonymous(opts)?;

    let response = ensure_valid(ctx.client.compile_orb(&yaml).await?)?;
    print!("{}", response.output_yaml.unwrap_or_default());
    Ok(())
}

/// Run the orb create command
pub async fn create(opts: &GlobalOptions, orb: &str, private: bool, no_prompt: bool) -> Result<()> {
    let orb: OrbRef = orb.parse()?;
    if orb.version.is_some() {
        return Err(Error::InvalidArgument(format!(
            "expected <namespace>/<orb> without a version, got '{}'",
            orb
        )));
    }

    let ctx = CommandContext::new(opts)?;
    let namespace_id = ctx.client.namespace_id(&orb.namespace).await?.ok_or_else(|| {
        Error::from(ApiError::NotFound(format!(
            "namespace '{}' does not exist",
            orb.namespace
        )))
    })?;

    let visibility = if private { "private" } else { "public" };
    let prompt = format!(
        "Create {} orb '{}'? Orb names cannot be changed later",
        visibility,
        orb.full_name()
    );
    if !confirm(&prompt, no_prompt)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client
        .create_orb(&namespace_id, &orb.name, private)
        .await?;
    println!("{} Orb {} created.", "✓".green(), orb.full_name().bold());
    println!(
        "  Publish a dev version with: {}",
        format!("circleci orb publish <path> {}@dev:first", orb.full_name()).cyan()
    );
    Ok(())
}

async fn require_orb_id(ctx: &CommandContext, orb: &OrbRef) -> Result<String> {
    ctx.client.orb_id(orb).await?.ok_or_else(|| {
        ApiError::NotFound(format!(
            "orb '{}' does not exist; create it with `circleci orb create {}`",
            orb.full_name(),
            orb.full_name()
        ))
        .into()
    })
}

fn report_published(orb: &OrbRef, version: &str) {
    println!(
        "{} Orb {} was published.",
        "✓".green(),
        format!("{}@{}", orb.full_name(), version).bold()
    );
    if version.starts_with("dev:") {
        println!(
            "  {}",
            "Development versions are mutable and expire 90 days after their last publish."
                .dimmed()
        );
    }
}

/// Run the orb publish command
pub async fn publish(opts: &GlobalOptions, path: &str, orb: &str) -> Result<()> {
    let orb: OrbRef = orb.parse()?;
    let version = orb.require_version("publishing")?.to_string();
    if version == "volatile" {
        return Err(Error::InvalidArgument(
            "cannot publish to 'volatile'; use a semantic version or dev:<label>".to_string(),
        ));
    }

    let source = read_source(path)?;
    let ctx = CommandContext::new(opts)?;
    let orb_id = require_orb_id(&ctx, &orb).await?;

    let published = ctx.client.publish_orb(&orb_id, &version, &source).await?;
    report_published(&orb, &published);
    Ok(())
}

/// Version that follows `latest`; an unpublished orb starts from 0.0.0.
pub fn next_version(latest: Option<Version>, segment: Segment) -> Version {
    version::bump(&latest.unwrap_or(Version::new(0, 0, 0)), segment)
}

/// Run the orb publish increment command
pub async fn increment(opts: &GlobalOptions, path: &str, orb: &str, segment: Segment) -> Result<()> {
    let orb: OrbRef = orb.parse()?;
    let source = read_source(path)?;

    let ctx = CommandContext::new(opts)?;
    let orb_id = require_orb_id(&ctx, &orb).await?;

    let latest = ctx.client.latest_orb_version(&orb).await?;
    let next = next_version(latest.clone(), segment);
    debug!(
        "Bumping {} of {} from {:?} to {}",
        segment.as_str(),
        orb.full_name(),
        latest,
        next
    );

    let published = ctx
        .client
        .publish_orb(&orb_id, &next.to_string(), &source)
        .await?;
    report_published(&orb, &published);
    Ok(())
}

/// Run the orb publish promote command
pub async fn promote(opts: &GlobalOptions, orb: &str, segment: Segment) -> Result<()> {
    let orb: OrbRef = orb.parse()?;
    if !orb.is_dev() {
        return Err(Error::InvalidArgument(format!(
            "only development versions can be promoted; expected {}@dev:<label>",
            orb.full_name()
        )));
    }
    let dev_version = orb.require_version("promotion")?;

    let ctx = CommandContext::new(opts)?;
    let orb_id = require_orb_id(&ctx, &orb).await?;

    let promoted = ctx.client.promote_orb(&orb_id, dev_version, segment).await?;
    println!(
        "{} Orb {} was promoted to {}.",
        "✓".green(),
        orb.to_string().bold(),
        format!("{}@{}", orb.full_name(), promoted).bold()
    );
    Ok(())
}

/// Run the orb pack command
pub fn pack(dir: &str) -> Result<()> {
    print!("{}", pack::pack_to_string(Path::new(dir))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_version_from_latest() {
        let latest = Version::parse("1.4.2").unwrap();
        assert_eq!(next_version(Some(latest.clone()), Segment::Minor).to_string(), "1.5.0");
        assert_eq!(next_version(Some(latest), Segment::Patch).to_string(), "1.4.3");
    }

    #[test]
    fn test_next_version_for_unpublished_orb() {
        assert_eq!(next_version(None, Segment::Patch).to_string(), "0.0.1");
        assert_eq!(next_version(None, Segment::Major).to_string(), "1.0.0");
    }
}
