//! Release update checker
//!
//! Compares the running version with the latest GitHub release. The automatic
//! check runs at most once per day; its timestamp lives in
//! `~/.circleci/update_check.yml`. Failures never fail a command.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use log::debug;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::client::http::{build_http_client, check_status, decode_json};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::util::version;

/// Latest release of the CLI
pub const RELEASES_URL: &str =
    "https://api.github.com/repos/CircleCI-Public/circleci-cli/releases/latest";

/// Minimum time between automatic checks
const CHECK_INTERVAL_HOURS: i64 = 24;

/// Upper bound on the automatic check
const BACKGROUND_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// State file name inside `~/.circleci`
const STATE_FILE: &str = "update_check.yml";

/// Persisted time of the last automatic check
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_check: Option<DateTime<Utc>>,
}

impl UpdateState {
    pub fn path() -> Result<PathBuf> {
        Ok(Config::state_dir()?.join(STATE_FILE))
    }

    /// Load state; a missing or unreadable file counts as never checked.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_yaml::from_str(&text).ok())
            .unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Whether the next automatic check is due at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_update_check {
            Some(last) => now - last >= Duration::hours(CHECK_INTERVAL_HOURS),
            None => true,
        }
    }
}

/// GitHub release payload
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub html_url: String,
}

/// Outcome of comparing the running version with the latest release
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatus {
    pub current: Version,
    pub latest: Version,
    pub url: String,
}

impl UpdateStatus {
    pub fn update_available(&self) -> bool {
        self.latest > self.current
    }
}

/// Version of this binary
pub fn current_version() -> Result<Version> {
    version::parse(env!("CARGO_PKG_VERSION"))
}

/// Parse a release tag such as `v0.1.5` or `0.1.5`.
pub fn parse_tag(tag: &str) -> Result<Version> {
    version::parse(tag)
}

/// Fetch the latest release from `url` and compare it with `current`.
pub async fn check(url: &str, current: Version) -> Result<UpdateStatus> {
    debug!("Checking for updates at {}", url);

    let response = build_http_client()?
        .get(url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(ApiError::from)?;
    let release: Release = decode_json(check_status(response).await?).await?;

    Ok(UpdateStatus {
        current,
        latest: parse_tag(&release.tag_name)?,
        url: release.html_url,
    })
}

/// Print the notice shown when a newer release exists.
pub fn print_notice(status: &UpdateStatus) {
    eprintln!(
        "A new release of circleci is available: {} → {}\n  Download it from {}",
        status.current, status.latest, status.url
    );
}

/// Run the throttled background check after a command.
///
/// Skipped when `skip` is set (flag, env or config). Every failure is logged
/// at debug level and swallowed.
pub async fn maybe_notify(skip: bool) {
    if skip {
        debug!("Update check skipped");
        return;
    }

    let path = match UpdateState::path() {
        Ok(path) => path,
        Err(err) => {
            debug!("Update check disabled: {}", err);
            return;
        }
    };

    let now = Utc::now();
    let state = UpdateState::load_from(&path);
    if !state.is_due(now) {
        debug!("Update check not due (last at {:?})", state.last_update_check);
        return;
    }

    let result = match current_version() {
        Ok(current) => tokio::time::timeout(BACKGROUND_TIMEOUT, check(RELEASES_URL, current))
            .await
            .unwrap_or_else(|_| Err(ApiError::Network("update check timed out".into()).into())),
        Err(err) => Err(err),
    };

    let state = UpdateState {
        last_update_check: Some(now),
    };
    if let Err(err) = state.save_to(&path) {
        debug!("Could not record update check: {}", err);
    }

    match result {
        Ok(status) if status.update_available() => print_notice(&status),
        Ok(_) => debug!("circleci is up to date"),
        Err(err) => debug!("Update check failed: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_due_after_a_day() {
        let now = Utc::now();
        assert!(UpdateState::default().is_due(now));

        let recent = UpdateState {
            last_update_check: Some(now - Duration::hours(2)),
        };
        assert!(!recent.is_due(now));

        let stale = UpdateState {
            last_update_check: Some(now - Duration::hours(25)),
        };
        assert!(stale.is_due(now));
    }

    #[test]
    fn test_state_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("update_check.yml");
        assert_eq!(UpdateState::load_from(&path), UpdateState::default());

        let state = UpdateState {
            last_update_check: Some(Utc::now()),
        };
        state.save_to(&path).unwrap();
        assert_eq!(UpdateState::load_from(&path), state);
    }

    #[test]
    fn test_corrupt_state_counts_as_never_checked() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("update_check.yml");
        std::fs::write(&path, "last_update_check: [not a date").unwrap();
        assert!(UpdateState::load_from(&path).is_due(Utc::now()));
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag("v0.1.5").unwrap().to_string(), "0.1.5");
        assert_eq!(parse_tag("2.0.0").unwrap().to_string(), "2.0.0");
        assert!(parse_tag("nightly").is_err());
    }

    #[tokio::test]
    async fn test_check_reports_newer_release() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/releases/latest")
            .with_status(200)
            .with_body(
                r#"{"tag_name": "v9.1.0", "html_url": "https://github.com/CircleCI-Public/circleci-cli/releases/tag/v9.1.0"}"#,
            )
            .create_async()
            .await;

        let current = Version::parse("1.0.0").unwrap();
        let status = check(&format!("{}/releases/latest", server.url()), current)
            .await
            .unwrap();

        assert!(status.update_available());
        assert_eq!(status.latest.to_string(), "9.1.0");
        assert!(status.url.ends_with("v9.1.0"));
    }

    #[tokio::test]
    async fn test_check_same_version_is_current() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/latest")
            .with_status(200)
            .with_body(r#"{"tag_name": "v1.0.0", "html_url": "https://example.invalid"}"#)
            .create_async()
            .await;

        let current = Version::parse("1.0.0").unwrap();
        let status = check(&format!("{}/latest", server.url()), current)
            .await
            .unwrap();
        assert!(!status.update_available());
    }

    #[tokio::test]
    async fn test_check_propagates_http_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/latest")
            .with_status(503)
            .create_async()
            .await;

        let current = Version::parse("1.0.0").unwrap();
        assert!(check(&format!("{}/latest", server.url()), current).await.is_err());
    }
}
