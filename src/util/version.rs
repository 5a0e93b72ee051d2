//! Release versions for orb publishing and update checks

use semver::Version;

use crate::error::{Error, Result};

/// Segment bumped by `orb publish increment` and `orb publish promote`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Segment {
    Major,
    Minor,
    Patch,
}

impl Segment {
    /// Lowercase name, as the registry expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Major => "major",
            Segment::Minor => "minor",
            Segment::Patch => "patch",
        }
    }
}

/// Parse `1.2.3` or `v1.2.3`. Pre-release and build suffixes are rejected.
pub fn parse(s: &str) -> Result<Version> {
    let trimmed = s.trim();
    let raw = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let invalid = || Error::InvalidArgument(format!("invalid semantic version '{}'", s));

    let version = Version::parse(raw).map_err(|_| invalid())?;
    if !version.pre.is_empty() || !version.build.is_empty() {
        return Err(invalid());
    }
    Ok(version)
}

/// Next version after bumping `segment`; lower segments reset to zero.
pub fn bump(version: &Version, segment: Segment) -> Version {
    match segment {
        Segment::Major => Version::new(version.major + 1, 0, 0),
        Segment::Minor => Version::new(version.major, version.minor + 1, 0),
        Segment::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
}
