//! Git remote introspection used to fabricate local pipeline values

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::client::models::{PipelineValue, VcsType};
use crate::error::{Error, Result};

/// Placeholder pipeline ID for locally derived values
const LOCAL_PIPELINE_ID: &str = "00000000-0000-0000-0000-000000000001";

static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:ssh://)?git@(?P<host>[^:/]+)(?::\d+)?[:/](?P<org>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$",
    )
    .expect("ssh remote pattern is valid")
});

static HTTP_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:[^@/]+@)?(?P<host>[^/:]+)(?::\d+)?/(?P<org>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$",
    )
    .expect("http remote pattern is valid")
});

/// Organization and repository a remote points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    pub vcs: VcsType,
    pub org: String,
    pub repo: String,
}

impl RemoteInfo {
    /// Browser URL of the repository
    pub fn web_url(&self) -> String {
        match self.vcs {
            VcsType::Bitbucket => format!("https://bitbucket.org/{}/{}", self.org, self.repo),
            _ => format!("https://github.com/{}/{}", self.org, self.repo),
        }
    }
}

/// Parse an SSH, `ssh://` or HTTPS remote URL.
pub fn parse_remote_url(url: &str) -> Result<RemoteInfo> {
    let url = url.trim();
    let caps = SSH_REMOTE
        .captures(url)
        .or_else(|| HTTP_REMOTE.captures(url))
        .ok_or_else(|| Error::Git(format!("unrecognized remote URL '{}'", url)))?;

    let vcs = match caps["host"].to_ascii_lowercase().as_str() {
        "github.com" => VcsType::GitHub,
        "bitbucket.org" => VcsType::Bitbucket,
        host => {
            return Err(Error::Git(format!(
                "remote host '{}' is not GitHub or Bitbucket",
                host
            )));
        }
    };

    Ok(RemoteInfo {
        vcs,
        org: caps["org"].to_string(),
        repo: caps["repo"].to_string(),
    })
}

/// What could be learned about the working tree; missing pieces are `None`
#[derive(Debug, Clone, Default)]
pub struct GitInfo {
    pub remote: Option<RemoteInfo>,
    pub branch: Option<String>,
    pub revision: Option<String>,
    pub tag: Option<String>,
}

fn git(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).current_dir(dir).output().ok()?;
    if !output.status.success() {
        debug!("git {} failed in {}", args.join(" "), dir.display());
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Inspect the git checkout at `dir`.
pub fn inspect(dir: &Path) -> GitInfo {
    let remote = git(dir, &["remote", "get-url", "origin"]).and_then(|url| {
        parse_remote_url(&url)
            .map_err(|e| debug!("{}", e))
            .ok()
    });

    GitInfo {
        remote,
        branch: git(dir, &["rev-parse", "--abbrev-ref", "HEAD"]).filter(|b| b != "HEAD"),
        revision: git(dir, &["rev-parse", "HEAD"]),
        tag: git(dir, &["describe", "--tags", "--exact-match"]),
    }
}

/// Pipeline values a server-side compile would see for this checkout.
pub fn pipeline_values(info: &GitInfo) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert("id".to_string(), LOCAL_PIPELINE_ID.to_string());
    values.insert("number".to_string(), "1".to_string());

    if let Some(ref remote) = info.remote {
        values.insert("project.git_url".to_string(), remote.web_url());
        values.insert("project.type".to_string(), remote.vcs.long_name().to_string());
    }
    if let Some(ref branch) = info.branch {
        values.insert("git.branch".to_string(), branch.clone());
    }
    if let Some(ref revision) = info.revision {
        values.insert("git.revision".to_string(), revision.clone());
    }
    if let Some(ref tag) = info.tag {
        values.insert("git.tag".to_string(), tag.clone());
    }

    values
}

/// Pipeline values in the key/value list shape the GraphQL API takes
pub fn pipeline_value_list(info: &GitInfo) -> Vec<PipelineValue> {
    pipeline_values(info)
        .into_iter()
        .map(|(key, val)| PipelineValue { key, val })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssh_remote() {
        let info = parse_remote_url("git@github.com:acme/api.git").unwrap();
        assert_eq!(
            info,
            RemoteInfo {
                vcs: VcsType::GitHub,
                org: "acme".into(),
                repo: "api".into()
            }
        );
    }

    #[test]
    fn test_parse_ssh_url_remote() {
        let info = parse_remote_url("ssh://git@bitbucket.org/acme/web.git").unwrap();
        assert_eq!(info.vcs, VcsType::Bitbucket);
        assert_eq!(info.repo, "web");
    }

    #[test]
    fn test_parse_https_remote() {
        let info = parse_remote_url("https://github.com/acme/api").unwrap();
        assert_eq!(info.org, "acme");
        assert_eq!(info.repo, "api");

        let info = parse_remote_url("https://user@bitbucket.org/acme/web.git").unwrap();
        assert_eq!(info.vcs, VcsType::Bitbucket);
        assert_eq!(info.web_url(), "https://bitbucket.org/acme/web");
    }

    #[test]
    fn test_parse_rejects_unknown_hosts() {
        assert!(parse_remote_url("git@gitlab.com:acme/api.git").is_err());
        assert!(parse_remote_url("not a url").is_err());
    }

    #[test]
    fn test_pipeline_values_omit_missing_data() {
        let values = pipeline_values(&GitInfo::default());
        assert_eq!(values.len(), 2);
        assert_eq!(values["number"], "1");
        assert!(!values.contains_key("git.branch"));
    }

    #[test]
    fn test_pipeline_values_from_checkout() {
        let info = GitInfo {
            remote: Some(RemoteInfo {
                vcs: VcsType::GitHub,
                org: "acme".into(),
                repo: "api".into(),
            }),
            branch: Some("main".into()),
            revision: Some("abc123".into()),
            tag: None,
        };

        let values = pipeline_values(&info);
        assert_eq!(values["project.git_url"], "https://github.com/acme/api");
        assert_eq!(values["project.type"], "github");
        assert_eq!(values["git.branch"], "main");
        assert_eq!(values["git.revision"], "abc123");

        let list = pipeline_value_list(&info);
        assert!(list.iter().any(|v| v.key == "git.revision" && v.val == "abc123"));
    }
}
