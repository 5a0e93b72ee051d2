//! Interactive prompts and input sources
//!
//! Prompts only appear when both stdin and stderr are terminals; otherwise a
//! missing value is an error naming what was required.

use std::io::{IsTerminal, Read};
use std::path::Path;

use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};

use crate::error::{Error, Result};

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Whether interactive prompts can be shown
pub fn can_prompt() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Use `value` when given, otherwise prompt for it.
pub fn require_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        return Ok(value);
    }
    if !can_prompt() {
        return Err(Error::InvalidArgument(format!("{} is required", label)));
    }

    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

/// Resolve a secret: `--value` first, then piped stdin, then a hidden prompt.
pub fn secret_value(value: Option<String>, label: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    if !std::io::stdin().is_terminal() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument(format!("{} is required", label)));
        }
        return Ok(trimmed.to_string());
    }

    let secret = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact()?;
    Ok(secret)
}

/// Ask for confirmation unless `force` is set.
///
/// Without a terminal the action is refused; pass `force` (`--force`,
/// `--no-prompt`) in scripts.
pub fn confirm(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }
    if !can_prompt() {
        return Err(Error::InvalidArgument(format!(
            "{} (confirmation required; rerun with --force or --no-prompt)",
            prompt
        )));
    }

    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(answer)
}

/// Pick one of `items`; `None` when the user cancels.
pub fn select(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    if !can_prompt() {
        return Err(Error::InvalidArgument(format!(
            "{}: no terminal to choose from",
            prompt
        )));
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

/// Read a file, or standard input when `path` is `-`.
pub fn read_source(path: &str) -> Result<String> {
    if path == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    std::fs::read_to_string(Path::new(path)).map_err(|e| {
        Error::InvalidArgument(format!("could not read '{}': {}", path, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_given_values_skip_prompts() {
        assert_eq!(
            require_or_prompt(Some("deploy".into()), "Context name").unwrap(),
            "deploy"
        );
        assert_eq!(secret_value(Some("s3cr3t".into()), "Value").unwrap(), "s3cr3t");
        assert!(confirm("Delete?", true).unwrap());
    }

    #[test]
    fn test_read_source_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orb.yml");
        std::fs::write(&path, "version: 2.1\n").unwrap();

        let text = read_source(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "version: 2.1\n");
    }

    #[test]
    fn test_read_source_missing_file_names_path() {
        let err = read_source("/definitely/not/here.yml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yml"));
    }
}
