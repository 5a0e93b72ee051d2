//! Shell completion script generation

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to stdout.
pub fn run(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let mut command = Cli::command();
        let mut out = Vec::new();
        generate(Shell::Bash, &mut command, "circleci", &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("circleci"));
        assert!(script.contains("store-secret"));
    }
}
