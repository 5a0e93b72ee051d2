//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};
pub use clap_complete::Shell;

pub mod args;
pub mod command_context;
pub mod completions;
pub mod config;
pub mod context;
pub mod handlers;
pub mod info;
pub mod input;
pub mod namespace;
pub mod orb;
pub mod pipeline;
pub mod policy;
pub mod project;
pub mod repository;
pub mod schedule;
pub mod setup;
pub mod trigger;
pub mod update;

pub use args::{LimitArgs, OutputFormat, OwnerArgs};
pub use command_context::CommandContext;

use crate::util::version::Segment;

/// CircleCI CLI - manage pipelines, orbs, contexts and projects from the terminal
#[derive(Parser, Debug)]
#[command(name = "circleci")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, plain, json)
    #[arg(
        long,
        global = true,
        env = "CIRCLECI_CLI_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// CircleCI host (default https://circleci.com)
    #[arg(long, global = true, env = "CIRCLECI_CLI_HOST", hide_env = true)]
    pub host: Option<String>,

    /// Personal API token
    #[arg(
        long,
        global = true,
        env = "CIRCLECI_CLI_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "CIRCLECI_CLI_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CIRCLECI_CLI_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Skip the automatic update check
    #[arg(
        long,
        global = true,
        env = "CIRCLECI_CLI_SKIP_UPDATE_CHECK",
        hide_env = true
    )]
    pub skip_update_check: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store your API token and host
    #[command(after_help = "EXAMPLES:\n  \
            circleci setup                                   # Prompt for both\n  \
            circleci setup --token <token> --host https://circleci.example.com --no-prompt")]
    Setup {
        /// Fail instead of prompting for missing values
        #[arg(long)]
        no_prompt: bool,
    },

    /// Check connectivity and show the resolved configuration
    Diagnostic,

    /// Show information about your account
    #[command(subcommand)]
    Info(InfoCommands),

    /// Manage contexts and their secrets
    #[command(subcommand)]
    Context(ContextCommands),

    /// Manage projects and project environment variables
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage scheduled pipelines
    #[command(subcommand)]
    Schedule(ScheduleCommands),

    /// List, define and run pipelines
    #[command(subcommand)]
    Pipeline(PipelineCommands),

    /// Manage pipeline triggers
    #[command(subcommand)]
    Trigger(TriggerCommands),

    /// List repositories available to GitHub App organizations
    #[command(subcommand)]
    Repository(RepositoryCommands),

    /// Browse, validate and publish orbs
    #[command(subcommand)]
    Orb(OrbCommands),

    /// Manage orb namespaces
    #[command(subcommand)]
    Namespace(NamespaceCommands),

    /// Validate, process and pack pipeline config
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Manage config policies and decision logs
    #[command(subcommand)]
    Policy(PolicyCommands),

    /// Check for newer releases
    #[command(subcommand)]
    Update(UpdateCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Install completions:
  bash:   circleci completion bash > /etc/bash_completion.d/circleci
  zsh:    circleci completion zsh > \"${fpath[1]}/_circleci\"
  fish:   circleci completion fish > ~/.config/fish/completions/circleci.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Account information subcommands
#[derive(Subcommand, Debug)]
pub enum InfoCommands {
    /// List the organizations you belong to
    Org,
}

/// Context subcommands
///
/// The owning organization is given by `--org-id` or by the leading
/// positionals `<vcs-type> <org-name>`.
#[derive(Subcommand, Debug)]
pub enum ContextCommands {
    /// List contexts of an organization
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            circleci context list github acme\n  \
            circleci context list --org-id 6e1ac4a8-8f3b-4c2c-9f11-1d2b0d4c6a7e"
    )]
    List {
        #[command(flatten)]
        owner: OwnerArgs,

        /// [<vcs-type> <org-name>]
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Show a context and the names of its variables
    #[command(after_help = "EXAMPLES:\n  \
            circleci context show github acme deploy")]
    Show {
        #[command(flatten)]
        owner: OwnerArgs,

        /// [<vcs-type> <org-name>] <context-name>
        #[arg(value_name = "ARGS", required = true)]
        args: Vec<String>,
    },

    /// Create a context
    Create {
        #[command(flatten)]
        owner: OwnerArgs,

        /// [<vcs-type> <org-name>] [<context-name>]
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Delete a context and all of its variables
    Delete {
        #[command(flatten)]
        owner: OwnerArgs,

        /// [<vcs-type> <org-name>] <context-name>
        #[arg(value_name = "ARGS", required = true)]
        args: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Store a secret in a context
    #[command(after_help = "EXAMPLES:\n  \
            circleci context store-secret github acme deploy AWS_KEY       # Prompt for value\n  \
            echo -n \"$KEY\" | circleci context store-secret github acme deploy AWS_KEY\n  \
            circleci context store-secret --org-id <uuid> deploy AWS_KEY --value abc")]
    StoreSecret {
        #[command(flatten)]
        owner: OwnerArgs,

        /// [<vcs-type> <org-name>] <context-name> <variable>
        #[arg(value_name = "ARGS", required = true)]
        args: Vec<String>,

        /// Secret value (read from stdin or prompted for when omitted)
        #[arg(long)]
        value: Option<String>,
    },

    /// Remove a secret from a context
    RemoveSecret {
        #[command(flatten)]
        owner: OwnerArgs,

        /// [<vcs-type> <org-name>] <context-name> <variable>
        #[arg(value_name = "ARGS", required = true)]
        args: Vec<String>,
    },
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a project in an organization
    #[command(after_help = "EXAMPLES:\n  \
            circleci project create circleci acme api")]
    Create {
        /// VCS type (github, bitbucket, circleci)
        vcs: String,

        /// Organization name or ID
        org: String,

        /// Project name (prompted for when omitted)
        name: Option<String>,
    },

    /// Show a project
    Get {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,
    },

    /// Manage project environment variables
    #[command(subcommand)]
    Secret(ProjectSecretCommands),
}

/// Project environment variable subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectSecretCommands {
    /// List project environment variables (values are masked)
    #[command(visible_alias = "ls")]
    List {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Create or replace a project environment variable
    Create {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,

        /// Variable name
        name: String,

        /// Value (read from stdin or prompted for when omitted)
        #[arg(long)]
        value: Option<String>,
    },

    /// Delete a project environment variable
    Delete {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,

        /// Variable name
        name: String,
    },
}

/// Who scheduled pipelines are attributed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AttributionActor {
    /// The user who owns the API token
    #[default]
    Current,
    /// The scheduling system
    System,
}

impl AttributionActor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributionActor::Current => "current",
            AttributionActor::System => "system",
        }
    }
}

/// Timetable and parameter flags shared by schedule create and update
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ScheduleFields {
    /// Schedule description
    #[arg(long)]
    pub description: Option<String>,

    /// Runs per hour (1-60)
    #[arg(long)]
    pub per_hour: Option<u32>,

    /// Hours of the day in UTC, comma-separated (0-23)
    #[arg(long, value_delimiter = ',')]
    pub hours_of_day: Vec<u32>,

    /// Days of the week, comma-separated (MON..SUN)
    #[arg(long, value_delimiter = ',')]
    pub days_of_week: Vec<String>,

    /// Days of the month, comma-separated (1-31)
    #[arg(long, value_delimiter = ',')]
    pub days_of_month: Vec<u32>,

    /// Months, comma-separated (JAN..DEC)
    #[arg(long, value_delimiter = ',')]
    pub months: Vec<String>,

    /// Pipeline parameter as key=value; repeat for more (values may contain commas)
    #[arg(long, value_name = "KEY=VALUE")]
    pub parameters: Vec<String>,
}

/// Schedule subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// List schedules of a project
    #[command(visible_alias = "ls")]
    List {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Show a schedule
    Get {
        /// Schedule ID
        id: String,
    },

    /// Create a schedule
    #[command(after_help = "EXAMPLES:\n  \
            circleci schedule create gh/acme/api --name nightly --per-hour 1 \\\n    \
            --hours-of-day 3 --days-of-week MON,TUE,WED,THU,FRI --parameters branch=main")]
    Create {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,

        /// Schedule name
        #[arg(long)]
        name: String,

        /// Attribute pipelines to the current user or the system
        #[arg(long, value_enum, default_value = "current")]
        attribution_actor: AttributionActor,

        #[command(flatten)]
        fields: ScheduleFields,
    },

    /// Update a schedule; only the given fields change
    Update {
        /// Schedule ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// Attribute pipelines to the current user or the system
        #[arg(long, value_enum)]
        attribution_actor: Option<AttributionActor>,

        #[command(flatten)]
        fields: ScheduleFields,
    },

    /// Delete a schedule
    Delete {
        /// Schedule ID
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Pipeline subcommands
#[derive(Subcommand, Debug)]
pub enum PipelineCommands {
    /// List recent pipelines of a project
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            circleci pipeline list gh/acme/api --branch main -n 20"
    )]
    List {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,

        /// Only pipelines for this branch
        #[arg(long)]
        branch: Option<String>,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// List pipeline definitions of a project
    Definitions {
        /// Project ID
        project_id: String,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Create a pipeline definition
    #[command(after_help = "EXAMPLES:\n  \
            circleci pipeline create <project-id> --name build --repo-id 123456\n  \
            circleci pipeline create <project-id> --org-id <uuid>   # Pick the repository")]
    Create {
        /// Project ID
        project_id: String,

        /// Definition name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Definition description
        #[arg(long)]
        description: Option<String>,

        /// Repository holding the config (picked from a list when omitted)
        #[arg(long)]
        repo_id: Option<String>,

        /// Repository to check out, when different from the config repository
        #[arg(long)]
        checkout_repo_id: Option<String>,

        /// Config file path inside the repository
        #[arg(long, default_value = ".circleci/config.yml")]
        file_path: String,

        /// Organization whose repositories are offered when --repo-id is omitted
        #[arg(long)]
        org_id: Option<String>,
    },

    /// Trigger a pipeline run
    #[command(after_help = "EXAMPLES:\n  \
            circleci pipeline run gh/acme/api --definition-id <uuid> --branch main\n  \
            circleci pipeline run gh/acme/api --branch main --parameters deploy=true --parameters env=prod")]
    Run {
        /// Project slug (<vcs>/<org>/<repo>)
        slug: String,

        /// Pipeline definition to run
        #[arg(long)]
        definition_id: Option<String>,

        /// Branch used for both config and checkout
        #[arg(long)]
        branch: Option<String>,

        /// Config branch, when different from --branch
        #[arg(long)]
        config_branch: Option<String>,

        /// Checkout branch, when different from --branch
        #[arg(long)]
        checkout_branch: Option<String>,

        /// Pipeline parameter as key=value; repeat for more (values may contain commas)
        #[arg(long, value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Print pipeline values derived from the local git checkout
    Values {
        /// Repository directory
        #[arg(default_value = ".")]
        dir: String,
    },
}

/// Where trigger events come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EventSourceKind {
    /// Repository events through the GitHub App
    #[default]
    #[value(name = "github_app")]
    GithubApp,
    /// Inbound webhook
    #[value(name = "webhook")]
    Webhook,
}

/// Trigger subcommands
#[derive(Subcommand, Debug)]
pub enum TriggerCommands {
    /// Create a trigger for a pipeline definition
    #[command(after_help = "EXAMPLES:\n  \
            circleci trigger create <project-id> <definition-id> --name pushes --repo-id 123456\n  \
            circleci trigger create <project-id> <definition-id> --name hook --event-source webhook")]
    Create {
        /// Project ID
        project_id: String,

        /// Pipeline definition ID
        definition_id: String,

        /// Trigger name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Trigger description
        #[arg(long)]
        description: Option<String>,

        /// Event source
        #[arg(long, value_enum, default_value = "github_app")]
        event_source: EventSourceKind,

        /// Repository the events come from (github_app only)
        #[arg(long)]
        repo_id: Option<String>,

        /// Event preset, e.g. all-pushes (github_app only)
        #[arg(long)]
        event_preset: Option<String>,

        /// Ref to check out
        #[arg(long)]
        checkout_ref: Option<String>,

        /// Ref to read config from
        #[arg(long)]
        config_ref: Option<String>,
    },

    /// List triggers of a pipeline definition
    #[command(visible_alias = "ls")]
    List {
        /// Project ID
        project_id: String,

        /// Pipeline definition ID
        definition_id: String,

        #[command(flatten)]
        limit: LimitArgs,
    },
}

/// Repository subcommands
#[derive(Subcommand, Debug)]
pub enum RepositoryCommands {
    /// List repositories of an organization
    #[command(visible_alias = "ls")]
    List {
        /// Organization ID
        #[arg(long)]
        org_id: String,

        #[command(flatten)]
        limit: LimitArgs,
    },
}

/// Orb subcommands
#[derive(Subcommand, Debug)]
pub enum OrbCommands {
    /// List orbs in the registry or in a namespace
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            circleci orb list                  # Certified orbs\n  \
            circleci orb list --uncertified    # Every public orb\n  \
            circleci orb list circleci --details"
    )]
    List {
        /// Namespace to list
        namespace: Option<String>,

        /// Include uncertified orbs
        #[arg(long, short = 'u')]
        uncertified: bool,

        /// Show usage statistics
        #[arg(long, short = 'd')]
        details: bool,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Show details of an orb version
    Info {
        /// Orb reference (<namespace>/<orb>[@<version>])
        orb: String,
    },

    /// Print the source of an orb version
    Source {
        /// Orb reference (<namespace>/<orb>[@<version>])
        orb: String,
    },

    /// Validate an orb YAML file
    Validate {
        /// Path to the orb YAML, or - for stdin
        path: String,
    },

    /// Expand an orb YAML file
    Process {
        /// Path to the orb YAML, or - for stdin
        path: String,
    },

    /// Create an orb in a namespace
    Create {
        /// Orb name (<namespace>/<orb>)
        orb: String,

        /// Make the orb private
        #[arg(long)]
        private: bool,

        /// Skip confirmation
        #[arg(long)]
        no_prompt: bool,
    },

    /// Publish an orb version
    #[command(
        args_conflicts_with_subcommands = true,
        after_help = "EXAMPLES:\n  \
            circleci orb publish orb.yml acme/tools@1.2.0\n  \
            circleci orb publish orb.yml acme/tools@dev:alpha\n  \
            circleci orb publish increment orb.yml acme/tools minor\n  \
            circleci orb publish promote acme/tools@dev:alpha patch"
    )]
    Publish {
        #[command(subcommand)]
        command: Option<PublishCommands>,

        /// Path to the orb YAML, or - for stdin
        path: Option<String>,

        /// Orb reference with version (<namespace>/<orb>@<version>)
        orb: Option<String>,
    },

    /// Pack a directory tree of orb YAML into one document
    Pack {
        /// Root directory
        dir: String,
    },
}

/// Orb publishing subcommands
#[derive(Subcommand, Debug)]
pub enum PublishCommands {
    /// Publish the next semantic version of an orb
    Increment {
        /// Path to the orb YAML, or - for stdin
        path: String,

        /// Orb name (<namespace>/<orb>)
        orb: String,

        /// Version segment to bump
        #[arg(value_enum)]
        segment: Segment,
    },

    /// Promote a development version to the next semantic version
    Promote {
        /// Development reference (<namespace>/<orb>@dev:<label>)
        orb: String,

        /// Version segment to bump
        #[arg(value_enum)]
        segment: Segment,
    },
}

/// Namespace subcommands
#[derive(Subcommand, Debug)]
pub enum NamespaceCommands {
    /// Create a namespace owned by an organization
    #[command(after_help = "EXAMPLES:\n  \
            circleci namespace create acme github acme-org\n  \
            circleci namespace create acme --org-id <uuid> --no-prompt")]
    Create {
        /// Namespace name
        name: String,

        #[command(flatten)]
        owner: OwnerArgs,

        /// [<vcs-type> <org-name>]
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        /// Skip confirmation
        #[arg(long)]
        no_prompt: bool,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate a pipeline config file
    Validate {
        /// Config path, or - for stdin
        #[arg(default_value = ".circleci/config.yml")]
        path: String,
    },

    /// Print the fully expanded config
    Process {
        /// Config path, or - for stdin
        #[arg(default_value = ".circleci/config.yml")]
        path: String,

        /// Pipeline parameters as a JSON object
        #[arg(long)]
        pipeline_parameters: Option<String>,
    },

    /// Pack a directory tree of config YAML into one document
    Pack {
        /// Root directory
        dir: String,
    },
}

/// Owner and context a policy command works on
#[derive(clap::Args, Debug, Clone)]
pub struct PolicyTarget {
    /// Organization ID owning the policies
    #[arg(long)]
    pub owner_id: String,

    /// Policy context
    #[arg(long, default_value = "config")]
    pub context: String,
}

/// Policy subcommands
#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    /// Fetch the active policy bundle, or one policy from it
    Fetch {
        /// Policy name
        name: Option<String>,

        #[command(flatten)]
        target: PolicyTarget,
    },

    /// Upload a directory of .rego files as the new bundle
    #[command(after_help = "EXAMPLES:\n  \
            circleci policy push ./policies --owner-id <uuid> --dry-run\n  \
            circleci policy push ./policies --owner-id <uuid> --no-prompt")]
    Push {
        /// Directory containing .rego files
        dir: String,

        /// Show the changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Skip the diff preview and confirmation
        #[arg(long)]
        no_prompt: bool,

        #[command(flatten)]
        target: PolicyTarget,
    },

    /// List policy decisions
    Logs {
        #[command(flatten)]
        target: PolicyTarget,

        /// Decisions made after this time (RFC 3339)
        #[arg(long)]
        after: Option<String>,

        /// Decisions made before this time (RFC 3339)
        #[arg(long)]
        before: Option<String>,

        /// Only decisions for this branch
        #[arg(long)]
        branch: Option<String>,

        /// Only decisions for this project
        #[arg(long)]
        project_id: Option<String>,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Show or change decision settings
    Settings {
        #[command(flatten)]
        target: PolicyTarget,

        /// Enable or disable policy evaluation
        #[arg(long)]
        enabled: Option<bool>,
    },
}

/// Update subcommands
#[derive(Subcommand, Debug)]
pub enum UpdateCommands {
    /// Check whether a newer release is available
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "circleci",
            "context",
            "list",
            "github",
            "acme",
            "--format",
            "json",
            "--token",
            "tok",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.token.as_deref(), Some("tok"));
        match cli.command {
            Commands::Context(ContextCommands::List { args, .. }) => {
                assert_eq!(args, vec!["github", "acme"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_publish_subcommand_and_positional_forms() {
        let cli = Cli::try_parse_from([
            "circleci", "orb", "publish", "increment", "orb.yml", "acme/tools", "minor",
        ])
        .unwrap();
        match cli.command {
            Commands::Orb(OrbCommands::Publish {
                command: Some(PublishCommands::Increment { segment, .. }),
                ..
            }) => assert_eq!(segment, Segment::Minor),
            other => panic!("unexpected command {:?}", other),
        }

        let cli =
            Cli::try_parse_from(["circleci", "orb", "publish", "orb.yml", "acme/tools@1.0.0"])
                .unwrap();
        match cli.command {
            Commands::Orb(OrbCommands::Publish {
                command: None,
                path,
                orb,
            }) => {
                assert_eq!(path.as_deref(), Some("orb.yml"));
                assert_eq!(orb.as_deref(), Some("acme/tools@1.0.0"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_schedule_lists_split_on_commas() {
        let cli = Cli::try_parse_from([
            "circleci",
            "schedule",
            "create",
            "gh/acme/api",
            "--name",
            "nightly",
            "--per-hour",
            "1",
            "--hours-of-day",
            "1,13",
            "--days-of-week",
            "MON,FRI",
            "--parameters",
            "branch=main",
        ])
        .unwrap();

        match cli.command {
            Commands::Schedule(ScheduleCommands::Create {
                fields,
                attribution_actor,
                ..
            }) => {
                assert_eq!(fields.hours_of_day, vec![1, 13]);
                assert_eq!(fields.days_of_week, vec!["MON", "FRI"]);
                assert_eq!(attribution_actor, AttributionActor::Current);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parameter_values_keep_commas() {
        let cli = Cli::try_parse_from([
            "circleci",
            "pipeline",
            "run",
            "gh/acme/api",
            "--parameters",
            "targets=eu,us",
            "--parameters",
            "deploy=true",
        ])
        .unwrap();
        match cli.command {
            Commands::Pipeline(PipelineCommands::Run { parameters, .. }) => {
                assert_eq!(parameters, vec!["targets=eu,us", "deploy=true"]);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from([
            "circleci",
            "schedule",
            "update",
            "sched-1",
            "--parameters",
            "regions=a,b",
        ])
        .unwrap();
        match cli.command {
            Commands::Schedule(ScheduleCommands::Update { fields, .. }) => {
                assert_eq!(fields.parameters, vec!["regions=a,b"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_event_source_names() {
        let cli = Cli::try_parse_from([
            "circleci",
            "trigger",
            "create",
            "p",
            "d",
            "--event-source",
            "webhook",
        ])
        .unwrap();
        match cli.command {
            Commands::Trigger(TriggerCommands::Create { event_source, .. }) => {
                assert_eq!(event_source, EventSourceKind::Webhook)
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
