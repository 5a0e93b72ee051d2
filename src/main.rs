//! CircleCI CLI - pipelines, orbs, contexts and projects from the terminal

use clap::Parser;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod update;
mod util;

use cli::args::GlobalOptions;
use cli::{
    Cli, Commands, ConfigCommands, ContextCommands, InfoCommands, NamespaceCommands,
    OrbCommands, PipelineCommands, PolicyCommands, ProjectCommands, ProjectSecretCommands,
    PublishCommands, RepositoryCommands, ScheduleCommands, TriggerCommands, UpdateCommands,
};
use client::models::DecisionQuery;
use config::Config;
use error::{Error, Result};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::new();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    } else if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);
    let wants_update_check = !matches!(
        cli.command,
        Commands::Update(_) | Commands::Version | Commands::Completion { .. }
    );

    dispatch(cli.command, &opts).await?;

    if wants_update_check {
        let skip = opts.skip_update_check
            || Config::load_or_default(opts.config_ref())
                .map(|config| config.skip_update_check)
                .unwrap_or(false);
        update::maybe_notify(skip).await;
    }
    Ok(())
}

async fn dispatch(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Setup { no_prompt } => cli::setup::run(opts, no_prompt).await,
        Commands::Diagnostic => cli::info::diagnostic(opts).await,
        Commands::Info(InfoCommands::Org) => cli::info::orgs(opts).await,
        Commands::Context(cmd) => context(cmd, opts).await,
        Commands::Project(cmd) => project(cmd, opts).await,
        Commands::Schedule(cmd) => schedule(cmd, opts).await,
        Commands::Pipeline(cmd) => pipeline(cmd, opts).await,
        Commands::Trigger(cmd) => trigger(cmd, opts).await,
        Commands::Repository(RepositoryCommands::List { org_id, limit }) => {
            cli::repository::list(opts, &org_id, &limit).await
        }
        Commands::Orb(cmd) => orb(cmd, opts).await,
        Commands::Namespace(NamespaceCommands::Create {
            name,
            owner,
            args,
            no_prompt,
        }) => cli::namespace::create(opts, &name, &owner, &args, no_prompt).await,
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Validate { path } => cli::config::validate(opts, &path).await,
            ConfigCommands::Process {
                path,
                pipeline_parameters,
            } => cli::config::process(opts, &path, pipeline_parameters.as_deref()).await,
            ConfigCommands::Pack { dir } => cli::config::pack(&dir),
        },
        Commands::Policy(cmd) => policy(cmd, opts).await,
        Commands::Update(UpdateCommands::Check) => cli::update::check(opts).await,
        Commands::Version => {
            println!("circleci version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}

async fn context(cmd: ContextCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        ContextCommands::List { owner, args, limit } => {
            cli::context::list(opts, &owner, &args, &limit).await
        }
        ContextCommands::Show { owner, args } => cli::context::show(opts, &owner, &args).await,
        ContextCommands::Create { owner, args } => cli::context::create(opts, &owner, &args).await,
        ContextCommands::Delete { owner, args, force } => {
            cli::context::delete(opts, &owner, &args, force).await
        }
        ContextCommands::StoreSecret { owner, args, value } => {
            cli::context::store_secret(opts, &owner, &args, value).await
        }
        ContextCommands::RemoveSecret { owner, args } => {
            cli::context::remove_secret(opts, &owner, &args).await
        }
    }
}

async fn project(cmd: ProjectCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        ProjectCommands::Create { vcs, org, name } => {
            cli::project::create(opts, &vcs, &org, name).await
        }
        ProjectCommands::Get { slug } => cli::project::get(opts, &slug).await,
        ProjectCommands::Secret(secret) => match secret {
            ProjectSecretCommands::List { slug, limit } => {
                cli::project::list_secrets(opts, &slug, &limit).await
            }
            ProjectSecretCommands::Create { slug, name, value } => {
                cli::project::create_secret(opts, &slug, &name, value).await
            }
            ProjectSecretCommands::Delete { slug, name } => {
                cli::project::delete_secret(opts, &slug, &name).await
            }
        },
    }
}

async fn schedule(cmd: ScheduleCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        ScheduleCommands::List { slug, limit } => cli::schedule::list(opts, &slug, &limit).await,
        ScheduleCommands::Get { id } => cli::schedule::get(opts, &id).await,
        ScheduleCommands::Create {
            slug,
            name,
            attribution_actor,
            fields,
        } => cli::schedule::create(opts, &slug, &name, attribution_actor, &fields).await,
        ScheduleCommands::Update {
            id,
            name,
            attribution_actor,
            fields,
        } => cli::schedule::update(opts, &id, name, attribution_actor, &fields).await,
        ScheduleCommands::Delete { id, force } => cli::schedule::delete(opts, &id, force).await,
    }
}

async fn pipeline(cmd: PipelineCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        PipelineCommands::List {
            slug,
            branch,
            limit,
        } => cli::pipeline::list(opts, &slug, branch, &limit).await,
        PipelineCommands::Definitions { project_id, limit } => {
            cli::pipeline::definitions(opts, &project_id, &limit).await
        }
        PipelineCommands::Create {
            project_id,
            name,
            description,
            repo_id,
            checkout_repo_id,
            file_path,
            org_id,
        } => {
            let options = cli::pipeline::CreateOptions {
                name,
                description,
                repo_id,
                checkout_repo_id,
                file_path,
                org_id,
            };
            cli::pipeline::create(opts, &project_id, options).await
        }
        PipelineCommands::Run {
            slug,
            definition_id,
            branch,
            config_branch,
            checkout_branch,
            parameters,
        } => {
            let options = cli::pipeline::RunOptions {
                definition_id,
                branch,
                config_branch,
                checkout_branch,
                parameters,
            };
            cli::pipeline::run(opts, &slug, &options).await
        }
        PipelineCommands::Values { dir } => cli::pipeline::values(opts, &dir),
    }
}

async fn trigger(cmd: TriggerCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        TriggerCommands::Create {
            project_id,
            definition_id,
            name,
            description,
            event_source,
            repo_id,
            event_preset,
            checkout_ref,
            config_ref,
        } => {
            let options = cli::trigger::CreateOptions {
                name,
                description,
                event_source,
                repo_id,
                event_preset,
                checkout_ref,
                config_ref,
            };
            cli::trigger::create(opts, &project_id, &definition_id, options).await
        }
        TriggerCommands::List {
            project_id,
            definition_id,
            limit,
        } => cli::trigger::list(opts, &project_id, &definition_id, &limit).await,
    }
}

async fn orb(cmd: OrbCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        OrbCommands::List {
            namespace,
            uncertified,
            details,
            limit,
        } => cli::orb::list(opts, namespace.as_deref(), uncertified, details, &limit).await,
        OrbCommands::Info { orb } => cli::orb::info(opts, &orb).await,
        OrbCommands::Source { orb } => cli::orb::source(opts, &orb).await,
        OrbCommands::Validate { path } => cli::orb::validate(opts, &path).await,
        OrbCommands::Process { path } => cli::orb::process(opts, &path).await,
        OrbCommands::Create {
            orb,
            private,
            no_prompt,
        } => cli::orb::create(opts, &orb, private, no_prompt).await,
        OrbCommands::Publish { command, path, orb } => match (command, path, orb) {
            (Some(PublishCommands::Increment { path, orb, segment }), _, _) => {
                cli::orb::increment(opts, &path, &orb, segment).await
            }
            (Some(PublishCommands::Promote { orb, segment }), _, _) => {
                cli::orb::promote(opts, &orb, segment).await
            }
            (None, Some(path), Some(orb)) => cli::orb::publish(opts, &path, &orb).await,
            _ => Err(Error::InvalidArgument(
                "usage: circleci orb publish <path> <namespace>/<orb>@<version>".to_string(),
            )),
        },
        OrbCommands::Pack { dir } => cli::orb::pack(&dir),
    }
}

async fn policy(cmd: PolicyCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        PolicyCommands::Fetch { name, target } => {
            cli::policy::fetch(opts, name.as_deref(), &target).await
        }
        PolicyCommands::Push {
            dir,
            dry_run,
            no_prompt,
            target,
        } => cli::policy::push(opts, &dir, dry_run, no_prompt, &target).await,
        PolicyCommands::Logs {
            target,
            after,
            before,
            branch,
            project_id,
            limit,
        } => {
            let query = DecisionQuery {
                after,
                before,
                branch,
                project_id,
            };
            cli::policy::logs(opts, &target, query, &limit).await
        }
        PolicyCommands::Settings { target, enabled } => {
            cli::policy::settings(opts, &target, enabled).await
        }
    }
}
