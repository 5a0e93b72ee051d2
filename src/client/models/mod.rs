//! CircleCI API data models
//!
//! Domain types sent to and returned by the REST and GraphQL APIs, organized
//! by resource.

mod compile;
mod context;
mod info;
mod orb;
mod pipeline;
mod policy;
mod project;
mod repository;
mod schedule;
mod trigger;
mod vcs;

pub use compile::{ConfigResponse, PipelineValue};
pub use context::{Context, ContextEnvVar, CreateContextRequest, OwnerRef, StoreSecretRequest};
pub use info::{Collaboration, Me};
pub use orb::{OrbRef, OrbSummary, OrbVersion};
pub use pipeline::{
    BranchRef, CreatePipelineDefinitionRequest, Pipeline, PipelineCreated, PipelineDefinition,
    RepoRef, RunPipelineRequest,
};
pub use policy::{
    BundleDiff, BundlePayload, DecisionLog, DecisionQuery, DecisionSettings, PolicyBundle,
};
pub use project::{CreateEnvVarRequest, CreateProjectRequest, Project, ProjectEnvVar};
pub use repository::Repository;
pub use schedule::{CreateScheduleRequest, Schedule, Timetable, UpdateScheduleRequest};
pub use trigger::{
    CreateTriggerRequest, EventSource, PROVIDER_GITHUB_APP, PROVIDER_WEBHOOK, Trigger,
};
pub use vcs::{Owner, ProjectSlug, VcsType};

#[cfg(test)]
pub use orb::OrbVersionEntry;
#[cfg(test)]
pub use pipeline::{PipelineTrigger, PipelineVcs};
#[cfg(test)]
pub use project::VcsInfo;
