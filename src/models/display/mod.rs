//! Display model implementations for table and JSON output

mod context;
mod info;
mod orb;
mod pipeline;
mod policy;
mod project;
mod repository;
mod schedule;
mod trigger;

pub use context::{ContextDisplay, ContextEnvVarDisplay};
pub use info::OrgDisplay;
pub use orb::{OrbBriefDisplay, OrbDisplay};
pub use pipeline::{PipelineDefinitionDisplay, PipelineDisplay, PipelineValueDisplay};
pub use policy::{BundleChangeDisplay, DecisionDisplay, PolicyDisplay};
pub use project::{ProjectDisplay, ProjectEnvVarDisplay};
pub use repository::RepositoryDisplay;
pub use schedule::ScheduleDisplay;
pub use trigger::TriggerDisplay;
