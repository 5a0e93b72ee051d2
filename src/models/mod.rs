//! Display models for CLI output
//!
//! API response types are converted into flat, column-named rows before they
//! are rendered as tables, plain text or JSON.

pub mod display;

pub use display::{
    BundleChangeDisplay, ContextDisplay, ContextEnvVarDisplay, DecisionDisplay, OrbBriefDisplay,
    OrbDisplay, OrgDisplay, PipelineDefinitionDisplay, PipelineDisplay, PipelineValueDisplay,
    PolicyDisplay, ProjectDisplay, ProjectEnvVarDisplay, RepositoryDisplay, ScheduleDisplay,
    TriggerDisplay,
};
