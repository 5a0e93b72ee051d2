//! CircleCI API client

pub mod api;
pub mod circleci;
pub mod graphql;
pub mod http;
pub mod models;
pub mod pagination;
pub mod rest;

pub use api::{
    CompileApi, ContextApi, InfoApi, OrbApi, PipelineApi, PolicyApi, ProjectApi, RepositoryApi,
    ScheduleApi, TriggerApi,
};
pub use circleci::CircleCiClient;

