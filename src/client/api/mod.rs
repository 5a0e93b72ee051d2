//! API trait definitions split by resource
//!
//! Each sub-trait covers one area of the CircleCI API surface. Paginated
//! collections expose a `*_page` method that fetches a single page and a
//! provided aggregation method that walks every page.

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

pub use compile::CompileApi;
pub use context::ContextApi;
pub use info::InfoApi;
pub use orb::OrbApi;
pub use pipeline::PipelineApi;
pub use policy::PolicyApi;
pub use project::ProjectApi;
pub use repository::RepositoryApi;
pub use schedule::ScheduleApi;
pub use trigger::TriggerApi;
