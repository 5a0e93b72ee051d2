//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod global;
mod owner;
mod pagination;

pub use common::{OutputFormat, parse_parameters};
pub use global::GlobalOptions;
pub use owner::OwnerArgs;
pub use pagination::LimitArgs;
