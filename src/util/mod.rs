//! Supporting utilities: git introspection, file tree packing and versions

pub mod git;
pub mod pack;
pub mod version;
