//! CLI command implementations.

pub mod curate;
pub mod status;
