//! Graph layer tests
//!
//! Tests for the facade graph as ingestion and emission see it:
//! - Get-or-create and package hierarchies
//! - Class/module companion linking
//! - Duplicate method elimination
//! - Snapshot rendering
//! - Sharded builds and merging

pub mod tests_companions;
pub mod tests_construction;
pub mod tests_dedup;
pub mod tests_snapshot;
