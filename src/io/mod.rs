//! Input gathering for the CLI.
//!
//! The archive core consumes fully materialized `(name, bytes)` pairs; this
//! module produces them from local filesystem paths.

mod local;

pub use local::collect_entries;
