//! Point-in-time metadata snapshots and field-level comparison.
//!
//! A [`FieldSnapshot`] probes the filesystem once, when it is built. The
//! comparison functions in this module only look at captured values and
//! never touch the filesystem themselves.

mod differ;
mod field;
mod field_snapshot;

pub use differ::{diff, is_equals};
pub use field::{EntryKind, Field, FieldValue};
pub use field_snapshot::FieldSnapshot;
