//! Filesystem building blocks: point-in-time metadata snapshots with a
//! field-level diff, recursive delete and create, and path segment helpers.
//!
//! All operations are synchronous and run on the calling thread.

pub mod config;
pub mod error;
mod ext;
pub mod filesystem;
pub mod snapshot;

pub use error::{FsKitError, Result};
