//! Path segment utilities and recursive tree mutation.
//!
//! Everything here is a free function operating on the host filesystem at
//! call time; nothing is cached between calls.

pub mod path_segments;
mod tree;

pub use path_segments::{
    DEFAULT_EXTENSION_MARKS, DEFAULT_SEPARATORS, count_segments, extension, extension_with,
    split_path, split_path_with,
};
pub use tree::{create_recursive, delete_recursive};
