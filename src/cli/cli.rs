use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Filesystem snapshots and recursive tree operations")]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Split a path into its segments
    Split {
        path: String,
        /// Separator character, repeatable. Defaults to both slashes
        #[clap(long = "separator", short)]
        separators: Vec<char>,
    },
    /// Print the extension of a path
    Extension {
        path: String,
        /// Extension mark, repeatable and tried in order. Defaults to "."
        #[clap(long = "mark", short)]
        marks: Vec<String>,
    },
    /// Delete a path and everything below it
    Delete { path: PathBuf },
    /// Create a path and its missing parents
    Create {
        path: PathBuf,
        /// Create an empty file at the leaf instead of a directory
        #[clap(long)]
        file: bool,
    },
    /// Print the metadata fields captured for a path
    Snapshot { path: PathBuf },
    /// Snapshot two paths and print the fields that differ
    Diff { left: PathBuf, right: PathBuf },
}
