use std::path::PathBuf;

use snafu::Snafu;

use crate::ext::BestEffortPathExt;

pub type Result<T, E = FsKitError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FsKitError {
    /// The caller supplied an empty or malformed value.
    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },
    /// The operation is forbidden in the current state.
    #[snafu(display("Invalid execution: {message}"))]
    InvalidExecution { message: String },
    #[snafu(display("Filesystem operation failed on {}", path.best_effort_path_display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FsKitError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FsKitError::InvalidArgument { .. })
    }

    pub fn is_invalid_execution(&self) -> bool {
        matches!(self, FsKitError::InvalidExecution { .. })
    }
}
