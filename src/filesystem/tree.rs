use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use snafu::{ResultExt, ensure};
use tracing::{debug, trace};

use crate::error::{InvalidExecutionSnafu, IoSnafu, Result};
use crate::ext::BestEffortPathExt;
use crate::filesystem::path_segments::count_segments;

/// Deletes `path` and everything below it, depth first.
///
/// Returns the number of removed entries: 0 when `path` does not exist, 1
/// for a file, and 1 plus the removed descendants for a directory. Symlinks,
/// dangling ones included, are removed as links and never followed.
///
/// Nothing is rolled back on failure; entries removed before the error stay
/// removed.
pub fn delete_recursive(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let Some(metadata) = probe(path, fs::symlink_metadata(path))? else {
        trace!("Nothing to delete at {}", path.display());
        return Ok(0);
    };

    if !metadata.is_dir() {
        fs::remove_file(path).context(IoSnafu { path })?;
        trace!("Deleted file {}", path.display());
        return Ok(1);
    }

    let mut affected = 1;
    for entry in fs::read_dir(path).context(IoSnafu { path })? {
        let entry = entry.context(IoSnafu { path })?;
        affected += delete_recursive(entry.path())?;
    }

    fs::remove_dir(path).context(IoSnafu { path })?;
    debug!(
        "Deleted directory {} ({} entries)",
        path.display(),
        affected
    );

    Ok(affected)
}

/// Creates `path` and any missing parents, leaving a directory at the leaf
/// or, when `is_file` is set, an empty file.
///
/// An existing path of the requested type is left alone and yields 0. An
/// existing path of the other type fails with `InvalidExecution`; symlinks
/// are judged by what they point to. Otherwise the number of non-empty
/// segments of `path` is returned.
///
/// A file is produced by creating the leaf as a directory and then swapping
/// it for an empty file, so an interrupted call may leave an empty directory
/// behind.
pub fn create_recursive(path: impl AsRef<Path>, is_file: bool) -> Result<usize> {
    let path = path.as_ref();

    if let Some(metadata) = probe(path, fs::metadata(path))? {
        let is_dir = metadata.is_dir();
        ensure!(
            is_dir != is_file,
            InvalidExecutionSnafu {
                message: format!(
                    "Path already exists but has other type: {}",
                    path.best_effort_path_display()
                )
            }
        );
        trace!("{} already exists", path.display());
        return Ok(0);
    }

    fs::create_dir_all(path).context(IoSnafu { path })?;
    let absolute = path.canonicalize().context(IoSnafu { path })?;

    if is_file {
        fs::remove_dir(&absolute).context(IoSnafu { path: &absolute })?;
        fs::write(&absolute, b"").context(IoSnafu { path: &absolute })?;
    }
    debug!(
        "Created {} {}",
        if is_file { "file" } else { "directory" },
        absolute.display()
    );

    Ok(count_segments(&path.to_string_lossy()))
}

/// Maps a missing path to `None` and any other failure to an `Io` error.
/// A path below a regular file (`file/child`) is missing too.
fn probe(path: &Path, metadata: io::Result<Metadata>) -> Result<Option<Metadata>> {
    match metadata {
        Ok(metadata) => Ok(Some(metadata)),
        Err(error)
            if matches!(
                error.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(None)
        }
        Err(error) => Err(error).context(IoSnafu { path }),
    }
}
