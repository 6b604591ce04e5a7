use snafu::ensure;

use crate::error::{InvalidArgumentSnafu, Result};

/// Separators used when none are supplied: backslash and forward slash.
pub const DEFAULT_SEPARATORS: &[char] = &['\\', '/'];

/// Extension marks used when none are supplied.
pub const DEFAULT_EXTENSION_MARKS: &[&str] = &["."];

/// Splits `path` on either kind of slash.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(DEFAULT_SEPARATORS).collect()
}

/// Splits `path` at every character contained in `separators`.
///
/// Adjacent, leading and trailing separators produce empty segments, so
/// joining the result back with the separators that were matched yields
/// `path` again.
pub fn split_path_with<'a>(path: &'a str, separators: &[char]) -> Result<Vec<&'a str>> {
    ensure!(
        !separators.is_empty(),
        InvalidArgumentSnafu {
            message: "Empty list for separators."
        }
    );

    Ok(path.split(separators).collect())
}

/// Number of non-empty segments of `path` under the default separators.
pub fn count_segments(path: &str) -> usize {
    split_path(path)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .count()
}

/// Returns the extension of `path` using `.` as the only mark.
pub fn extension(path: &str) -> &str {
    path.rfind('.').map_or("", |index| &path[index..])
}

/// Returns the tail of `path` starting at the last occurrence of a mark.
///
/// Marks are tried in the order given and the first one found anywhere in
/// `path` wins, even when a later mark occurs further to the right. When no
/// mark occurs the result is empty.
pub fn extension_with<'a>(path: &'a str, marks: &[&str]) -> Result<&'a str> {
    ensure!(
        !marks.is_empty(),
        InvalidArgumentSnafu {
            message: "Empty list for extension marks."
        }
    );
    ensure!(
        marks.iter().all(|mark| !mark.is_empty()),
        InvalidArgumentSnafu {
            message: "Empty extension mark."
        }
    );

    Ok(marks
        .iter()
        .find_map(|mark| path.rfind(mark))
        .map_or("", |index| &path[index..]))
}
