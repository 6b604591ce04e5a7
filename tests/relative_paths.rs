//! Exercises relative paths against the process working directory. Kept in
//! its own test binary so changing the working directory cannot disturb the
//! unit tests.

use std::env;

use fskit::filesystem::{create_recursive, delete_recursive};
use fskit::snapshot::{self, Field, FieldSnapshot};
use tempfile::TempDir;

#[test]
fn relative_create_snapshot_and_delete() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let previous = env::current_dir().expect("Failed to read current dir");
    env::set_current_dir(temp_dir.path()).expect("Failed to change dir");

    let before = FieldSnapshot::of("a/b/c");
    let created = create_recursive("a/b/c", false).map_err(|e| e.to_string());
    let repeated = create_recursive("a/b/c", false).map_err(|e| e.to_string());
    let conflicting = create_recursive("a/b/c", true);
    let after = FieldSnapshot::of("a/b/c");
    let deleted = delete_recursive("a").map_err(|e| e.to_string());
    let gone = FieldSnapshot::of("a/b/c");

    env::set_current_dir(previous).expect("Failed to restore dir");

    assert_eq!(created, Ok(3));
    assert_eq!(repeated, Ok(0));
    assert!(matches!(conflicting, Err(e) if e.is_invalid_execution()));
    assert_eq!(deleted, Ok(3));

    let changes = snapshot::diff(Some(&before), Some(&after));
    assert!(changes.contains(&Field::Exists));
    assert!(!changes.contains(&Field::Path));
    assert_eq!(before.exists(), Some(false));
    assert_eq!(after.exists(), Some(true));
    assert!(snapshot::is_equals(Some(&before), Some(&gone)));
}
