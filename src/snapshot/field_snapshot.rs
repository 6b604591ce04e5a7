use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::trace;

use crate::snapshot::differ;
use crate::snapshot::field::{EntryKind, Field, FieldValue};

/// Metadata of one path, captured once at construction.
///
/// Every field is optional. A snapshot built without a path has all fields
/// absent; one built with a path always records `path` and `exists`, and
/// the remaining fields whenever the metadata probe could provide them.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot {
    path: Option<PathBuf>,
    exists: Option<bool>,
    kind: Option<EntryKind>,
    size: Option<u64>,
    modified: Option<SystemTime>,
}

impl FieldSnapshot {
    pub fn new(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::of(path),
            None => Self::empty(),
        }
    }

    /// A snapshot that describes no path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Probes `path` now. Symlinks are described, not followed. Any probe
    /// failure is recorded as a path that does not exist.
    pub fn of(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let metadata = fs::symlink_metadata(path)
            .inspect_err(|e| trace!("Probe of {} failed: {e}", path.display()))
            .ok();

        let kind = metadata.as_ref().map(|m| EntryKind::from(m.file_type()));
        let snapshot = Self {
            path: Some(path.to_path_buf()),
            exists: Some(metadata.is_some()),
            kind,
            size: metadata
                .as_ref()
                .filter(|m| !m.is_dir())
                .map(|m| m.len()),
            modified: metadata.as_ref().and_then(|m| m.modified().ok()),
        };

        trace!("Captured snapshot {:?}", snapshot);
        snapshot
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn exists(&self) -> Option<bool> {
        self.exists
    }

    pub fn kind(&self) -> Option<EntryKind> {
        self.kind
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// The captured value of `field`, if any.
    pub fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Path => self.path.as_deref().map(FieldValue::from),
            Field::Exists => self.exists.map(FieldValue::from),
            Field::Kind => self.kind.map(FieldValue::from),
            Field::Size => self.size.map(FieldValue::from),
            Field::Modified => self.modified.map(FieldValue::from),
        }
    }

    /// Every field with its captured value, in enumeration order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, Option<FieldValue<'_>>)> {
        Field::ALL
            .into_iter()
            .map(move |field| (field, self.value(field)))
    }

    pub fn diff(&self, other: Option<&FieldSnapshot>) -> Vec<Field> {
        differ::diff(Some(self), other)
    }

    pub fn is_equals(&self, other: Option<&FieldSnapshot>) -> bool {
        differ::is_equals(Some(self), other)
    }
}

impl PartialEq for FieldSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.is_equals(Some(other))
    }
}

impl Eq for FieldSnapshot {}
