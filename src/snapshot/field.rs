use std::fmt;
use std::fs::FileType;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use derive_more::{Display, From, IsVariant};

/// A metadata field recorded by a snapshot.
///
/// The declaration order is the enumeration order used by [`Field::ALL`]
/// and therefore the order of every diff result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Path,
    Exists,
    Kind,
    Size,
    Modified,
}

impl Field {
    /// Every recognised field, in enumeration order.
    pub const ALL: [Field; 5] = [
        Field::Path,
        Field::Exists,
        Field::Kind,
        Field::Size,
        Field::Modified,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Path => "path",
            Field::Exists => "exists",
            Field::Kind => "kind",
            Field::Size => "size",
            Field::Modified => "modified",
        }
    }

    /// Names of every recognised field, in enumeration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Field::name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a path pointed at when it was probed. Symlinks are not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum EntryKind {
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
    #[display("symlink")]
    Symlink,
    #[display("other")]
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// A captured field value, borrowed from its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum FieldValue<'a> {
    Path(&'a Path),
    Flag(bool),
    Kind(EntryKind),
    Bytes(u64),
    Time(SystemTime),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Path(path) => write!(f, "{}", path.display()),
            FieldValue::Flag(flag) => write!(f, "{flag}"),
            FieldValue::Kind(kind) => write!(f, "{kind}"),
            FieldValue::Bytes(bytes) => write!(f, "{bytes} bytes"),
            FieldValue::Time(time) => match time.duration_since(UNIX_EPOCH) {
                Ok(since_epoch) => write!(
                    f,
                    "{}.{:09}",
                    since_epoch.as_secs(),
                    since_epoch.subsec_nanos()
                ),
                Err(_) => write!(f, "{time:?}"),
            },
        }
    }
}
