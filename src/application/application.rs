use std::io::{self, Write};

use colored::Colorize;
use fskit::FsKitError;
use fskit::filesystem::{self, DEFAULT_EXTENSION_MARKS};
use fskit::snapshot::{self, FieldSnapshot};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::cli::Command;

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let stdout = io::stdout();
        Self::run_with_output(&app_config, &mut stdout.lock())
    }

    pub fn run_with_output(
        app_config: &RuntimeConfig,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        debug!("Running {:?}", app_config.command);

        match &app_config.command {
            Command::Split { path, separators } => {
                let segments = if separators.is_empty() {
                    filesystem::split_path(path)
                } else {
                    filesystem::split_path_with(path, separators)
                        .context(OperationSnafu { operation: "split" })?
                };
                for segment in segments {
                    writeln!(out, "{segment}").context(OutputSnafu)?;
                }
            }
            Command::Extension { path, marks } => {
                let marks: Vec<&str> = if marks.is_empty() {
                    DEFAULT_EXTENSION_MARKS.to_vec()
                } else {
                    marks.iter().map(String::as_str).collect()
                };
                let extension = filesystem::extension_with(path, &marks).context(OperationSnafu {
                    operation: "extension",
                })?;
                writeln!(out, "{extension}").context(OutputSnafu)?;
            }
            Command::Delete { path } => {
                let removed = filesystem::delete_recursive(path)
                    .context(OperationSnafu { operation: "delete" })?;
                info!("Removed {} entries", removed);
                writeln!(out, "{removed}").context(OutputSnafu)?;
            }
            Command::Create { path, file } => {
                let depth = filesystem::create_recursive(path, *file)
                    .context(OperationSnafu { operation: "create" })?;
                writeln!(out, "{depth}").context(OutputSnafu)?;
            }
            Command::Snapshot { path } => {
                let captured = FieldSnapshot::of(path);
                for (field, value) in captured.fields() {
                    let shown = value.map_or_else(|| "-".to_string(), |v| v.to_string());
                    writeln!(out, "{:<8} {}", field.name(), shown).context(OutputSnafu)?;
                }
            }
            Command::Diff { left, right } => {
                let left = FieldSnapshot::of(left);
                let right = FieldSnapshot::of(right);
                let changes = snapshot::diff(Some(&left), Some(&right));
                if changes.is_empty() {
                    let text = "identical";
                    let written = if app_config.color {
                        writeln!(out, "{}", text.green())
                    } else {
                        writeln!(out, "{text}")
                    };
                    written.context(OutputSnafu)?;
                }
                for field in changes {
                    let written = if app_config.color {
                        writeln!(out, "{}", field.name().red())
                    } else {
                        writeln!(out, "{field}")
                    };
                    written.context(OutputSnafu)?;
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during '{operation}'"))]
    OperationError {
        operation: &'static str,
        source: FsKitError,
    },
    #[snafu(display("Failed to write output"))]
    OutputError { source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run(command: Command) -> Result<String, ApplicationError> {
        let config = RuntimeConfig {
            command,
            color: false,
        };
        let mut out = Vec::new();
        Application::run_with_output(&config, &mut out)?;
        Ok(String::from_utf8(out).expect("Output should be UTF-8"))
    }

    #[test]
    fn test_split_prints_one_segment_per_line() {
        let output = run(Command::Split {
            path: "a/b\\c".into(),
            separators: vec![],
        })
        .unwrap();

        assert_eq!(output, "a\nb\nc\n");
    }

    #[test]
    fn test_extension_uses_marks_in_order() {
        let output = run(Command::Extension {
            path: "a.tar.gz".into(),
            marks: vec![".tar".into(), ".".into()],
        })
        .unwrap();

        assert_eq!(output, ".tar.gz\n");
    }

    #[test]
    fn test_extension_with_empty_mark_fails() {
        let result = run(Command::Extension {
            path: "a.txt".into(),
            marks: vec![String::new()],
        });

        assert!(matches!(
            result,
            Err(ApplicationError::OperationError {
                operation: "extension",
                ..
            })
        ));
    }

    #[test]
    fn test_create_then_delete() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let top = temp_dir.path().join("top");
        let leaf = top.join("leaf");

        run(Command::Create {
            path: leaf.clone(),
            file: true,
        })
        .unwrap();
        assert!(leaf.is_file());

        let output = run(Command::Delete { path: top.clone() }).unwrap();
        assert_eq!(output, "2\n");
        assert!(!top.exists());
    }

    #[test]
    fn test_create_conflict_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let result = run(Command::Create {
            path: temp_dir.path().to_path_buf(),
            file: true,
        });

        match result {
            Err(ApplicationError::OperationError { source, .. }) => {
                assert!(source.is_invalid_execution())
            }
            other => panic!("Expected OperationError, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_lists_every_field() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("file");
        fs::write(&file, "abc").expect("Failed to write file");

        let output = run(Command::Snapshot { path: file }).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("exists") && lines[1].ends_with("true"));
        assert!(lines[2].ends_with("file"));
        assert!(lines[3].ends_with("3 bytes"));
    }

    #[test]
    fn test_diff_output() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let present = temp_dir.path().to_path_buf();
        let missing: PathBuf = temp_dir.path().join("missing");

        let same = run(Command::Diff {
            left: present.clone(),
            right: present.clone(),
        })
        .unwrap();
        let different = run(Command::Diff {
            left: present,
            right: missing,
        })
        .unwrap();

        assert_eq!(same, "identical\n");
        assert_eq!(different, "path\nexists\nkind\nmodified\n");
    }
}
