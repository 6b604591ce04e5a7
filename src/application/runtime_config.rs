use supports_color::Stream;

use crate::cli::{Cli, Command};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command: Command,
    /// Whether stdout output may be colored
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            command: cli.command,
            color: supports_color::on(Stream::Stdout).is_some(),
        }
    }
}
