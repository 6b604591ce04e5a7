mod command_line;

pub use command_line::{CommandLineConfiguration, CommandLineConfigurationBuilder, QuotePair};
