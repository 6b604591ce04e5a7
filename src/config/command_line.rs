use snafu::ensure;

use crate::error::{InvalidArgumentSnafu, Result};

/// Opening and closing quote of a quoted command-line value.
pub type QuotePair = (String, String);

const DEFAULT_ATTRIBUTION: &str = "=";
const DEFAULT_QUOTES: [(&str, &str); 4] = [("\"", "\""), ("'", "'"), ("`", "`"), ("´", "´")];

/// How command-line arguments of the form `name=value` are read.
///
/// Setters validate their input, so an instance can never hold an empty
/// attribution operator or an empty quote list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineConfiguration {
    attribution: String,
    quotes: Vec<QuotePair>,
    case_insensitive_for_name: bool,
    case_insensitive_for_value: bool,
}

impl Default for CommandLineConfiguration {
    fn default() -> Self {
        Self {
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            quotes: DEFAULT_QUOTES
                .iter()
                .map(|(open, close)| (open.to_string(), close.to_string()))
                .collect(),
            case_insensitive_for_name: false,
            case_insensitive_for_value: false,
        }
    }
}

impl CommandLineConfiguration {
    pub fn builder() -> CommandLineConfigurationBuilder {
        CommandLineConfigurationBuilder::default()
    }

    /// Operator between an argument name and its value.
    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn set_attribution(&mut self, attribution: impl Into<String>) -> Result<()> {
        let attribution = attribution.into();
        ensure!(
            !attribution.is_empty(),
            InvalidArgumentSnafu {
                message: "Attribution operator cannot be empty."
            }
        );
        self.attribution = attribution;
        Ok(())
    }

    pub fn quotes(&self) -> &[QuotePair] {
        &self.quotes
    }

    pub fn set_quotes(&mut self, quotes: Vec<QuotePair>) -> Result<()> {
        ensure!(
            !quotes.is_empty(),
            InvalidArgumentSnafu {
                message: "Empty list for quotes."
            }
        );
        ensure!(
            quotes
                .iter()
                .all(|(open, close)| !open.is_empty() && !close.is_empty()),
            InvalidArgumentSnafu {
                message: "Quote pair with an empty side."
            }
        );
        self.quotes = quotes;
        Ok(())
    }

    pub fn case_insensitive_for_name(&self) -> bool {
        self.case_insensitive_for_name
    }

    pub fn set_case_insensitive_for_name(&mut self, value: bool) {
        self.case_insensitive_for_name = value;
    }

    pub fn case_insensitive_for_value(&self) -> bool {
        self.case_insensitive_for_value
    }

    pub fn set_case_insensitive_for_value(&mut self, value: bool) {
        self.case_insensitive_for_value = value;
    }
}

/// Partial overrides on top of the defaults, validated by [`build`].
///
/// [`build`]: CommandLineConfigurationBuilder::build
#[derive(Debug, Clone, Default)]
pub struct CommandLineConfigurationBuilder {
    attribution: Option<String>,
    quotes: Option<Vec<QuotePair>>,
    case_insensitive_for_name: Option<bool>,
    case_insensitive_for_value: Option<bool>,
}

impl CommandLineConfigurationBuilder {
    pub fn attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn quotes(mut self, quotes: Vec<QuotePair>) -> Self {
        self.quotes = Some(quotes);
        self
    }

    pub fn case_insensitive_for_name(mut self, value: bool) -> Self {
        self.case_insensitive_for_name = Some(value);
        self
    }

    pub fn case_insensitive_for_value(mut self, value: bool) -> Self {
        self.case_insensitive_for_value = Some(value);
        self
    }

    pub fn build(self) -> Result<CommandLineConfiguration> {
        let mut configuration = CommandLineConfiguration::default();
        if let Some(attribution) = self.attribution {
            configuration.set_attribution(attribution)?;
        }
        if let Some(quotes) = self.quotes {
            configuration.set_quotes(quotes)?;
        }
        if let Some(value) = self.case_insensitive_for_name {
            configuration.set_case_insensitive_for_name(value);
        }
        if let Some(value) = self.case_insensitive_for_value {
            configuration.set_case_insensitive_for_value(value);
        }
        Ok(configuration)
    }
}
