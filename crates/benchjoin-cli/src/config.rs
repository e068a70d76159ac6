//! Resolution of parsed arguments into an immutable run configuration.

use benchjoin_transform::JoinOptions;

use crate::cli::Cli;

/// Two-character escape accepted for a tab delimiter.
const TAB_ESCAPE: &str = "\\t";

/// Everything a run needs, fixed once arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinConfig {
    pub basenames: Vec<String>,
    pub output: String,
    pub delimiter: String,
    pub join_field: String,
    pub fields: Vec<String>,
    pub add_comm: bool,
}

impl JoinConfig {
    /// Builds the configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            basenames: cli.basenames.clone(),
            output: cli.output.clone(),
            delimiter: normalize_delimiter(&cli.delimiter),
            join_field: cli.join.clone(),
            fields: cli.fields.clone(),
            add_comm: cli.add_comm,
        }
    }

    pub fn join_options(&self) -> JoinOptions {
        JoinOptions::default()
            .with_join_field(self.join_field.clone())
            .with_fields(self.fields.clone())
            .with_add_comm(self.add_comm)
    }
}

/// Replaces a literal `\t` with a tab; anything else is kept as given.
pub fn normalize_delimiter(raw: &str) -> String {
    if raw == TAB_ESCAPE {
        "\t".to_string()
    } else {
        raw.to_string()
    }
}
