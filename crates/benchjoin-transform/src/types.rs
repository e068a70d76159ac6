//! Options and inputs for joining a suffix group.

use polars::prelude::DataFrame;

/// Join field used when none is configured.
pub const DEFAULT_JOIN_FIELD: &str = "parameters.dbSize";

/// Output field prefixes used when none are configured.
pub const DEFAULT_FIELDS: [&str; 2] = ["setupTime.mean", "onlineTime.mean"];

/// How tables are combined and which columns are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    /// Column matched across every table.
    pub join_field: String,
    /// Output columns are kept when their name starts with one of these.
    pub fields: Vec<String>,
    /// Whether to derive `setupComm` and `onlineComm`.
    pub add_comm: bool,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            join_field: DEFAULT_JOIN_FIELD.to_string(),
            fields: DEFAULT_FIELDS.iter().map(|f| (*f).to_string()).collect(),
            add_comm: false,
        }
    }
}

impl JoinOptions {
    #[must_use]
    pub fn with_join_field(mut self, join_field: impl Into<String>) -> Self {
        self.join_field = join_field.into();
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_add_comm(mut self, add_comm: bool) -> Self {
        self.add_comm = add_comm;
        self
    }
}

/// A loaded file together with the basename that tags its columns.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub basename: String,
    pub frame: DataFrame,
}

impl SourceTable {
    pub fn new(basename: impl Into<String>, frame: DataFrame) -> Self {
        Self {
            basename: basename.into(),
            frame,
        }
    }
}
