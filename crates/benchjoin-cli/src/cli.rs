//! CLI argument definitions for `join-csv`.

use std::path::PathBuf;

use benchjoin_transform::DEFAULT_JOIN_FIELD;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "join-csv",
    version,
    about = "Join benchmark CSV files that share a key column",
    long_about = "Join benchmark CSV files that share a key column.\n\n\
                  Every output column is tagged with the basename of the file it came from,\n\
                  i.e. column {x} of {basename}.csv becomes {x}.{basename}. If the files\n\
                  exist as {basename}_{suffix}.csv, one joined file is written per suffix."
)]
pub struct Cli {
    /// Input CSV basenames. If, for each basename, files {basename}_{suffix}.csv
    /// exist, a join is written for each suffix.
    #[arg(value_name = "BASENAME", required = true, num_args = 1..)]
    pub basenames: Vec<String>,

    /// Output CSV file basename; files are written as {output}_{suffix}.csv.
    #[arg(short = 'o', long = "output", value_name = "BASENAME")]
    pub output: String,

    /// Delimiter of the input CSVs ('\t' is read as a tab).
    #[arg(short = 'd', long = "delimiter", default_value = ",")]
    pub delimiter: String,

    /// Field to join on.
    #[arg(short = 'j', long = "join", value_name = "FIELD", default_value = DEFAULT_JOIN_FIELD)]
    pub join: String,

    /// Comma separated list of field prefixes to include in the output.
    ///
    /// Fields are included from each file, with the file basename appended
    /// after a dot.
    #[arg(
        short = 'f',
        long = "fields",
        value_name = "FIELDS",
        value_delimiter = ',',
        default_value = "setupTime.mean,onlineTime.mean"
    )]
    pub fields: Vec<String>,

    /// Add setupComm and onlineComm columns summing
    /// communication.{setup,online}Comm{Sent,Recv}.
    #[arg(long = "add-comm")]
    pub add_comm: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
