//! CSV reading utilities.

mod reader;

pub use reader::{delimiter_byte, read_csv_table};
