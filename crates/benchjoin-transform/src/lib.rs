//! Benchmark table transformation.
//!
//! Turns the per-file tables of one suffix group into a single joined table:
//!
//! - **Communication totals**: optional `setupComm`/`onlineComm` columns summing
//!   sent and received bytes with exact decimal arithmetic
//! - **Namespacing**: every column except the join field and the totals is
//!   renamed to `{column}.{basename}`
//! - **Fold-join**: inner equi-join on the join field, left to right in
//!   basename order
//! - **Selection**: join field, totals, then every column matching a requested
//!   field prefix
//!
//! # Example
//!
//! ```ignore
//! use benchjoin_transform::{JoinOptions, SourceTable, join_tables, select_output_columns};
//!
//! let options = JoinOptions::default().with_add_comm(true);
//! let joined = join_tables(tables, &options)?;
//! let output = select_output_columns(&joined, &options)?;
//! ```

mod comm;
mod error;
mod join;
mod rename;
mod select;
mod types;

pub use comm::{ONLINE_COMM, SETUP_COMM, add_comm_columns};
pub use error::{Result, TransformError};
pub use join::{JOIN_KEY_COLUMN, join_tables, prepare_table};
pub use rename::{namespace_columns, namespaced_name};
pub use select::{output_columns, select_output_columns};
pub use types::{DEFAULT_FIELDS, DEFAULT_JOIN_FIELD, JoinOptions, SourceTable};
