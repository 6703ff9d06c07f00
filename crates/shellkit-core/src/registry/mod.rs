//! Argument registry
//!
//! The registry owns every registered [`Argument`](crate::argument::Argument)
//! keyed by name and keeps the widest rendered signature so help listings
//! line up in one column.

mod types;

pub use types::{DEFAULT_HELP_MARGIN, Registry};
