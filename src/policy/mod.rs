//! Module for the check schedule decision.
//!
//! The policy clock decides whether a new version check is due, based on
//! the configured check interval and the timestamp of the last attempt:
//! - interval `0` or absent: checking is disabled.
//! - no last attempt recorded: a check is always due.
//! - otherwise a check is due once a whole interval has elapsed.
//!
//! The comparison is done in whole seconds, sub-second precision of both
//! timestamps is discarded.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
