//! The structs
//!
use chrono::{DateTime, Local};

/// The check schedule policy as read from the configuration store.
///
/// An interval of zero (or a negative value) means automatic checking is
/// disabled. `last_attempt` is absent when no check was ever attempted.
#[derive(Debug, Default)]
pub struct CheckPolicy {
    pub interval_secs: i64,
    pub last_attempt: Option<DateTime<Local>>,
}

/// The decision of the policy clock.
#[derive(Debug, PartialEq, Eq)]
pub enum DueDecision {
    /// Automatic checking is disabled by configuration.
    Disabled,
    /// A check ran recently, the next one is due in `seconds_remaining`.
    TooEarly { seconds_remaining: i64 },
    /// A check is due.
    Due,
}
