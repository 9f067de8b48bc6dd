//! The structs
//!
/// How the check was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Scheduled invocation: a disabled check interval skips the check.
    Automatic,
    /// Operator invocation: a disabled check interval is treated as due.
    /// The authority check and the cooldown still apply.
    Manual,
}

/// The terminal state of an invocation.
///
/// All of these map to a zero exit code; errors propagate separately.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A check request was sent and acknowledged.
    CheckSent,
    /// Automatic checking is disabled by configuration.
    SkippedDisabled,
    /// The last check ran too recently.
    SkippedTooEarly { seconds_remaining: i64 },
    /// Another server is designated to run checks.
    SkippedUnauthorized,
    /// The last check results were fetched and rendered.
    Rendered { update_count: usize },
}
