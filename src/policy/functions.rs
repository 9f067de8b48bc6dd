//! The functions.
//!
use chrono::{DateTime, Local};
use log::*;

use crate::policy::{CheckPolicy, DueDecision};

/// Decide whether a check is due at `now`.
///
/// This is a pure function: it performs no IO and reads no configuration.
/// Elapsed time is computed as `now.timestamp() - last.timestamp()`, which
/// truncates both timestamps to whole seconds before subtracting.
pub fn is_check_due(
    policy: &CheckPolicy,
    now: DateTime<Local>,
) -> DueDecision
{
    if policy.interval_secs <= 0 {
        debug!("check interval disabled");
        return DueDecision::Disabled;
    }
    let last_attempt = match policy.last_attempt {
        // never checked before
        None => return DueDecision::Due,
        Some(last_attempt) => last_attempt,
    };
    let elapsed_secs = now.timestamp() - last_attempt.timestamp();
    debug!("elapsed: {}s, interval: {}s", elapsed_secs, policy.interval_secs);
    if elapsed_secs >= policy.interval_secs {
        DueDecision::Due
    } else {
        DueDecision::TooEarly { seconds_remaining: policy.interval_secs - elapsed_secs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64, nanos: u32) -> DateTime<Local> {
        Local.timestamp_opt(secs, nanos).unwrap()
    }

    #[test]
    fn unit_disabled_interval_zero() {
        let policy = CheckPolicy { interval_secs: 0, last_attempt: Some(at(1_000_000, 0)) };
        assert_eq!(is_check_due(&policy, at(2_000_000, 0)), DueDecision::Disabled);
    }

    #[test]
    fn unit_disabled_wins_over_elapsed_time() {
        // no amount of elapsed time makes a disabled policy due.
        let policy = CheckPolicy { interval_secs: 0, last_attempt: None };
        assert_eq!(is_check_due(&policy, at(2_000_000, 0)), DueDecision::Disabled);
    }

    #[test]
    fn unit_due_when_never_attempted() {
        let policy = CheckPolicy { interval_secs: 3600, last_attempt: None };
        assert_eq!(is_check_due(&policy, at(1_000_000, 0)), DueDecision::Due);
    }

    #[test]
    fn unit_due_when_interval_elapsed() {
        // interval 1h, last attempt 2h ago.
        let policy = CheckPolicy { interval_secs: 3600, last_attempt: Some(at(1_000_000, 0)) };
        assert_eq!(is_check_due(&policy, at(1_000_000 + 7200, 0)), DueDecision::Due);
    }

    #[test]
    fn unit_due_at_exact_interval() {
        let policy = CheckPolicy { interval_secs: 3600, last_attempt: Some(at(1_000_000, 0)) };
        assert_eq!(is_check_due(&policy, at(1_000_000 + 3600, 0)), DueDecision::Due);
    }

    #[test]
    fn unit_too_early_within_interval() {
        // interval 1h, last attempt 10m ago.
        let policy = CheckPolicy { interval_secs: 3600, last_attempt: Some(at(1_000_000, 0)) };
        assert_eq!(
            is_check_due(&policy, at(1_000_000 + 600, 0)),
            DueDecision::TooEarly { seconds_remaining: 3000 }
        );
    }

    #[test]
    fn unit_subsecond_precision_discarded() {
        // last attempt at .999, now at interval boundary .000: both truncate
        // to whole seconds, so exactly one interval has elapsed.
        let policy = CheckPolicy { interval_secs: 60, last_attempt: Some(at(1_000_000, 999_000_000)) };
        assert_eq!(is_check_due(&policy, at(1_000_060, 0)), DueDecision::Due);
    }
}
