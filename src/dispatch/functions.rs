//! The impls and functions.
//!
use anyhow::Result;
use chrono::{DateTime, Local};
use colored::Colorize;
use log::*;

use crate::cluster::{self, ClusterAuthority};
use crate::dispatch::{CheckMode, Outcome};
use crate::policy::{self, CheckPolicy, DueDecision};
use crate::protocol::{CheckAction, CheckTransport, CheckResponse, UpdateRecord};

/// Run the check path: authority check, policy clock, then at most one
/// `check` request.
pub fn run_check(
    authority: &ClusterAuthority,
    check_policy: &CheckPolicy,
    client: &impl CheckTransport,
    mode: CheckMode,
    now: DateTime<Local>,
) -> Result<Outcome>
{
    if !cluster::is_authorized(authority) {
        info!("not the designated check server, skipping");
        println!("Wrong server");
        return Ok(Outcome::SkippedUnauthorized);
    }

    let decision = match policy::is_check_due(check_policy, now) {
        // a manual check ignores the disabled interval.
        DueDecision::Disabled if mode == CheckMode::Manual => DueDecision::Due,
        decision => decision,
    };
    match decision {
        DueDecision::Disabled => {
            println!("Automatic updates are disabled");
            Ok(Outcome::SkippedDisabled)
        },
        DueDecision::TooEarly { seconds_remaining } => {
            println!("Too early, next check due in {} seconds", seconds_remaining);
            Ok(Outcome::SkippedTooEarly { seconds_remaining })
        },
        DueDecision::Due => {
            match client.send_check(CheckAction::Check) {
                Ok(_) => {
                    info!("check request acknowledged");
                    println!("Version check request sent");
                    Ok(Outcome::CheckSent)
                },
                Err(error) => {
                    error!("version check request failed: {}", error);
                    Err(error.into())
                },
            }
        },
    }
}

/// Run the status path: fetch the last check results and render one line
/// per update record in server order.
pub fn run_status(
    client: &impl CheckTransport,
) -> Result<Outcome>
{
    let updates = match client.send_check(CheckAction::Status) {
        Ok(CheckResponse::Updates(updates)) => updates,
        // a status fetch with no completed check to report.
        Ok(CheckResponse::Ack) => Vec::new(),
        Err(error) => {
            error!("version check status fetch failed: {}", error);
            return Err(error.into());
        },
    };
    for update in &updates {
        let line = render_update(update);
        if update.critical {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }
    Ok(Outcome::Rendered { update_count: updates.len() })
}

/// Render a single update record.
pub fn render_update(
    update: &UpdateRecord,
) -> String
{
    let critical = if update.critical { "critical" } else { "not critical" };
    format!("Found a {} update. Update is {} . Update version: {}. For more info visit: {}",
            update.update_type,
            critical,
            update.version,
            update.update_url
    )
}
