//! The impls and functions.
//!
use std::env;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use log::*;
use regex::Regex;

use crate::cluster::ClusterAuthority;
use crate::config::CheckConfig;
use crate::policy::CheckPolicy;
use crate::Opts;

pub const ATTR_ENDPOINT_URL: &str = "CHECKVERSION_URL";
pub const ATTR_SESSION_TOKEN: &str = "CHECKVERSION_SESSION";
pub const ATTR_CHECK_SERVER: &str = "CHECKVERSION_SERVER";
pub const ATTR_CHECK_SERVERS: &str = "CHECKVERSION_SERVERS";
pub const ATTR_LOCAL_SERVER: &str = "CHECKVERSION_LOCAL_SERVER";
pub const ATTR_CHECK_INTERVAL: &str = "CHECKVERSION_INTERVAL";
pub const ATTR_LAST_ATTEMPT: &str = "CHECKVERSION_LAST_ATTEMPT";

/// Look up an attribute by name. An empty value counts as absent.
pub fn get_attr(
    name: &str,
) -> Option<String>
{
    env::var(name).ok().filter(|value| !value.is_empty())
}

impl CheckConfig {
    /// Read and parse the configuration for this invocation.
    pub fn read(
        options: &Opts,
    ) -> Result<CheckConfig>
    {
        let endpoint_url = match &options.url {
            Some(url) => {
                info!("url argument set: using: {}", url);
                url.clone()
            },
            None => {
                get_attr(ATTR_ENDPOINT_URL)
                    .with_context(|| format!("required attribute {} not set", ATTR_ENDPOINT_URL))?
            },
        };
        let session_token = get_attr(ATTR_SESSION_TOKEN)
            .with_context(|| format!("required attribute {} not set", ATTR_SESSION_TOKEN))?;

        let interval_secs = match get_attr(ATTR_CHECK_INTERVAL) {
            None => 0,
            Some(value) => {
                parse_interval_secs(&value)
                    .with_context(|| format!("attribute {} not parseable", ATTR_CHECK_INTERVAL))?
            },
        };
        let last_attempt = match get_attr(ATTR_LAST_ATTEMPT) {
            None => None,
            Some(value) => {
                Some(parse_extended_time(&value)
                    .with_context(|| format!("attribute {} not parseable", ATTR_LAST_ATTEMPT))?)
            },
        };
        let inventory: Vec<String> = get_attr(ATTR_CHECK_SERVERS)
            .map(|value| value.split(',')
                .map(|server| server.trim().to_string())
                .filter(|server| !server.is_empty())
                .collect())
            .unwrap_or_default();

        Ok(CheckConfig {
            endpoint_url,
            session_token,
            timeout_secs: options.timeout,
            authority: ClusterAuthority {
                designated_server_id: get_attr(ATTR_CHECK_SERVER),
                local_server_id: get_attr(ATTR_LOCAL_SERVER),
                inventory,
            },
            policy: CheckPolicy { interval_secs, last_attempt },
        })
    }
}

/// Parse a check interval duration string into whole seconds.
///
/// The grammar is a number with an optional `ms`, `s`, `m`, `h` or `d`
/// suffix; no suffix means seconds. `ms` truncates to whole seconds.
pub fn parse_interval_secs(
    interval: &str,
) -> Result<i64>
{
    let expression = Regex::new(r"^(\d+)(ms|s|m|h|d)?$").unwrap();
    let captures = expression.captures(interval.trim())
        .with_context(|| format!("invalid interval: {}", interval))?;
    let amount: i64 = captures[1].parse()
        .with_context(|| format!("invalid interval amount: {}", interval))?;
    let interval_secs = match captures.get(2).map(|suffix| suffix.as_str()) {
        Some("ms") => amount / 1000,
        Some("m") => amount * 60,
        Some("h") => amount * 3600,
        Some("d") => amount * 86400,
        // plain seconds, with or without suffix.
        _ => amount,
    };
    Ok(interval_secs)
}

/// Parse a last-attempt timestamp.
///
/// Accepts RFC 3339, or LDAP generalized time (`YYYYMMDDhhmmss[.fff]Z`,
/// interpreted as UTC). Sub-second precision is discarded either way, the
/// policy clock only compares whole seconds.
pub fn parse_extended_time(
    value: &str,
) -> Result<DateTime<Local>>
{
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Local));
    }
    let trimmed = value.trim_end_matches('Z');
    let whole_seconds = trimmed.split('.').next().unwrap_or(trimmed);
    let naive = NaiveDateTime::parse_from_str(whole_seconds, "%Y%m%d%H%M%S")
        .with_context(|| format!("invalid timestamp: {}", value))?;
    Ok(Local.from_utc_datetime(&naive))
}
