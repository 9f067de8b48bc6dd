//! The checkversion library.
//!
//! checkversion talks to the administrative service of a deployment to
//! either request a new version check, or to report the results of the
//! last completed check.
//!
//! Whether a check request is actually sent is decided locally:
//! - the cluster configuration can designate a single server that is
//!   allowed to run checks ([cluster]),
//! - the check interval and last attempt timestamp decide whether a new
//!   check is due ([policy]).
//!
//! The remote exchange itself lives in [protocol], and [dispatch] ties
//! the decision logic and the exchange together into one terminal
//! [dispatch::Outcome] per invocation.
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod policy;
pub mod cluster;
pub mod protocol;
pub mod dispatch;

use anyhow::Result;
use chrono::Local;
use clap::{ArgGroup, Parser};

use crate::config::CheckConfig;
use crate::dispatch::{CheckMode, Outcome};
use crate::protocol::HttpCheckClient;

/// Whether to allow invalid certificates on the administrative endpoint.
pub const ACCEPT_INVALID_CERTS: bool = true;
/// The default request timeout in seconds.
pub const DEFAULT_TIMEOUT: &str = "60";

/// The commandline options.
///
/// Exactly one of the mode flags must be given.
#[derive(Debug, Parser)]
#[command(name = "checkversion", version, about = "version check scheduling and reporting utility")]
#[command(group(ArgGroup::new("mode").required(true).args(["check", "manual", "result"])))]
pub struct Opts {
    /// Initiate a version check request (skipped when the check interval is disabled).
    #[arg(short = 'c', long)]
    pub check: bool,
    /// Initiate a version check request regardless of a disabled check interval.
    #[arg(short = 'm', long)]
    pub manual: bool,
    /// Show the results of the last version check.
    #[arg(short = 'r', long)]
    pub result: bool,
    /// The URL of the administrative service endpoint (overrides CHECKVERSION_URL).
    #[arg(short = 'u', long)]
    pub url: Option<String>,
    /// The request timeout in seconds.
    #[arg(short = 't', long, default_value = DEFAULT_TIMEOUT)]
    pub timeout: u64,
}

/// Read the configuration and run the requested mode to its terminal outcome.
pub fn run(options: &Opts) -> Result<Outcome> {
    let config = CheckConfig::read(options)?;
    let client = HttpCheckClient::new(&config.endpoint_url, &config.session_token, config.timeout_secs)?;

    if options.result {
        dispatch::run_status(&client)
    } else {
        let mode = if options.manual { CheckMode::Manual } else { CheckMode::Automatic };
        dispatch::run_check(&config.authority, &config.policy, &client, mode, Local::now())
    }
}
