//! The structs
//!
use crate::cluster::ClusterAuthority;
use crate::policy::CheckPolicy;

/// The full configuration of one invocation, read once at startup.
#[derive(Debug)]
pub struct CheckConfig {
    pub endpoint_url: String,
    pub session_token: String,
    pub timeout_secs: u64,
    pub authority: ClusterAuthority,
    pub policy: CheckPolicy,
}
