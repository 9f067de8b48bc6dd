//! Module for the version check request/response exchange.
//!
//! The administrative service accepts a single JSON request carrying the
//! action and the authenticated session token:
//!
//! ```text
//! {"action":"check","session":"<token>"}
//! ```
//!
//! The reply is a single tagged object, one of:
//! - `{"fault":{"code":"...","message":"..."}}`: the request was executed
//!   but failed on the server (bad session, malformed request).
//! - `{"updates":[...]}`: the result list of the last completed check,
//!   returned for the `status` action.
//! - `{"status":"..."}`: acknowledgement only, returned for the `check`
//!   action, which runs the actual check asynchronously server side.
//!
//! Transport failures, server faults and undecodable replies surface as
//! distinct [CheckError] variants. Nothing is retried here.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
