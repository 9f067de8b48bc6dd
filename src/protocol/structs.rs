//! The structs
//!
use thiserror::Error;

/// The two actions the administrative service understands.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckAction {
    /// Initiate a new version check server side.
    Check,
    /// Fetch the results of the last completed check.
    Status,
}

/// The request body. Built fresh for every invocation, never persisted.
#[derive(Serialize, Debug)]
pub struct CheckRequest<'a> {
    pub action: CheckAction,
    pub session: &'a str,
}

/// A single available-update notice, in the order the server returned it.
///
/// ```text
/// {
///     "type": "minor",
///     "critical": false,
///     "version": "10.0.1",
///     "updateURL": "https://updates.example.com/10.0.1"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    /// The key 'type' is a rust keyword, in this way it's renamed to 'update_type'.
    #[serde(rename = "type")]
    pub update_type: String,
    pub critical: bool,
    pub version: String,
    #[serde(rename = "updateURL")]
    pub update_url: String,
}

/// An application-level fault reported by the server.
#[derive(Serialize, Deserialize, Debug)]
pub struct Fault {
    pub code: String,
    pub message: String,
}

/// The reply object as found on the wire.
///
/// The variants are distinguished by their property name, so the reply
/// decodes without type-unsafe casting at the call site.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum WireReply {
    Fault { fault: Fault },
    Updates { updates: Vec<UpdateRecord> },
    Ack { status: String },
}

/// The decoded reply handed to the dispatch layer.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckResponse {
    /// The server acknowledged a check request.
    Ack,
    /// The update records of the last completed check, server order preserved.
    Updates(Vec<UpdateRecord>),
}

/// The error taxonomy of the exchange.
///
/// The three categories must stay distinguishable for the caller: the
/// dispatch layer has no recovery strategy and reports them as is.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The endpoint could not be reached, or the request timed out.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server executed the request but returned a fault.
    #[error("protocol fault {code}: {message}")]
    Fault { code: String, message: String },
    /// The reply body does not match the expected schema.
    #[error("decode failure: {0}")]
    Decode(String),
}
