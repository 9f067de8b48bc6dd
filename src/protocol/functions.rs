//! The impls and functions.
//!
use std::time::Duration;
use log::*;

use crate::protocol::{CheckAction, CheckError, CheckRequest, CheckResponse, WireReply};
use crate::ACCEPT_INVALID_CERTS;

/// The seam between the dispatch layer and the wire.
///
/// Production uses [HttpCheckClient]; tests substitute a recording mock to
/// prove which invocations reach the network.
pub trait CheckTransport {
    fn send_check(&self, action: CheckAction) -> Result<CheckResponse, CheckError>;
}

/// The blocking http client for the administrative endpoint.
pub struct HttpCheckClient {
    endpoint_url: String,
    session_token: String,
    client: reqwest::blocking::Client,
}

impl HttpCheckClient {
    /// Build a client with a bounded request timeout.
    pub fn new(
        endpoint_url: &str,
        session_token: &str,
        timeout_secs: u64,
    ) -> Result<Self, CheckError>
    {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(ACCEPT_INVALID_CERTS)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(CheckError::Transport)?;
        Ok(Self {
            endpoint_url: endpoint_url.to_string(),
            session_token: session_token.to_string(),
            client,
        })
    }
}

impl CheckTransport for HttpCheckClient {
    fn send_check(
        &self,
        action: CheckAction,
    ) -> Result<CheckResponse, CheckError>
    {
        let request = CheckRequest { action, session: &self.session_token };
        let body = serde_json::to_string(&request)
            .map_err(|e| CheckError::Decode(e.to_string()))?;

        debug!("sending {:?} request to {}", action, self.endpoint_url);
        let reply = self.client
            .post(&self.endpoint_url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .map_err(CheckError::Transport)?;

        let status = reply.status();
        let reply_body = reply.text().map_err(CheckError::Transport)?;
        if !status.is_success() {
            debug!("non success response: {} = {}", self.endpoint_url, status);
            return Err(CheckError::Fault { code: status.as_u16().to_string(), message: reply_body });
        }
        debug!("success response: {} = {}", self.endpoint_url, status);
        parse_reply(&reply_body, action)
    }
}

// This function parses the reply body.
// This is a separate function in order to allow tests to use it.
pub fn parse_reply(
    reply_body: &str,
    action: CheckAction,
) -> Result<CheckResponse, CheckError>
{
    let reply: WireReply = serde_json::from_str(reply_body)
        .map_err(|e| CheckError::Decode(e.to_string()))?;
    match reply {
        WireReply::Fault { fault } => {
            Err(CheckError::Fault { code: fault.code, message: fault.message })
        },
        WireReply::Updates { updates } => Ok(CheckResponse::Updates(updates)),
        WireReply::Ack { status } => {
            match action {
                // the check action runs asynchronously server side, an
                // acknowledgement is all the reply needs to carry.
                CheckAction::Check => {
                    debug!("check acknowledged: {}", status);
                    Ok(CheckResponse::Ack)
                },
                // the status action promises zero or more update records,
                // "no updates" is an empty list, not a missing one.
                CheckAction::Status => {
                    Err(CheckError::Decode("status reply did not contain updates".to_string()))
                },
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_encode_check_request() {
        let request = CheckRequest { action: CheckAction::Check, session: "token-1" };
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, r#"{"action":"check","session":"token-1"}"#);
    }

    #[test]
    fn unit_encode_status_request() {
        let request = CheckRequest { action: CheckAction::Status, session: "token-1" };
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, r#"{"action":"status","session":"token-1"}"#);
    }

    #[test]
    fn unit_parse_updates_preserves_order_and_fields() {
        // This is what the status action returns with two pending updates.
        let reply = r#"
        {
            "updates": [
                { "type": "major", "critical": true, "version": "10.1.0", "updateURL": "https://updates.example.com/10.1.0" },
                { "type": "minor", "critical": false, "version": "10.0.2", "updateURL": "https://updates.example.com/10.0.2" }
            ]
        }
"#;
        let result = parse_reply(reply, CheckAction::Status).unwrap();
        let updates = match result {
            CheckResponse::Updates(updates) => updates,
            other => panic!("expected updates, got {:?}", other),
        };
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].update_type, "major");
        assert!(updates[0].critical);
        assert_eq!(updates[0].version, "10.1.0");
        assert_eq!(updates[0].update_url, "https://updates.example.com/10.1.0");
        assert_eq!(updates[1].update_type, "minor");
        assert!(!updates[1].critical);
        assert_eq!(updates[1].version, "10.0.2");
        assert_eq!(updates[1].update_url, "https://updates.example.com/10.0.2");
    }

    #[test]
    fn unit_parse_empty_updates() {
        let reply = r#"{"updates":[]}"#;
        let result = parse_reply(reply, CheckAction::Status).unwrap();
        assert_eq!(result, CheckResponse::Updates(vec![]));
    }

    #[test]
    fn unit_parse_ack_for_check() {
        // This is what the check action returns: acknowledgement only.
        let reply = r#"{"status":"OK"}"#;
        let result = parse_reply(reply, CheckAction::Check).unwrap();
        assert_eq!(result, CheckResponse::Ack);
    }

    #[test]
    fn unit_parse_ack_for_status_is_decode_failure() {
        let reply = r#"{"status":"OK"}"#;
        let result = parse_reply(reply, CheckAction::Status);
        assert!(matches!(result, Err(CheckError::Decode(_))));
    }

    #[test]
    fn unit_parse_fault() {
        let reply = r#"{"fault":{"code":"service.AUTH_EXPIRED","message":"session expired"}}"#;
        let result = parse_reply(reply, CheckAction::Check);
        match result {
            Err(CheckError::Fault { code, message }) => {
                assert_eq!(code, "service.AUTH_EXPIRED");
                assert_eq!(message, "session expired");
            },
            other => panic!("expected fault, got {:?}", other),
        }
    }

    #[test]
    fn unit_parse_garbage_is_decode_failure() {
        let reply = r#"
Error 404: Not Found
File not found
"#;
        let result = parse_reply(reply, CheckAction::Status);
        assert!(matches!(result, Err(CheckError::Decode(_))));
    }
}
