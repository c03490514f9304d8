use serde_json::Value;
use std::time::Duration;
use tracing::warn;

use crate::error::{Failure, Result};

/// Raw HTTP outcome. Any status is returned here; only network-level
/// failures become an error.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One blocking JSON POST with a bearer token.
pub trait Transport {
    fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<HttpReply>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Without `timeout`, ureq's defaults apply.
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
        }
    }
}

impl Transport for UreqTransport {
    fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<HttpReply> {
        // send_json sets Content-Type: application/json
        let result = self
            .agent
            .post(url)
            .set("Authorization", &format!("Bearer {bearer}"))
            .send_json(body);

        let resp = match result {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(t)) => {
                warn!(error = %t, "transport failure");
                return Err(Failure::Connection(t.to_string()));
            }
        };

        let status = resp.status();
        let body = resp
            .into_string()
            .map_err(|e| Failure::Connection(format!("failed to read response body: {e}")))?;
        Ok(HttpReply { status, body })
    }
}
