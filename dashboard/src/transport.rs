//! Blocking ureq transport — the host side of the host-does-IO split.
//!
//! Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
//! responses are returned as data rather than `Err`, letting the core
//! client handle status interpretation. No timeout is configured, matching
//! the backend contract as deployed: a hung call blocks the interface.

use blog_core::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use blog_core::ApiError;
use tracing::debug;

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = ?req.method, path = %req.path, "executing request");
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
