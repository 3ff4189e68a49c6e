//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the host executing the dashboard is
//! responsible for the actual I/O. This separation keeps the core
//! deterministic and easy to test: tests drive the whole application with
//! fake transports and never open a socket.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between the core and whichever host runs it.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `BlogClient::build_*` methods. A [`Transport`] executes this
/// request against the network and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by a [`Transport`] after executing an `HttpRequest`, then
/// passed to `BlogClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The I/O seam between the deterministic core and the host.
///
/// Implementations execute one blocking round-trip per call. Non-2xx
/// statuses must be returned as data, not errors — status interpretation
/// belongs to the core's parse methods. `Err` is reserved for transport
/// failures (connection refused, DNS, interrupted body).
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
