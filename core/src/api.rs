//! Absorbing facade over `BlogClient` and a [`Transport`].
//!
//! # Design
//! Views never see an error value. Every method here catches build,
//! transport and parse failures at its own boundary, records a
//! human-readable message, and returns a sentinel: an empty `Vec` for
//! list, `None` for everything else. Callers branch on "did I get a
//! usable result" and must not assume backend state changed when the
//! result is absent. There is no retry and no backoff.
//!
//! Messages accumulate until the next render drains them with
//! [`BlogApi::take_messages`].

use crate::client::BlogClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::BlogPost;

/// Synchronous blog API facade. One blocking round-trip per call.
pub struct BlogApi<T> {
    client: BlogClient,
    transport: T,
    messages: Vec<String>,
}

impl<T: Transport> BlogApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: BlogClient::new(base_url),
            transport,
            messages: Vec::new(),
        }
    }

    /// Fetch all posts. Empty on failure — never an error.
    pub fn list_posts(&mut self) -> Vec<BlogPost> {
        let req = self.client.build_list_posts();
        match self.round_trip(req).and_then(|r| self.client.parse_list_posts(r)) {
            Ok(posts) => posts,
            Err(e) => {
                self.report(format!("Error fetching blogs: {e}"));
                Vec::new()
            }
        }
    }

    /// Fetch one post by id. `None` on failure or if it does not exist.
    pub fn get_post(&mut self, id: &str) -> Option<BlogPost> {
        let req = self.client.build_get_post(id);
        match self.round_trip(req).and_then(|r| self.client.parse_get_post(r)) {
            Ok(post) => Some(post),
            Err(e) => {
                self.report(format!("Error fetching blog: {e}"));
                None
            }
        }
    }

    /// Create a post. Returns the backend's payload, `None` on failure.
    pub fn create_post(&mut self, post: &BlogPost) -> Option<serde_json::Value> {
        let result = self
            .client
            .build_create_post(post)
            .and_then(|req| self.round_trip(req))
            .and_then(|r| self.client.parse_create_post(r));
        match result {
            Ok(payload) => Some(payload),
            Err(e) => {
                self.report(format!("Error creating blog: {e}"));
                None
            }
        }
    }

    /// Replace a post. Returns the backend's payload, `None` on failure.
    pub fn update_post(&mut self, id: &str, post: &BlogPost) -> Option<serde_json::Value> {
        let result = self
            .client
            .build_update_post(id, post)
            .and_then(|req| self.round_trip(req))
            .and_then(|r| self.client.parse_update_post(r));
        match result {
            Ok(payload) => Some(payload),
            Err(e) => {
                self.report(format!("Error updating blog: {e}"));
                None
            }
        }
    }

    /// Delete a post. Returns the backend's payload, `None` on failure.
    pub fn delete_post(&mut self, id: &str) -> Option<serde_json::Value> {
        let req = self.client.build_delete_post(id);
        match self.round_trip(req).and_then(|r| self.client.parse_delete_post(r)) {
            Ok(payload) => Some(payload),
            Err(e) => {
                self.report(format!("Error deleting blog: {e}"));
                None
            }
        }
    }

    /// Drain accumulated error messages, oldest first.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request)
    }

    fn report(&mut self, message: String) {
        self.messages.push(message);
    }
}
