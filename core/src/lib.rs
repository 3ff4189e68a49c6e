//! Synchronous client core for the blog dashboard.
//!
//! # Overview
//! Everything the dashboard does — listing, creating, editing and deleting
//! blog posts against a remote REST backend — is modeled here without any
//! I/O (host-does-IO pattern). The host binary supplies a [`Transport`]
//! that executes the HTTP round-trips, making the core fully deterministic
//! and testable.
//!
//! # Design
//! - `BlogClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so the I/O boundary is explicit.
//! - `BlogApi` is the absorbing facade: it folds every failure into a
//!   user-visible message and a sentinel result; views never see errors.
//! - `BlogForm` stages and presence-validates a post candidate; it never
//!   calls the API.
//! - `app` holds the single `AppState` value and the explicit per-view
//!   state machines (list with a global pending-delete slot, create with a
//!   yes/no staged candidate, edit with immediate update).
//! - DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod types;

pub use api::BlogApi;
pub use app::{AppState, Event, Page};
pub use client::BlogClient;
pub use error::ApiError;
pub use form::{BlogForm, FormError, SectionForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{BlogContent, BlogList, BlogPost, Section};
