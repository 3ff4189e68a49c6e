//! Domain DTOs for the blog API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently.
//! The mock-server crate defines its own copies; integration tests catch
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single blog post as stored by the backend.
///
/// `id` is an opaque string assigned client-side on creation (a UUID v4)
/// and never regenerated. `date` is `YYYY-MM-DD`, set once at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub image: String,
    pub description: String,
    pub content: BlogContent,
}

/// Structured body of a post: introduction, ordered sections, conclusion.
/// Section order is display order and survives edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogContent {
    pub introduction: String,
    pub sections: Vec<Section>,
    pub conclusion: String,
}

/// One title/content pair within a post's content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// Envelope returned by `GET /blogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogList {
    pub blogs: Vec<BlogPost>,
}
