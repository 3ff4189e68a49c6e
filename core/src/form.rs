//! The blog form: editable fields staged in memory until submission.
//!
//! # Design
//! A `BlogForm` is seeded either blank (create mode) or from an existing
//! post (edit mode, which also captures the post's id and date so they
//! survive the round-trip unchanged). `submit` presence-validates every
//! required field and either assembles a `BlogPost` candidate or returns a
//! single aggregate error naming all missing fields, leaving the form
//! untouched for correction. The form never talks to the API — a view
//! decides what to do with the candidate.
//!
//! The section list is resizable with a minimum of one entry. Growing
//! appends blank sections; shrinking truncates and the dropped values are
//! gone for good (growing again yields fresh blanks, never resurrected
//! text).

use std::fmt;

use uuid::Uuid;

use crate::types::{BlogContent, BlogPost, Section};

/// One editable title/content pair in the sections sub-form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionForm {
    pub title: String,
    pub content: String,
}

/// Staged, not-yet-validated blog fields.
#[derive(Debug, Clone)]
pub struct BlogForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub introduction: String,
    pub sections: Vec<SectionForm>,
    pub conclusion: String,
    /// `(id, date)` of the post being edited; `None` in create mode.
    existing: Option<(String, String)>,
}

impl BlogForm {
    /// Blank create-mode form with a single empty section.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            image: String::new(),
            introduction: String::new(),
            sections: vec![SectionForm::default()],
            conclusion: String::new(),
            existing: None,
        }
    }

    /// Edit-mode form seeded from an existing post. The post's id and date
    /// are preserved and re-emitted verbatim by `submit`.
    pub fn from_post(post: &BlogPost) -> Self {
        let mut sections: Vec<SectionForm> = post
            .content
            .sections
            .iter()
            .map(|s| SectionForm {
                title: s.title.clone(),
                content: s.content.clone(),
            })
            .collect();
        if sections.is_empty() {
            sections.push(SectionForm::default());
        }
        Self {
            title: post.title.clone(),
            category: post.category.clone(),
            description: post.description.clone(),
            image: post.image.clone(),
            introduction: post.content.introduction.clone(),
            sections,
            conclusion: post.content.conclusion.clone(),
            existing: Some((post.id.clone(), post.date.clone())),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Resize the sections sub-form, clamped to a minimum of 1. Existing
    /// values are preserved by index; new slots start blank.
    pub fn set_section_count(&mut self, count: usize) {
        let count = count.max(1);
        self.sections.resize(count, SectionForm::default());
    }

    /// Validate and assemble a `BlogPost` candidate.
    ///
    /// `today` is the `YYYY-MM-DD` date used when creating; the caller
    /// supplies it so this stays deterministic under test. In edit mode the
    /// original id and date win regardless of `today`.
    pub fn submit(&self, today: &str) -> Result<BlogPost, FormError> {
        let mut missing = Vec::new();
        require(&self.title, "Title", &mut missing);
        require(&self.category, "Category", &mut missing);
        require(&self.description, "Description", &mut missing);
        require(&self.image, "Image URL", &mut missing);
        require(&self.introduction, "Introduction", &mut missing);
        for (i, section) in self.sections.iter().enumerate() {
            require(&section.title, &format!("Section Title {}", i + 1), &mut missing);
            require(&section.content, &format!("Section Content {}", i + 1), &mut missing);
        }
        require(&self.conclusion, "Conclusion", &mut missing);
        if !missing.is_empty() {
            return Err(FormError { missing });
        }

        let (id, date) = match &self.existing {
            Some((id, date)) => (id.clone(), date.clone()),
            None => (Uuid::new_v4().to_string(), today.to_string()),
        };

        Ok(BlogPost {
            id,
            title: self.title.clone(),
            category: self.category.clone(),
            date,
            image: self.image.clone(),
            description: self.description.clone(),
            content: BlogContent {
                introduction: self.introduction.clone(),
                sections: self
                    .sections
                    .iter()
                    .map(|s| Section {
                        title: s.title.clone(),
                        content: s.content.clone(),
                    })
                    .collect(),
                conclusion: self.conclusion.clone(),
            },
        })
    }
}

impl Default for BlogForm {
    fn default() -> Self {
        Self::new()
    }
}

fn require(value: &str, label: &str, missing: &mut Vec<String>) {
    if value.is_empty() {
        missing.push(label.to_string());
    }
}

/// Aggregate validation failure: every required field that was empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub missing: Vec<String>,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Please fill in all required fields: {}",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for FormError {}
