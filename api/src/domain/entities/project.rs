//! Project domain entity
//!
//! Portfolio projects shown on the projects page.

use chrono::NaiveDate;
use serde::Serialize;

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub cover_image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub date: Option<NaiveDate>,
    /// Long-form Markdown content for the detail view
    pub content: Option<String>,
}

impl Project {
    /// Tag match ignoring case ("rust" matches "Rust")
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
