//! Blog post domain entity
//!
//! Posts are authored as MDX files with a front-matter header. The body is kept
//! verbatim; rendering happens in the `render` module.

use chrono::NaiveDate;
use serde::Serialize;

/// Average reading speed used for reading time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// A blog post with its full body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub social_image: Option<String>,
    pub linkedin_post: bool,
    pub published: bool,
    /// Estimated reading time in minutes
    pub reading_time: u32,
    pub content: String,
}

impl Post {
    /// List view of the post (everything except the body)
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.date,
            excerpt: self.excerpt.clone(),
            tags: self.tags.clone(),
            social_image: self.social_image.clone(),
            linkedin_post: self.linkedin_post,
            published: self.published,
            reading_time: self.reading_time,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A post without its body, as shown in listings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub social_image: Option<String>,
    pub linkedin_post: bool,
    pub published: bool,
    pub reading_time: u32,
}

/// Estimate reading time in whole minutes, rounded up, never below one
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
