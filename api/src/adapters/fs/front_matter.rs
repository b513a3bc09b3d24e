//! Front-matter parsing
//!
//! Content files start with a YAML block fenced by `---` lines, followed by the
//! MDX body. Files without a fence are all body.

use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::DomainError;

const FENCE: &str = "---";

/// Front matter of a blog post file
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub social_image: Option<String>,
    #[serde(default)]
    pub linkedin_post: bool,
    pub published: Option<bool>,
}

/// Front matter of a project file
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub date: Option<String>,
}

/// Split a file into its raw YAML header and body
pub fn split(source: &str) -> (Option<&str>, &str) {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(rest) = strip_fence_line(source) else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(header), body);
        }
        offset += line.len();
    }

    // Opening fence without a closing one is not front matter
    (None, source)
}

fn strip_fence_line(source: &str) -> Option<&str> {
    let first_line_end = source.find('\n')?;
    if source[..first_line_end].trim_end() == FENCE {
        Some(&source[first_line_end + 1..])
    } else {
        None
    }
}

/// Parse a file into typed front matter and its body
pub fn parse<T>(source: &str) -> Result<(T, &str), DomainError>
where
    T: DeserializeOwned + Default,
{
    match split(source) {
        (Some(header), body) if !header.trim().is_empty() => {
            let meta = serde_yaml::from_str(header)
                .map_err(|e| DomainError::Content(format!("Invalid front matter: {}", e)))?;
            Ok((meta, body))
        }
        (_, body) => Ok((T::default(), body)),
    }
}

/// Parse a front-matter date (`YYYY-MM-DD` or RFC 3339)
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
}
