//! Admin post domain entity
//!
//! The admin dashboard's view of a blog post, plus the query types used by the
//! post management table (filter, search, sort, pagination).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Unique identifier for an admin post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminPostId(pub Uuid);

impl AdminPostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AdminPostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AdminPostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AdminPostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post row in the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminPost {
    pub id: AdminPostId,
    pub title: String,
    pub slug: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Publication status filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

impl StatusFilter {
    pub fn matches(&self, post: &AdminPost) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Published => post.published,
            StatusFilter::Draft => !post.published,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Published => write!(f, "published"),
            StatusFilter::Draft => write!(f, "draft"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "published" => Ok(StatusFilter::Published),
            "draft" => Ok(StatusFilter::Draft),
            _ => Err(format!("Unknown status filter: {}", s)),
        }
    }
}

/// Sortable columns of the post table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Title,
    Slug,
    Published,
    #[default]
    CreatedAt,
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortColumn::Title => write!(f, "title"),
            SortColumn::Slug => write!(f, "slug"),
            SortColumn::Published => write!(f, "published"),
            SortColumn::CreatedAt => write!(f, "created_at"),
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortColumn::Title),
            "slug" => Ok(SortColumn::Slug),
            "published" => Ok(SortColumn::Published),
            "created_at" => Ok(SortColumn::CreatedAt),
            _ => Err(format!("Unknown sort column: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Query over the admin post table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    /// Case-insensitive substring of the title
    pub search: Option<String>,
    pub status: StatusFilter,
    pub sort: SortColumn,
    pub direction: SortDirection,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: StatusFilter::All,
            sort: SortColumn::CreatedAt,
            direction: SortDirection::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PostQuery {
    /// Whether a post passes the status and search filters
    pub fn matches(&self, post: &AdminPost) -> bool {
        if !self.status.matches(post) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => post
                .title
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        }
    }

    /// Order two posts by the selected column and direction
    pub fn compare(&self, a: &AdminPost, b: &AdminPost) -> std::cmp::Ordering {
        let ordering = match self.sort {
            SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortColumn::Slug => a.slug.cmp(&b.slug),
            SortColumn::Published => a.published.cmp(&b.published),
            SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// One page of admin posts
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub items: Vec<AdminPost>,
    /// Matching rows before pagination
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}
