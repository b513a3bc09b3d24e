//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{AdminPost, AdminPostId, ContactMessage, Post, Project};

fn date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Create a published post with a given slug and `YYYY-MM-DD` date
pub fn test_post_dated(slug: &str, day: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: format!("Post {}", slug),
        date: date(day),
        excerpt: format!("About {}", slug),
        tags: vec![],
        social_image: None,
        linkedin_post: false,
        published: true,
        reading_time: 1,
        content: format!("Content of {}", slug),
    }
}

/// Create a non-featured project with a given slug and `YYYY-MM-DD` date
pub fn test_project_dated(slug: &str, day: &str) -> Project {
    Project {
        id: slug.to_string(),
        title: format!("Project {}", slug),
        slug: slug.to_string(),
        description: format!("Description of {}", slug),
        cover_image: format!("/images/projects/{}.jpg", slug),
        images: vec![],
        tags: vec![],
        demo_url: None,
        github_url: None,
        featured: false,
        date: date(day),
        content: None,
    }
}

/// Create a valid contact message
pub fn test_contact_message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "I would like to talk about a project.".to_string(),
    }
}

/// Create an admin post row created now
pub fn test_admin_post(title: &str, published: bool) -> AdminPost {
    AdminPost {
        id: AdminPostId::new(),
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        published,
        created_at: Utc::now(),
    }
}

/// Create an admin post row with an RFC 3339 creation time
pub fn test_admin_post_at(title: &str, published: bool, created_at: &str) -> AdminPost {
    AdminPost {
        created_at: DateTime::parse_from_rfc3339(created_at)
            .map(|d| d.with_timezone(&Utc))
            .unwrap(),
        ..test_admin_post(title, published)
    }
}

/// Write a content file under `{root}/{section}/{name}`
pub fn write_content(root: &Path, section: &str, name: &str, source: &str) {
    let dir = root.join(section);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), source).unwrap();
}
