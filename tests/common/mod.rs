//! Common test utilities

use site_counts::{ContentTypeDescriptor, InMemorySite, SiteSnapshot, StoredDocument};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Build a stored document tagged `foo` in category `baz`, published on
/// 2024-01-15 at the given hour.
pub fn document(id: i64, title: &str, content_type: &str, status: &str, hour: u32) -> StoredDocument {
    let published_at = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("Valid timestamp");
    StoredDocument {
        id,
        title: title.to_string(),
        content_type: content_type.to_string(),
        status: status.to_string(),
        tags: vec!["foo".to_string()],
        categories: vec!["baz".to_string()],
        published_at,
    }
}

/// A small blog: posts, pages, media and one private type.
pub fn blog_snapshot() -> SiteSnapshot {
    SiteSnapshot {
        types: vec![
            ContentTypeDescriptor::public("post", "Posts"),
            ContentTypeDescriptor::public("page", "Pages"),
            ContentTypeDescriptor::public("attachment", "Media"),
            ContentTypeDescriptor {
                slug: "wp_block".to_string(),
                display_name: "Reusable blocks".to_string(),
                is_public: false,
            },
        ],
        documents: vec![
            document(1, "Release notes", "post", "publish", 9),
            document(2, "Roadmap", "post", "publish", 10),
            document(3, "About", "page", "publish", 11),
            document(4, "Team", "page", "draft", 12),
            document(5, "Current article", "post", "publish", 13),
            document(6, "Changelog", "post", "publish", 14),
            document(7, "Late night post", "post", "publish", 23),
            document(8, "Banner", "attachment", "inherit", 15),
            document(9, "Icon", "attachment", "inherit", 16),
        ],
    }
}

pub fn blog_site() -> InMemorySite {
    InMemorySite::new(blog_snapshot())
}

/// Write a snapshot as JSON into `dir` and return its path.
pub async fn write_snapshot(dir: &Path, snapshot: &SiteSnapshot) -> PathBuf {
    let path = dir.join("site.json");
    let json = serde_json::to_string_pretty(snapshot).expect("Should serialize snapshot");
    tokio::fs::write(&path, json)
        .await
        .expect("Should write snapshot");
    path
}
