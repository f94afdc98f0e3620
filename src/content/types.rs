use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Last hour of the day accepted by an [`HourRange`].
pub const MAX_HOUR: u32 = 23;

/// Number of documents keyed by status name (`publish`, `inherit`, `draft`, ...).
pub type CountsByStatus = BTreeMap<String, u64>;

/// A registered content type as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDescriptor {
    pub slug: String,
    pub display_name: String,
    #[serde(default)]
    pub is_public: bool,
}

impl ContentTypeDescriptor {
    #[must_use]
    pub fn public(slug: &str, display_name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            display_name: display_name.to_string(),
            is_public: true,
        }
    }
}

/// Published count for one content type, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCountSnapshot {
    pub slug: String,
    pub published_count: u64,
}

/// The only document fields the panel needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: i64,
    pub title: String,
}

impl DocumentSummary {
    #[must_use]
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
        }
    }
}

/// A full document record as kept by the in-memory site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: i64,
    pub title: String,
    pub content_type: String,
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub published_at: NaiveDateTime,
}

impl StoredDocument {
    #[must_use]
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary::new(self.id, &self.title)
    }

    #[must_use]
    pub fn published_hour(&self) -> u32 {
        self.published_at.hour()
    }
}

/// Hour-of-day window. Both bounds are inclusive and must both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }

    /// Both bounds are valid hours and the window is not inverted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end && self.end <= MAX_HOUR
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::new(9, 17)
    }
}

/// Statuses that [`StatusFilter::Any`] never matches.
const HIDDEN_FROM_ANY: [&str; 2] = ["trash", "auto-draft"];

/// Which statuses a candidate query accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status except trashed and auto-draft documents.
    #[default]
    Any,
    /// Exactly the listed statuses, hidden ones included.
    Only(BTreeSet<String>),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(&self, status: &str) -> bool {
        match self {
            Self::Any => !HIDDEN_FROM_ANY.contains(&status),
            Self::Only(allowed) => allowed.contains(status),
        }
    }
}

/// Parameters of the single bounded query issued per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuerySpec {
    pub types: BTreeSet<String>,
    pub statuses: StatusFilter,
    pub tag: String,
    pub category: String,
    pub hour_range: HourRange,
    pub exclude_ids: BTreeSet<i64>,
    pub fetch_limit: usize,
}

impl CandidateQuerySpec {
    /// Whether a stored document passes every filter except the fetch limit.
    #[must_use]
    pub fn matches(&self, doc: &StoredDocument) -> bool {
        self.types.contains(&doc.content_type)
            && self.statuses.matches(&doc.status)
            && doc.tags.iter().any(|t| t == &self.tag)
            && doc.categories.iter().any(|c| c == &self.category)
            && self.hour_range.contains(doc.published_hour())
            && !self.exclude_ids.contains(&doc.id)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
