use super::error::{SnapshotError, StoreError};
use super::traits::{ContentTypeRegistry, DocumentStore, StatusCounter};
use super::types::{
    CandidateQuerySpec, ContentTypeDescriptor, CountsByStatus, DocumentSummary, StoredDocument,
};
use crate::config::is_yaml_path;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Serialized form of a site: its content types and documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    #[serde(default)]
    pub types: Vec<ContentTypeDescriptor>,
    #[serde(default)]
    pub documents: Vec<StoredDocument>,
}

/// Registry, counter and document store backed by a [`SiteSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySite {
    snapshot: SiteSnapshot,
}

impl InMemorySite {
    #[must_use]
    pub fn new(snapshot: SiteSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a `.json`, `.yaml` or `.yml` file.
    pub async fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).await?;
        let snapshot: SiteSnapshot = if is_yaml_path(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        debug!(
            path = %path.display(),
            types = snapshot.types.len(),
            documents = snapshot.documents.len(),
            "Loaded site snapshot"
        );
        Ok(Self::new(snapshot))
    }

    #[must_use]
    pub fn snapshot(&self) -> &SiteSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl ContentTypeRegistry for InMemorySite {
    async fn visible_type_slugs(&self) -> Vec<String> {
        self.snapshot
            .types
            .iter()
            .filter(|t| t.is_public)
            .map(|t| t.slug.clone())
            .collect()
    }

    async fn descriptor(&self, slug: &str) -> Option<ContentTypeDescriptor> {
        self.snapshot.types.iter().find(|t| t.slug == slug).cloned()
    }
}

#[async_trait]
impl StatusCounter for InMemorySite {
    async fn counts_by_status(&self, slug: &str) -> CountsByStatus {
        let mut counts = CountsByStatus::new();
        for doc in self.snapshot.documents.iter().filter(|d| d.content_type == slug) {
            let count = counts.entry(doc.status.clone()).or_insert(0);
            *count = count.saturating_add(1);
        }
        counts
    }
}

#[async_trait]
impl DocumentStore for InMemorySite {
    async fn query(&self, spec: &CandidateQuerySpec) -> Result<Vec<DocumentSummary>, StoreError> {
        let mut matching: Vec<&StoredDocument> = self
            .snapshot
            .documents
            .iter()
            .filter(|doc| spec.matches(doc))
            .collect();
        // Newest first; id breaks ties so the order is stable across calls.
        matching.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(matching
            .into_iter()
            .take(spec.fetch_limit)
            .map(StoredDocument::summary)
            .collect())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
