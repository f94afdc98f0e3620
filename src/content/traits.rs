use super::error::StoreError;
use super::types::{CandidateQuerySpec, ContentTypeDescriptor, CountsByStatus, DocumentSummary};
use async_trait::async_trait;

/// Source of content type metadata.
#[async_trait]
pub trait ContentTypeRegistry: Send + Sync {
    /// Slugs of the publicly browsable types. Order is display order.
    async fn visible_type_slugs(&self) -> Vec<String>;

    /// Look up the descriptor for a slug, `None` when the type is unknown.
    async fn descriptor(&self, slug: &str) -> Option<ContentTypeDescriptor>;
}

/// Per-status document counts for a content type.
#[async_trait]
pub trait StatusCounter: Send + Sync {
    /// Counts keyed by status name. May be partial or empty.
    async fn counts_by_status(&self, slug: &str) -> CountsByStatus;
}

/// Query engine over stored documents.
///
/// Implementations apply every filter carried by the [`CandidateQuerySpec`]
/// and return at most `fetch_limit` summaries in their natural order.
/// Returning fewer is fine.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn query(&self, spec: &CandidateQuerySpec) -> Result<Vec<DocumentSummary>, StoreError>;
}
