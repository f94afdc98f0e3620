//! Content model and the collaborator traits the panel reads through.
mod error;
mod memory;
mod traits;
mod types;

pub use error::{SnapshotError, StoreError};
pub use memory::{InMemorySite, SiteSnapshot};
pub use traits::{ContentTypeRegistry, DocumentStore, StatusCounter};
pub use types::{
    CandidateQuerySpec, ContentTypeDescriptor, CountsByStatus, DocumentSummary, HourRange,
    StatusFilter, StoredDocument, TypeCountSnapshot, MAX_HOUR,
};
