#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod content;
pub mod counts;
pub mod identifier;
pub mod logging;
pub mod panel;
pub mod related;
pub mod template;

// Re-export commonly used types
pub use config::{read_config, ConfigError, MessageCatalog, PanelConfig};
pub use content::{
    CandidateQuerySpec, ContentTypeDescriptor, ContentTypeRegistry, CountsByStatus, DocumentStore,
    DocumentSummary, HourRange, InMemorySite, SiteSnapshot, SnapshotError, StatusCounter,
    StatusFilter, StoreError, StoredDocument, TypeCountSnapshot,
};
pub use counts::{aggregate, resolve_visible_types, ATTACHMENT_SLUG};
pub use identifier::{parse_identifier, IdentifierError};
pub use panel::{Panel, PanelError, PanelRenderer, RelatedDocument, RenderContext, TypeCountLine};
pub use related::{select, DocumentSlots, DEFAULT_FETCH_BUFFER};
pub use template::{MarkupEngine, TemplateError};
