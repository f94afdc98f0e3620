//! Panel composition: counts, identifier line and related documents.
mod context;
mod error;
mod renderer;
mod types;

pub use context::RenderContext;
pub use error::PanelError;
pub use renderer::PanelRenderer;
pub use types::{Panel, RelatedDocument, TypeCountLine};
