mod engine;

pub use engine::{MarkupEngine, TemplateError, PANEL_TEMPLATE, PANEL_TEMPLATE_NAME};
