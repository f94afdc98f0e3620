/// Per-request input to a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Document being viewed; never listed among related documents.
    pub current_document_id: Option<i64>,
    /// Raw `post_id` request parameter, `None` when absent.
    pub requested_identifier: Option<String>,
    pub css_class_name: String,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_current_document(mut self, id: i64) -> Self {
        self.current_document_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_requested_identifier(mut self, raw: &str) -> Self {
        self.requested_identifier = Some(raw.to_string());
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.css_class_name = class_name.to_string();
        self
    }
}
