use serde::Serialize;

/// One entry of the per-type count list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCountLine {
    pub label: String,
    pub count: u64,
    /// Localized sentence shown for this entry.
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedDocument {
    pub title: String,
}

/// Everything the panel markup displays. Values are unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub css_class_name: String,
    pub heading: String,
    pub type_counts: Vec<TypeCountLine>,
    pub identifier_message: String,
    /// Present only when there is at least one related document.
    pub related_heading: Option<String>,
    pub related_documents: Vec<RelatedDocument>,
}
