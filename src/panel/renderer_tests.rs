use super::*;
use crate::content::{
    CandidateQuerySpec, CountsByStatus, DocumentSummary, SiteSnapshot, StoreError, StoredDocument,
};
use async_trait::async_trait;
use chrono::NaiveDate;

fn stored(id: i64, title: &str, content_type: &str, status: &str, hour: u32) -> StoredDocument {
    StoredDocument {
        id,
        title: title.to_string(),
        content_type: content_type.to_string(),
        status: status.to_string(),
        tags: vec!["foo".to_string()],
        categories: vec!["baz".to_string()],
        published_at: NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap(),
    }
}

fn site() -> Arc<InMemorySite> {
    Arc::new(InMemorySite::new(SiteSnapshot {
        types: vec![
            ContentTypeDescriptor::public("post", "Posts"),
            ContentTypeDescriptor::public("page", "Pages"),
            ContentTypeDescriptor::public("attachment", "Media"),
        ],
        documents: vec![
            stored(1, "Morning", "post", "publish", 9),
            stored(2, "Noon", "post", "publish", 12),
            stored(3, "Evening", "page", "publish", 17),
            stored(4, "Night", "post", "publish", 22),
            stored(5, "Logo", "attachment", "inherit", 10),
        ],
    }))
}

struct BrokenStore;

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn query(&self, _spec: &CandidateQuerySpec) -> Result<Vec<DocumentSummary>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

struct EmptyCounter;

#[async_trait]
impl StatusCounter for EmptyCounter {
    async fn counts_by_status(&self, _slug: &str) -> CountsByStatus {
        CountsByStatus::new()
    }
}

fn renderer() -> PanelRenderer {
    PanelRenderer::for_site(&site(), PanelConfig::default()).unwrap()
}

#[tokio::test]
async fn test_compose_type_counts() {
    let panel = renderer().compose(&RenderContext::new()).await.unwrap();
    let lines: Vec<(&str, u64)> = panel
        .type_counts
        .iter()
        .map(|l| (l.label.as_str(), l.count))
        .collect();
    assert_eq!(lines, vec![("Posts", 3), ("Pages", 1), ("Media", 1)]);
    assert_eq!(
        panel.type_counts.first().map(|l| l.line.as_str()),
        Some("There are 3 Posts.")
    );
}

#[tokio::test]
async fn test_compose_valid_identifier() {
    let ctx = RenderContext::new().with_requested_identifier("42");
    let panel = renderer().compose(&ctx).await.unwrap();
    assert_eq!(panel.identifier_message, "The current post ID is 42");
}

#[tokio::test]
async fn test_compose_partial_identifier() {
    let ctx = RenderContext::new().with_requested_identifier("12abc");
    let panel = renderer().compose(&ctx).await.unwrap();
    assert_eq!(panel.identifier_message, "The current post ID is 12");
}

#[tokio::test]
async fn test_compose_signed_identifier() {
    let ctx = RenderContext::new().with_requested_identifier("id-9");
    let panel = renderer().compose(&ctx).await.unwrap();
    assert_eq!(panel.identifier_message, "The current post ID is -9");
}

#[tokio::test]
async fn test_compose_absent_identifier_uses_invalid_message() {
    let panel = renderer().compose(&RenderContext::new()).await.unwrap();
    assert_eq!(panel.identifier_message, "Invalid post ID");
}

#[tokio::test]
async fn test_compose_related_excludes_current_document() {
    let ctx = RenderContext::new().with_current_document(2);
    let panel = renderer().compose(&ctx).await.unwrap();
    let titles: Vec<&str> = panel
        .related_documents
        .iter()
        .map(|d| d.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Evening", "Morning"]);
    assert_eq!(
        panel.related_heading.as_deref(),
        Some("5 posts with the tag of foo and the category of baz")
    );
}

#[tokio::test]
async fn test_compose_no_related_documents_omits_heading() {
    let config = PanelConfig {
        tag: "unused".to_string(),
        ..PanelConfig::default()
    };
    let renderer = PanelRenderer::for_site(&site(), config).unwrap();
    let panel = renderer.compose(&RenderContext::new()).await.unwrap();
    assert!(panel.related_documents.is_empty());
    assert!(panel.related_heading.is_none());
}

#[tokio::test]
async fn test_compose_respects_display_limit() {
    let config = PanelConfig {
        display_limit: 1,
        ..PanelConfig::default()
    };
    let renderer = PanelRenderer::for_site(&site(), config).unwrap();
    let panel = renderer.compose(&RenderContext::new()).await.unwrap();
    assert_eq!(panel.related_documents.len(), 1);
    assert_eq!(
        panel.related_heading.as_deref(),
        Some("1 posts with the tag of foo and the category of baz")
    );
}

#[tokio::test]
async fn test_store_failure_fails_render() {
    let site = site();
    let registry: Arc<dyn ContentTypeRegistry> = Arc::<InMemorySite>::clone(&site);
    let counter: Arc<dyn StatusCounter> = Arc::<InMemorySite>::clone(&site);
    let renderer = PanelRenderer::new(
        registry,
        counter,
        Arc::new(BrokenStore),
        PanelConfig::default(),
    )
    .unwrap();

    let result = renderer.render(&RenderContext::new()).await;
    assert!(matches!(
        result,
        Err(PanelError::StoreQuery(StoreError::Unavailable(_)))
    ));
}

#[tokio::test]
async fn test_missing_counts_render_zero() {
    let site = site();
    let registry: Arc<dyn ContentTypeRegistry> = Arc::<InMemorySite>::clone(&site);
    let store: Arc<dyn DocumentStore> = Arc::<InMemorySite>::clone(&site);
    let renderer =
        PanelRenderer::new(registry, Arc::new(EmptyCounter), store, PanelConfig::default())
            .unwrap();

    let panel = renderer.compose(&RenderContext::new()).await.unwrap();
    assert!(panel.type_counts.iter().all(|l| l.count == 0));
    assert_eq!(panel.type_counts.len(), 3);
}

#[tokio::test]
async fn test_render_markup() {
    let ctx = RenderContext::new()
        .with_class_name("is-style-compact")
        .with_requested_identifier("7")
        .with_current_document(1);
    let html = renderer().render(&ctx).await.unwrap();
    assert!(html.contains(r#"<div class="is-style-compact">"#));
    assert!(html.contains("<li>There are 1 Media.</li>"));
    assert!(html.contains("<p>The current post ID is 7</p>"));
    assert!(html.contains("<li>Noon</li>"));
    assert!(!html.contains("<li>Morning</li>"));
    assert!(!html.contains("<li>Night</li>"));
}

#[tokio::test]
async fn test_custom_panel_template() {
    let renderer = renderer()
        .with_panel_template("{{#each related_documents}}{{title}};{{/each}}")
        .unwrap();
    let html = renderer.render(&RenderContext::new()).await.unwrap();
    assert_eq!(html, "Evening;Noon;Morning;");
}

#[test]
fn test_display_label_falls_back_to_slug() {
    let descriptors = vec![ContentTypeDescriptor::public("post", "Posts")];
    assert_eq!(display_label(&descriptors, "post"), "Posts");
    assert_eq!(display_label(&descriptors, "page"), "page");
}
