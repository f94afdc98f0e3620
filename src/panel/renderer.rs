use std::sync::Arc;

use serde_json::json;
use tracing::{debug, instrument, warn};

use super::context::RenderContext;
use super::error::PanelError;
use super::types::{Panel, RelatedDocument, TypeCountLine};
use crate::config::PanelConfig;
use crate::content::{
    ContentTypeDescriptor, ContentTypeRegistry, DocumentStore, InMemorySite, StatusCounter,
};
use crate::counts::{aggregate, resolve_visible_types};
use crate::identifier::parse_identifier;
use crate::related::select;
use crate::template::MarkupEngine;

/// Renders the site counts panel from injected collaborators.
///
/// Every render re-reads the registry, counts and store; nothing is cached
/// between renders. A failing document query fails the whole render.
pub struct PanelRenderer {
    registry: Arc<dyn ContentTypeRegistry>,
    counter: Arc<dyn StatusCounter>,
    store: Arc<dyn DocumentStore>,
    config: PanelConfig,
    engine: MarkupEngine,
}

impl PanelRenderer {
    pub fn new(
        registry: Arc<dyn ContentTypeRegistry>,
        counter: Arc<dyn StatusCounter>,
        store: Arc<dyn DocumentStore>,
        config: PanelConfig,
    ) -> Result<Self, PanelError> {
        Ok(Self {
            registry,
            counter,
            store,
            config,
            engine: MarkupEngine::new()?,
        })
    }

    /// Renderer whose three collaborators are the same in-memory site.
    pub fn for_site(site: &Arc<InMemorySite>, config: PanelConfig) -> Result<Self, PanelError> {
        let registry: Arc<dyn ContentTypeRegistry> = Arc::<InMemorySite>::clone(site);
        let counter: Arc<dyn StatusCounter> = Arc::<InMemorySite>::clone(site);
        let store: Arc<dyn DocumentStore> = Arc::<InMemorySite>::clone(site);
        Self::new(registry, counter, store, config)
    }

    /// Swap the panel markup template.
    pub fn with_panel_template(mut self, template: &str) -> Result<Self, PanelError> {
        self.engine = MarkupEngine::with_panel_template(template)?;
        Ok(self)
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Build the display structure for one request.
    #[instrument(
        name = "panel.compose",
        skip(self, ctx),
        fields(has_current_document = ctx.current_document_id.is_some())
    )]
    pub async fn compose(&self, ctx: &RenderContext) -> Result<Panel, PanelError> {
        let type_counts = self.type_count_lines().await?;
        let identifier_message = self.identifier_message(ctx.requested_identifier.as_deref())?;

        let selected = select(
            self.store.as_ref(),
            self.config.candidate_query(),
            ctx.current_document_id,
            self.config.display_limit,
            self.config.fetch_buffer,
        )
        .await
        .inspect_err(|e| warn!(error = %e, "Related documents query failed"))?;

        let related_documents: Vec<RelatedDocument> = selected
            .into_iter()
            .map(|doc| RelatedDocument { title: doc.title })
            .collect();
        let related_heading = if related_documents.is_empty() {
            None
        } else {
            Some(self.related_heading()?)
        };

        Ok(Panel {
            css_class_name: ctx.css_class_name.clone(),
            heading: self.config.messages.heading.clone(),
            type_counts,
            identifier_message,
            related_heading,
            related_documents,
        })
    }

    /// Compose and render the panel markup.
    pub async fn render(&self, ctx: &RenderContext) -> Result<String, PanelError> {
        let panel = self.compose(ctx).await?;
        Ok(self.engine.render_panel(&panel)?)
    }

    async fn type_count_lines(&self) -> Result<Vec<TypeCountLine>, PanelError> {
        let visible = resolve_visible_types(self.registry.as_ref()).await;
        let snapshots = aggregate(
            &visible,
            self.counter.as_ref(),
            &self.config.attachment_slug,
        )
        .await;

        let mut lines = Vec::with_capacity(snapshots.len());
        for snapshot in snapshots {
            let label = display_label(&visible, &snapshot.slug);
            let line = self.engine.format_message(
                &self.config.messages.count_line,
                &json!({ "count": snapshot.published_count, "label": label }),
            )?;
            lines.push(TypeCountLine {
                label: label.to_string(),
                count: snapshot.published_count,
                line,
            });
        }
        Ok(lines)
    }

    fn identifier_message(&self, raw: Option<&str>) -> Result<String, PanelError> {
        let messages = &self.config.messages;
        let message = match parse_identifier(raw) {
            Ok(id) => self
                .engine
                .format_message(&messages.valid_identifier, &json!({ "id": id }))?,
            Err(reason) => {
                debug!(%reason, "Requested identifier rejected");
                self.engine
                    .format_message(&messages.invalid_identifier, &json!({}))?
            }
        };
        Ok(message)
    }

    fn related_heading(&self) -> Result<String, PanelError> {
        Ok(self.engine.format_message(
            &self.config.messages.related_heading,
            &json!({
                "limit": self.config.display_limit,
                "tag": self.config.tag,
                "category": self.config.category,
            }),
        )?)
    }
}

/// Display name for a slug, falling back to the slug itself.
fn display_label<'a>(descriptors: &'a [ContentTypeDescriptor], slug: &'a str) -> &'a str {
    descriptors
        .iter()
        .find(|d| d.slug == slug)
        .map_or(slug, |d| d.display_name.as_str())
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
