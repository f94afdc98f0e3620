use handlebars::{no_escape, Handlebars};
use serde::Serialize;
use thiserror::Error;

use crate::panel::Panel;

/// Name the panel markup is registered under.
pub const PANEL_TEMPLATE_NAME: &str = "panel";

/// Built-in panel markup. Values are HTML-escaped on render.
/// Placeholders: {{`css_class_name`}}, {{heading}}, {{`type_counts`}}, {{`identifier_message`}},
/// {{`related_heading`}}, {{`related_documents`}}
pub const PANEL_TEMPLATE: &str = r#"<div class="{{css_class_name}}">
	<h2>{{heading}}</h2>
	<ul>
		{{#each type_counts}}<li>{{line}}</li>{{/each}}
	</ul>
	<p>{{identifier_message}}</p>
	{{#if related_documents}}<h2>{{related_heading}}</h2>
	<ul>
		{{#each related_documents}}<li>{{title}}</li>{{/each}}
	</ul>
	{{/if}}
</div>
"#;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    TemplateError(#[source] Box<handlebars::TemplateError>),
    #[error("Render error: {0}")]
    RenderError(#[source] Box<handlebars::RenderError>),
}

impl From<handlebars::TemplateError> for TemplateError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::TemplateError(Box::new(err))
    }
}

impl From<handlebars::RenderError> for TemplateError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::RenderError(Box::new(err))
    }
}

/// Formats localized messages and renders the panel markup.
///
/// Messages are formatted without escaping; everything is escaped exactly
/// once when the panel itself is rendered.
pub struct MarkupEngine {
    markup: Handlebars<'static>,
    messages: Handlebars<'static>,
}

impl MarkupEngine {
    /// Engine using the built-in [`PANEL_TEMPLATE`].
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_panel_template(PANEL_TEMPLATE)
    }

    /// Engine using a custom panel template.
    pub fn with_panel_template(template: &str) -> Result<Self, TemplateError> {
        let mut markup = Handlebars::new();
        markup.register_template_string(PANEL_TEMPLATE_NAME, template)?;
        let mut messages = Handlebars::new();
        messages.register_escape_fn(no_escape);
        Ok(Self { markup, messages })
    }

    /// Fill a message template with `data`.
    pub fn format_message<T: Serialize>(
        &self,
        template: &str,
        data: &T,
    ) -> Result<String, TemplateError> {
        self.messages
            .render_template(template, data)
            .map_err(TemplateError::from)
    }

    /// Render the panel markup.
    pub fn render_panel(&self, panel: &Panel) -> Result<String, TemplateError> {
        self.markup
            .render(PANEL_TEMPLATE_NAME, panel)
            .map_err(TemplateError::from)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
