use super::ConfigError;
use crate::content::{CandidateQuerySpec, HourRange, StatusFilter};
use crate::counts::ATTACHMENT_SLUG;
use crate::related::DEFAULT_FETCH_BUFFER;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default number of related documents shown
fn default_display_limit() -> usize {
    5
}

fn default_fetch_buffer() -> usize {
    DEFAULT_FETCH_BUFFER
}

/// Default content types searched for related documents
fn default_content_types() -> Vec<String> {
    vec!["post".to_string(), "page".to_string()]
}

fn default_tag() -> String {
    "foo".to_string()
}

fn default_category() -> String {
    "baz".to_string()
}

fn default_attachment_slug() -> String {
    ATTACHMENT_SLUG.to_string()
}

/// Localized message templates used by the panel.
///
/// Each entry is a handlebars template.
/// Placeholders: `count_line` takes {{count}} and {{label}}, `valid_identifier`
/// takes {{id}}, `related_heading` takes {{limit}}, {{tag}} and {{category}}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageCatalog {
    pub heading: String,
    pub count_line: String,
    pub valid_identifier: String,
    pub invalid_identifier: String,
    pub related_heading: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            heading: "Post Counts".to_string(),
            count_line: "There are {{count}} {{label}}.".to_string(),
            valid_identifier: "The current post ID is {{id}}".to_string(),
            invalid_identifier: "Invalid post ID".to_string(),
            related_heading: "{{limit}} posts with the tag of {{tag}} and the category of {{category}}"
                .to_string(),
        }
    }
}

/// Panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Maximum number of related documents displayed.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Extra candidates fetched so the current document can be dropped
    /// without under-filling the list.
    #[serde(default = "default_fetch_buffer")]
    pub fetch_buffer: usize,

    #[serde(default = "default_content_types")]
    pub content_types: Vec<String>,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default)]
    pub hour_range: HourRange,

    /// Slug of the media type whose documents are counted under `inherit`.
    #[serde(default = "default_attachment_slug")]
    pub attachment_slug: String,

    #[serde(default)]
    pub messages: MessageCatalog,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            fetch_buffer: default_fetch_buffer(),
            content_types: default_content_types(),
            tag: default_tag(),
            category: default_category(),
            hour_range: HourRange::default(),
            attachment_slug: default_attachment_slug(),
            messages: MessageCatalog::default(),
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_limit == 0 {
            return Err(ConfigError::Invalid(
                "displayLimit must be at least 1".to_string(),
            ));
        }
        if self.fetch_buffer == 0 {
            return Err(ConfigError::Invalid(
                "fetchBuffer must be at least 1".to_string(),
            ));
        }
        if !self.hour_range.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "hourRange {}..={} must satisfy start <= end <= 23",
                self.hour_range.start, self.hour_range.end
            )));
        }
        if self.content_types.is_empty() {
            return Err(ConfigError::Invalid(
                "contentTypes must name at least one type".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the candidate query for this configuration.
    ///
    /// `fetch_limit` and `exclude_ids` are left empty; the selector fills
    /// them per render.
    #[must_use]
    pub fn candidate_query(&self) -> CandidateQuerySpec {
        CandidateQuerySpec {
            types: self.content_types.iter().cloned().collect(),
            statuses: StatusFilter::Any,
            tag: self.tag.clone(),
            category: self.category.clone(),
            hour_range: self.hour_range,
            exclude_ids: BTreeSet::new(),
            fetch_limit: 0,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
