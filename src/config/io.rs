use super::types::PanelConfig;
use super::ConfigError;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Whether a file should be parsed as YAML rather than JSON.
#[must_use]
pub fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Read and validate a panel configuration file.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_config(path: &Path) -> Result<Option<PanelConfig>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No panel config found, using defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(path).await?;
    let config: PanelConfig = if is_yaml_path(path) {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    config.validate()?;
    Ok(Some(config))
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
