mod io;
mod types;

pub use io::{is_yaml_path, read_config};
pub use types::{MessageCatalog, PanelConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid panel configuration: {0}")]
    Invalid(String),
}
