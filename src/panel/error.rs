use crate::content::StoreError;
use crate::template::TemplateError;
use thiserror::Error;

/// Failure of a whole render. No partial panel is produced.
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Related documents query failed: {0}")]
    StoreQuery(#[from] StoreError),

    #[error("{0}")]
    Template(#[from] TemplateError),
}
