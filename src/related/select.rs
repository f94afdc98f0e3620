use crate::content::{CandidateQuerySpec, DocumentStore, DocumentSummary, StoreError};
use tracing::debug;

/// Extra candidates fetched beyond the display limit.
pub const DEFAULT_FETCH_BUFFER: usize = 3;

/// Query the store once and keep the first `display_limit` documents that
/// are not the current one.
///
/// The query over-fetches by `buffer` (at least 1) so dropping the current
/// document does not leave the list short. The current id is also added to
/// `exclude_ids`; results are still filtered here because stores are not
/// required to honour it. A short result yields a short list. Store errors
/// are returned as-is and never retried.
pub async fn select<S>(
    store: &S,
    mut spec: CandidateQuerySpec,
    current_document_id: Option<i64>,
    display_limit: usize,
    buffer: usize,
) -> Result<Vec<DocumentSummary>, StoreError>
where
    S: DocumentStore + ?Sized,
{
    spec.fetch_limit = display_limit.saturating_add(buffer.max(1));
    if let Some(current) = current_document_id {
        spec.exclude_ids.insert(current);
    }

    let candidates = store.query(&spec).await?;
    let fetched = candidates.len();

    let selected: Vec<DocumentSummary> = candidates
        .into_iter()
        .filter(|doc| Some(doc.id) != current_document_id)
        .take(display_limit)
        .collect();

    debug!(
        fetch_limit = spec.fetch_limit,
        fetched,
        selected = selected.len(),
        "Selected related documents"
    );
    Ok(selected)
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
