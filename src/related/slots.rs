use crate::content::DocumentSummary;

/// Read-only view over selected documents addressed by 1-based position.
///
/// Positions past the end are empty slots, not errors.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSlots<'a> {
    documents: &'a [DocumentSummary],
}

impl<'a> DocumentSlots<'a> {
    #[must_use]
    pub fn new(documents: &'a [DocumentSummary]) -> Self {
        Self { documents }
    }

    /// Document at `position` (1-based), `None` when the slot is empty.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&'a DocumentSummary> {
        position
            .checked_sub(1)
            .and_then(|index| self.documents.get(index))
    }

    /// Occupied slots among positions `1..=limit`, in order.
    pub fn filled(self, limit: usize) -> impl Iterator<Item = &'a DocumentSummary> {
        (1..=limit).map_while(move |position| self.get(position))
    }
}
