//! Selection of related documents for the panel.
mod select;
mod slots;

pub use select::{select, DEFAULT_FETCH_BUFFER};
pub use slots::DocumentSlots;
