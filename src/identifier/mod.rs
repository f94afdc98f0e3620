//! Parsing of the externally supplied document identifier (`post_id`).
mod parse;

pub use parse::{parse_identifier, IdentifierError};
