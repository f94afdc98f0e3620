//! Published counts per visible content type.
mod aggregate;

pub use aggregate::{
    aggregate, counted_status, published_count, resolve_visible_types, ATTACHMENT_SLUG,
    INHERIT_STATUS, PUBLISH_STATUS,
};
