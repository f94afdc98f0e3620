use crate::content::{
    ContentTypeDescriptor, ContentTypeRegistry, CountsByStatus, StatusCounter, TypeCountSnapshot,
};
use tracing::{debug, warn};

/// Reserved slug of the media type.
pub const ATTACHMENT_SLUG: &str = "attachment";

/// Status under which regular documents are counted.
pub const PUBLISH_STATUS: &str = "publish";

/// Status under which attachments are counted; they inherit their parent's status.
pub const INHERIT_STATUS: &str = "inherit";

/// The single status a type's display count is read from.
#[must_use]
pub fn counted_status(slug: &str, attachment_slug: &str) -> &'static str {
    if slug == attachment_slug {
        INHERIT_STATUS
    } else {
        PUBLISH_STATUS
    }
}

/// Display count for a type. Missing status data counts as zero.
#[must_use]
pub fn published_count(slug: &str, counts: &CountsByStatus, attachment_slug: &str) -> u64 {
    counts
        .get(counted_status(slug, attachment_slug))
        .copied()
        .unwrap_or(0)
}

/// Resolve the registry's visible slugs to descriptors, in registry order.
///
/// Slugs without a descriptor are skipped.
pub async fn resolve_visible_types<R>(registry: &R) -> Vec<ContentTypeDescriptor>
where
    R: ContentTypeRegistry + ?Sized,
{
    let slugs = registry.visible_type_slugs().await;
    let mut resolved = Vec::with_capacity(slugs.len());
    for slug in slugs {
        if let Some(descriptor) = registry.descriptor(&slug).await {
            resolved.push(descriptor);
        } else {
            warn!(slug = %slug, "Content type has no descriptor, skipping");
        }
    }
    resolved
}

/// Compute one snapshot per public type, preserving input order.
///
/// Each type costs exactly one call to the counter.
pub async fn aggregate<C>(
    visible_types: &[ContentTypeDescriptor],
    counter: &C,
    attachment_slug: &str,
) -> Vec<TypeCountSnapshot>
where
    C: StatusCounter + ?Sized,
{
    let mut snapshots = Vec::with_capacity(visible_types.len());
    for descriptor in visible_types {
        if !descriptor.is_public {
            debug!(slug = %descriptor.slug, "Content type is not public, skipping");
            continue;
        }
        let counts = counter.counts_by_status(&descriptor.slug).await;
        let published = published_count(&descriptor.slug, &counts, attachment_slug);
        debug!(slug = %descriptor.slug, published, "Counted content type");
        snapshots.push(TypeCountSnapshot {
            slug: descriptor.slug.clone(),
            published_count: published,
        });
    }
    snapshots
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
