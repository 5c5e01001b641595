use uuid::Uuid;

use super::TimeRange;

/// Stable identity for timeline entities.
///
/// Identity must stay fixed for the lifetime of the entity: the layout
/// result and the rendered view tree are both keyed by it.
pub trait Identified {
    /// Unique id within the parent collection.
    fn id(&self) -> Uuid;
}

/// Anything occupying a range on the timeline axis.
pub trait Ranged {
    /// The occupied half-open range.
    fn range(&self) -> TimeRange;
}

/// A lane: an identified, ordered collection of ranged items.
///
/// The layout engine is generic over this, so hosts with their own domain
/// types (clips, log spans, schedule entries) can lay them out without
/// converting into the crate's concrete [`super::Lane`].
pub trait TimelineLane: Identified {
    /// Item type held by this lane.
    type Item: Identified + Ranged;

    /// Items in display order.
    fn items(&self) -> &[Self::Item];
}
