//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An invoice keeps its identity while its status moves from pending to paid;
/// valuations derived from it do not (they are value objects).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
