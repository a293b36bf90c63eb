//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity iff their identifiers match, whatever the
/// rest of their state looks like. Implementors should key `PartialEq` and
/// `Hash` on [`Entity::id`] alone.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, independent of any other field.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
