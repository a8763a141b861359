//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identifiers double as ordered map keys in the index, hence the `Ord`
/// bound in addition to `Eq + Hash`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
