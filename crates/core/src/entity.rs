//! Entity trait: identity that outlives attribute changes.

/// Marker + minimal interface for identified domain records.
///
/// Collections key their records by `Entity::Id`; two records with the same
/// id are the same entity regardless of attribute values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
