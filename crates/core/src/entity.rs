//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A line-item group keeps its identity (its key) while items are appended to it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Index of the first entity in `entities` whose id equals `id`.
pub fn position_by_id<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}
