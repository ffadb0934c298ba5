//! Entity trait: records addressed by a stable identifier (products, carts).

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same record, whatever their other fields hold.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
