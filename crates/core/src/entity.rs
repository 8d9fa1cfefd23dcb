//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Loaded records (orders, invoices) are entities keyed by their order
/// identifier; collections index them through `id()`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
