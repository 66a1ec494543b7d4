//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores index entities by this identifier, so it must be stable for the
/// entity's whole lifetime.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
