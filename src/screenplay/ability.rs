//! Abilities: capability objects bridging actors to external systems
//!
//! An ability wraps a handle to one external collaborator (e.g. a browser
//! session). Actors own at most one instance per ability type, and abilities
//! are the only point of contact between activities and the outside world.

/// A capability an actor can be given.
///
/// Implementations are plain structs holding whatever handle they need; the
/// actor stores exactly one instance per concrete type, looked up by type.
/// `name()` is the human-readable capability name used when an actor is asked
/// for an ability it was never given.
pub trait Ability: Send + Sync + 'static {
    /// Human-readable capability name, e.g. `"browse the web"`.
    fn name() -> &'static str;
}
