// ABOUTME: Sealed trait pattern to control trait implementations.
// ABOUTME: Only types in this crate can implement the runtime traits.

/// Prevents downstream crates from implementing the runtime traits.
pub trait Sealed {}
