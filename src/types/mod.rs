// ABOUTME: Type-safe identifiers for runtime entities.
// ABOUTME: Prevents mixing container and network IDs at compile time.

mod id;

pub use id::{ContainerId, NetworkId};
