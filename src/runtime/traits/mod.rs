// ABOUTME: Capability traits for container runtime snapshot access.
// ABOUTME: Defines the sealed SnapshotOps trait and its error type.

pub(crate) mod sealed;
mod snapshot;

pub use snapshot::{SnapshotError, SnapshotOps};
