// ABOUTME: Read-only snapshot operations over a container runtime.
// ABOUTME: Enumerate and inspect containers and networks in native API shapes.

use super::sealed::Sealed;
use crate::types::{ContainerId, NetworkId};
use async_trait::async_trait;
use bollard::models::{ContainerInspectResponse, ContainerSummary, Network, NetworkInspect};

/// Read-only access to the live state of a container runtime.
///
/// Results are the runtime's native inspection models; translating them into
/// the canonical backup schema is the export layer's job. Every call is
/// blocking from the caller's perspective and carries no retry policy.
#[async_trait]
pub trait SnapshotOps: Sealed + Send + Sync {
    /// Verify the runtime is reachable.
    async fn ping(&self) -> Result<(), SnapshotError>;

    /// List running containers.
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, SnapshotError>;

    /// Fetch the full inspection payload for one container.
    async fn inspect_container(
        &self,
        id: &ContainerId,
    ) -> Result<ContainerInspectResponse, SnapshotError>;

    /// List all networks known to the runtime.
    async fn list_networks(&self) -> Result<Vec<Network>, SnapshotError>;

    /// Fetch the full inspection payload for one network.
    async fn inspect_network(&self, id: &NetworkId) -> Result<NetworkInspect, SnapshotError>;
}

/// Errors from snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("runtime unreachable: {0}")]
    ConnectionFailed(String),

    #[error("failed to list containers: {0}")]
    ListContainers(String),

    #[error("failed to list networks: {0}")]
    ListNetworks(String),

    #[error("container not found: {0}")]
    ContainerNotFound(String),

    #[error("network not found: {0}")]
    NetworkNotFound(String),

    #[error("failed to inspect container {id}: {reason}")]
    InspectContainer { id: String, reason: String },

    #[error("failed to inspect network {id}: {reason}")]
    InspectNetwork { id: String, reason: String },
}
