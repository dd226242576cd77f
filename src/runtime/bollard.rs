// ABOUTME: Bollard-based snapshot client implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::sealed::Sealed;
use crate::runtime::traits::{SnapshotError, SnapshotOps};
use crate::runtime::types::{RuntimeInfo, RuntimeType};
use crate::types::{ContainerId, NetworkId};
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{ContainerInspectResponse, ContainerSummary, Network, NetworkInspect};
use bollard::query_parameters::{
    InspectContainerOptions, InspectNetworkOptions, ListContainersOptions, ListNetworksOptions,
};

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_connection_error(e: bollard::errors::Error) -> SnapshotError {
    SnapshotError::ConnectionFailed(e.to_string())
}

fn map_list_containers_error(e: bollard::errors::Error) -> SnapshotError {
    SnapshotError::ListContainers(e.to_string())
}

fn map_list_networks_error(e: bollard::errors::Error) -> SnapshotError {
    SnapshotError::ListNetworks(e.to_string())
}

fn map_inspect_container_error(e: bollard::errors::Error, id: &ContainerId) -> SnapshotError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => SnapshotError::ContainerNotFound(message.clone()),
        _ => SnapshotError::InspectContainer {
            id: id.to_string(),
            reason: e.to_string(),
        },
    }
}

fn map_inspect_network_error(e: bollard::errors::Error, id: &NetworkId) -> SnapshotError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => SnapshotError::NetworkNotFound(message.clone()),
        _ => SnapshotError::InspectNetwork {
            id: id.to_string(),
            reason: e.to_string(),
        },
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Snapshot client backed by bollard.
///
/// Supports both Docker and Podman via Docker-compatible API. The handle is
/// scoped to one export invocation; dropping it releases the connection.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    ///
    /// Use with `detect_local()` to obtain the socket path.
    pub fn connect(info: &RuntimeInfo) -> Result<Self, SnapshotError> {
        tracing::debug!(
            runtime = %info.runtime_type,
            socket = %info.socket_path,
            "connecting to runtime"
        );
        let client =
            Docker::connect_with_unix(&info.socket_path, 120, bollard::API_DEFAULT_VERSION)
                .map_err(map_connection_error)?;
        Ok(Self::new(client, info.runtime_type))
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }
}

impl Sealed for BollardRuntime {}

#[async_trait]
impl SnapshotOps for BollardRuntime {
    async fn ping(&self) -> Result<(), SnapshotError> {
        self.client.ping().await.map_err(map_connection_error)?;
        Ok(())
    }

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, SnapshotError> {
        // Running containers only: stopped containers are not part of the
        // environment being captured.
        let opts = ListContainersOptions {
            all: false,
            ..Default::default()
        };

        self.client
            .list_containers(Some(opts))
            .await
            .map_err(map_list_containers_error)
    }

    async fn inspect_container(
        &self,
        id: &ContainerId,
    ) -> Result<ContainerInspectResponse, SnapshotError> {
        self.client
            .inspect_container(id.as_str(), None::<InspectContainerOptions>)
            .await
            .map_err(|e| map_inspect_container_error(e, id))
    }

    async fn list_networks(&self) -> Result<Vec<Network>, SnapshotError> {
        self.client
            .list_networks(None::<ListNetworksOptions>)
            .await
            .map_err(map_list_networks_error)
    }

    async fn inspect_network(&self, id: &NetworkId) -> Result<NetworkInspect, SnapshotError> {
        self.client
            .inspect_network(id.as_str(), None::<InspectNetworkOptions>)
            .await
            .map_err(|e| map_inspect_network_error(e, id))
    }
}
