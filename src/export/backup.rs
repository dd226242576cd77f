// ABOUTME: Backup aggregator: enumerate, inspect, translate, assemble, persist.
// ABOUTME: Fail-fast at every stage; no partial document is ever written.

use super::document::BackupDocument;
use super::error::ExportError;
use super::network::{is_default_network, translate_network};
use super::service::translate_container;
use crate::runtime::SnapshotOps;
use crate::types::{ContainerId, NetworkId};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Fixed filename of the backup document inside the output directory.
pub const BACKUP_FILENAME: &str = "backup.cosmos-compose.json";

/// Capture the full runtime state as a backup document.
///
/// Containers and networks are translated one at a time in enumeration
/// order. Any failure at any stage aborts the whole run; there is no retry
/// and no partial result.
pub async fn snapshot<S: SnapshotOps + ?Sized>(source: &S) -> Result<BackupDocument, ExportError> {
    let mut document = BackupDocument::default();

    let containers = source.list_containers().await?;
    debug!(count = containers.len(), "listed containers");
    for summary in &containers {
        let id = ContainerId::new(summary.id.clone().unwrap_or_default());
        let details = source.inspect_container(&id).await?;
        let record = translate_container(&details)?;
        debug!(service = %record.name, "translated service");
        document.services.insert(record.name.clone(), record);
    }

    let networks = source.list_networks().await?;
    debug!(count = networks.len(), "listed networks");
    for network in &networks {
        let name = network.name.as_deref().unwrap_or_default();
        if is_default_network(name) {
            continue;
        }
        let id = NetworkId::new(network.id.clone().unwrap_or_default());
        let details = source.inspect_network(&id).await?;
        let record = translate_network(&details);
        debug!(network = %record.name, "translated network");
        document.networks.insert(record.name.clone(), record);
    }

    info!(
        services = document.services.len(),
        networks = document.networks.len(),
        "assembled backup document"
    );
    Ok(document)
}

/// Serialize a backup document and write it into `output_dir`.
///
/// The document is rendered in memory first so a serialization failure never
/// leaves a truncated file behind.
pub fn write_document(
    document: &BackupDocument,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let rendered = serde_json::to_vec_pretty(document)?;

    let path = output_dir.join(BACKUP_FILENAME);
    std::fs::write(&path, rendered).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Run one full export: verify the runtime is reachable, capture its state,
/// and persist the document. Returns the path written.
pub async fn export<S: SnapshotOps + ?Sized>(
    source: &S,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    source.ping().await?;

    let document = snapshot(source).await?;
    write_document(&document, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::SnapshotError;
    use crate::runtime::traits::sealed::Sealed;
    use async_trait::async_trait;
    use bollard::models::{
        ContainerConfig, ContainerInspectResponse, ContainerSummary, MountPoint,
        MountPointTypeEnum, Network, NetworkInspect, PortBinding, PortMap,
    };
    use std::collections::HashMap;

    /// Canned snapshot source for aggregator tests.
    #[derive(Default)]
    struct FakeSource {
        containers: Vec<ContainerInspectResponse>,
        networks: Vec<NetworkInspect>,
        fail_ping: bool,
        fail_list_containers: bool,
        fail_list_networks: bool,
        fail_inspect_container: Option<String>,
    }

    impl Sealed for FakeSource {}

    #[async_trait]
    impl SnapshotOps for FakeSource {
        async fn ping(&self) -> Result<(), SnapshotError> {
            if self.fail_ping {
                return Err(SnapshotError::ConnectionFailed("refused".to_string()));
            }
            Ok(())
        }

        async fn list_containers(&self) -> Result<Vec<ContainerSummary>, SnapshotError> {
            if self.fail_list_containers {
                return Err(SnapshotError::ListContainers("boom".to_string()));
            }
            Ok(self
                .containers
                .iter()
                .map(|c| ContainerSummary {
                    id: c.id.clone(),
                    names: c.name.clone().map(|n| vec![n]),
                    ..Default::default()
                })
                .collect())
        }

        async fn inspect_container(
            &self,
            id: &ContainerId,
        ) -> Result<ContainerInspectResponse, SnapshotError> {
            if self.fail_inspect_container.as_deref() == Some(id.as_str()) {
                return Err(SnapshotError::InspectContainer {
                    id: id.to_string(),
                    reason: "boom".to_string(),
                });
            }
            self.containers
                .iter()
                .find(|c| c.id.as_deref() == Some(id.as_str()))
                .cloned()
                .ok_or_else(|| SnapshotError::ContainerNotFound(id.to_string()))
        }

        async fn list_networks(&self) -> Result<Vec<Network>, SnapshotError> {
            if self.fail_list_networks {
                return Err(SnapshotError::ListNetworks("boom".to_string()));
            }
            Ok(self
                .networks
                .iter()
                .map(|n| Network {
                    id: n.id.clone(),
                    name: n.name.clone(),
                    ..Default::default()
                })
                .collect())
        }

        async fn inspect_network(&self, id: &NetworkId) -> Result<NetworkInspect, SnapshotError> {
            self.networks
                .iter()
                .find(|n| n.id.as_deref() == Some(id.as_str()))
                .cloned()
                .ok_or_else(|| SnapshotError::NetworkNotFound(id.to_string()))
        }
    }

    fn web_container() -> ContainerInspectResponse {
        let mut ports = PortMap::new();
        ports.insert(
            "80/tcp".to_string(),
            Some(vec![PortBinding {
                host_ip: Some("0.0.0.0".to_string()),
                host_port: Some("8080".to_string()),
            }]),
        );

        ContainerInspectResponse {
            id: Some("c1".to_string()),
            name: Some("/web".to_string()),
            config: Some(ContainerConfig {
                image: Some("nginx:latest".to_string()),
                ..Default::default()
            }),
            network_settings: Some(bollard::models::NetworkSettings {
                ports: Some(ports),
                ..Default::default()
            }),
            mounts: Some(vec![MountPoint {
                typ: Some(MountPointTypeEnum::VOLUME),
                source: Some("/var/lib/docker/volumes/cache/_data".to_string()),
                destination: Some("/var/cache".to_string()),
                rw: Some(true),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    fn named_network(id: &str, name: &str) -> NetworkInspect {
        NetworkInspect {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            driver: Some("bridge".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn snapshot_captures_services_and_networks() {
        let source = FakeSource {
            containers: vec![web_container()],
            networks: vec![
                named_network("n1", "bridge"),
                named_network("n2", "backend"),
            ],
            ..Default::default()
        };

        let document = snapshot(&source).await.unwrap();

        let web = &document.services["web"];
        assert_eq!(web.image, "nginx:latest");
        assert_eq!(web.ports, vec!["0.0.0.0:8080->80/tcp"]);
        assert_eq!(web.volumes[0].source, "cache");

        assert!(document.networks.contains_key("backend"));
        assert!(!document.networks.contains_key("bridge"));
    }

    #[tokio::test]
    async fn default_networks_never_appear_in_output() {
        let source = FakeSource {
            networks: vec![
                named_network("n1", "bridge"),
                named_network("n2", "host"),
                named_network("n3", "none"),
            ],
            ..Default::default()
        };

        let document = snapshot(&source).await.unwrap();
        assert!(document.networks.is_empty());
    }

    #[tokio::test]
    async fn inspection_failure_aborts_the_run() {
        let mut second = web_container();
        second.id = Some("c2".to_string());
        second.name = Some("/db".to_string());

        let source = FakeSource {
            containers: vec![web_container(), second],
            fail_inspect_container: Some("c2".to_string()),
            ..Default::default()
        };

        let err = snapshot(&source).await.unwrap_err();
        assert!(matches!(
            err,
            ExportError::Snapshot(SnapshotError::InspectContainer { .. })
        ));
    }

    #[tokio::test]
    async fn container_listing_failure_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            containers: vec![web_container()],
            fail_list_containers: true,
            ..Default::default()
        };

        let err = export(&source, dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), crate::export::ExportErrorKind::Enumeration);
        assert!(!dir.path().join(BACKUP_FILENAME).exists());
    }

    #[tokio::test]
    async fn network_listing_failure_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            containers: vec![web_container()],
            networks: vec![named_network("n2", "backend")],
            fail_list_networks: true,
            ..Default::default()
        };

        let err = export(&source, dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), crate::export::ExportErrorKind::Enumeration);
        assert!(!dir.path().join(BACKUP_FILENAME).exists());
    }

    #[tokio::test]
    async fn ping_failure_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            containers: vec![web_container()],
            fail_ping: true,
            ..Default::default()
        };

        let err = export(&source, dir.path()).await.unwrap_err();
        assert!(matches!(
            err,
            ExportError::Snapshot(SnapshotError::ConnectionFailed(_))
        ));
        assert!(!dir.path().join(BACKUP_FILENAME).exists());
    }

    #[tokio::test]
    async fn export_writes_deterministic_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            containers: vec![web_container()],
            networks: vec![named_network("n2", "backend")],
            ..Default::default()
        };

        let path = export(&source, dir.path()).await.unwrap();
        assert_eq!(path.file_name().unwrap(), BACKUP_FILENAME);
        let first = std::fs::read(&path).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
        assert_eq!(value["Services"]["web"]["image"], "nginx:latest");
        assert_eq!(value["Networks"]["backend"]["driver"], "bridge");

        let path = export(&source, dir.path()).await.unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn write_failure_reports_target_path() {
        let source = FakeSource {
            containers: vec![web_container()],
            ..Default::default()
        };

        let err = export(&source, Path::new("/nonexistent-kivotos-dir"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }

    /// Mixed HashMap-backed inputs still serialize identically across runs.
    #[tokio::test]
    async fn repeated_snapshots_serialize_identically() {
        let mut labels = HashMap::new();
        for i in 0..16 {
            labels.insert(format!("label-{i}"), format!("value-{i}"));
        }

        let mut container = web_container();
        container.config.as_mut().unwrap().labels = Some(labels);

        let source = FakeSource {
            containers: vec![container],
            ..Default::default()
        };

        let first = serde_json::to_vec_pretty(&snapshot(&source).await.unwrap()).unwrap();
        let second = serde_json::to_vec_pretty(&snapshot(&source).await.unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
