// ABOUTME: Canonical serializable records for the backup document.
// ABOUTME: BTreeMap-backed mappings keep serialization order stable across runs.

use serde::Serialize;
use std::collections::BTreeMap;

/// The aggregate output artifact for one export run.
///
/// Constructed, serialized, and discarded within a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BackupDocument {
    #[serde(rename = "Networks")]
    pub networks: BTreeMap<String, NetworkRecord>,

    #[serde(rename = "Services")]
    pub services: BTreeMap<String, ServiceRecord>,
}

/// One canonical service record per inspected container.
///
/// Keyed in the document by `name`, which is the runtime-assigned container
/// name with its leading `/` stripped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceRecord {
    pub name: String,
    pub image: String,
    pub environment: Vec<String>,
    pub labels: BTreeMap<String, String>,
    pub command: String,
    pub entrypoint: String,
    pub working_dir: String,
    pub user: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,

    pub tty: bool,
    pub stdin_open: bool,
    pub hostname: String,
    pub domainname: String,
    pub mac_address: String,
    pub network_mode: String,
    pub stop_signal: String,
    pub healthcheck: HealthcheckSpec,
    pub dns: Vec<String>,
    pub dns_search: Vec<String>,
    pub extra_hosts: Vec<String>,
    pub security_opt: Vec<String>,
    pub storage_opt: BTreeMap<String, String>,
    pub sysctls: BTreeMap<String, String>,
    pub isolation: String,
    pub cap_add: Vec<String>,
    pub cap_drop: Vec<String>,
    pub privileged: bool,
    pub ports: Vec<String>,
    pub volumes: Vec<VolumeMount>,
    pub networks: BTreeMap<String, NetworkAttachment>,
    pub restart: String,
    pub devices: Vec<String>,

    // Not recoverable from live inspection; exists only in compose-level
    // declarations. Always emitted empty.
    pub depends_on: Vec<String>,
    pub expose: Vec<String>,
}

/// Health-check parameters in whole seconds.
///
/// Present on every service record; all zero/empty when the container
/// defines no health check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthcheckSpec {
    pub test: Vec<String>,
    pub interval: i64,
    pub timeout: i64,
    pub retries: i64,
    pub start_period: i64,
}

/// One mount entry on a service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VolumeMount {
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub target: String,
    pub read_only: bool,
}

/// Per-network settings of an attached container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkAttachment {
    pub aliases: Vec<String>,
    pub ipv4_address: String,
    pub ipv6_address: String,
}

/// One canonical record per user-defined network.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkRecord {
    pub name: String,
    pub driver: String,
    pub internal: bool,
    pub attachable: bool,
    pub enable_ipv6: bool,
    pub labels: BTreeMap<String, String>,
    pub ipam: IpamSpec,
}

/// IPAM configuration of a network.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpamSpec {
    pub driver: String,
    /// Pool configs in the order the runtime reported them.
    pub config: Vec<IpamPool>,
}

/// One subnet/gateway pair of an IPAM configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpamPool {
    pub subnet: String,
    pub gateway: String,
}
