// ABOUTME: Pure field normalizers from runtime inspection shapes to canonical shapes.
// ABOUTME: Ports, mounts, devices, network attachments, health checks, user identity.

use super::document::{HealthcheckSpec, NetworkAttachment, VolumeMount};
use bollard::models::{
    DeviceMapping, EndpointSettings, HealthConfig, MountPoint, MountPointTypeEnum, PortMap,
};
use std::collections::{BTreeMap, HashMap};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Data-directory suffix the storage backend appends to volume paths.
const VOLUME_DATA_SUFFIX: &str = "/_data";

/// Render the runtime's port-to-bindings mapping as `hostIP:hostPort->containerPort/proto`.
///
/// One entry per (port, binding) pair; ports with no host bindings are
/// excluded entirely. Port keys are sorted first so the rendered list is
/// stable across runs.
pub fn format_ports(ports: &PortMap) -> Vec<String> {
    let mut keys: Vec<&String> = ports.keys().collect();
    keys.sort();

    let mut rendered = Vec::new();
    for key in keys {
        // Port keys look like "80/tcp"; a missing protocol means tcp.
        let (port, proto) = key.split_once('/').unwrap_or((key.as_str(), "tcp"));
        let Some(bindings) = &ports[key] else {
            continue;
        };
        for binding in bindings {
            rendered.push(format!(
                "{}:{}->{}/{}",
                binding.host_ip.as_deref().unwrap_or_default(),
                binding.host_port.as_deref().unwrap_or_default(),
                port,
                proto,
            ));
        }
    }
    rendered
}

/// Map runtime mount entries to canonical volume mounts.
///
/// Volume-type mounts have their source rewritten from the backend's on-disk
/// path to the bare logical volume name; all other mount types pass through
/// unchanged.
pub fn format_mounts(mounts: &[MountPoint]) -> Vec<VolumeMount> {
    mounts
        .iter()
        .map(|m| {
            let source = m.source.clone().unwrap_or_default();
            let source = if matches!(m.typ, Some(MountPointTypeEnum::VOLUME)) {
                volume_source_name(&source)
            } else {
                source
            };

            VolumeMount {
                kind: m.typ.map(|t| t.to_string()).unwrap_or_default(),
                source,
                target: m.destination.clone().unwrap_or_default(),
                read_only: !m.rw.unwrap_or(true),
            }
        })
        .collect()
}

/// Recover the logical volume name from a storage backend path.
///
/// Strips a trailing `/_data` suffix and takes the last path segment.
/// Permissive: an absent suffix makes the trim a no-op rather than an error.
pub fn volume_source_name(source: &str) -> String {
    let trimmed = source.strip_suffix(VOLUME_DATA_SUFFIX).unwrap_or(source);
    match trimmed.rsplit('/').next() {
        Some(name) => name.to_string(),
        None => trimmed.to_string(),
    }
}

/// Render device mappings as `hostPath:containerPath` strings.
pub fn format_devices(devices: &[DeviceMapping]) -> Vec<String> {
    devices
        .iter()
        .map(|device| {
            format!(
                "{}:{}",
                device.path_on_host.as_deref().unwrap_or_default(),
                device.path_in_container.as_deref().unwrap_or_default(),
            )
        })
        .collect()
}

/// Map per-network endpoint settings into attachments keyed by network name.
pub fn format_networks(
    networks: &HashMap<String, EndpointSettings>,
) -> BTreeMap<String, NetworkAttachment> {
    networks
        .iter()
        .map(|(name, endpoint)| {
            (
                name.clone(),
                NetworkAttachment {
                    aliases: endpoint.aliases.clone().unwrap_or_default(),
                    ipv4_address: endpoint.ip_address.clone().unwrap_or_default(),
                    ipv6_address: endpoint.global_ipv6_address.clone().unwrap_or_default(),
                },
            )
        })
        .collect()
}

/// Convert a runtime health-check config to whole-second fields.
///
/// The runtime reports durations in nanoseconds; sub-second precision is
/// discarded by truncation.
pub fn format_healthcheck(config: &HealthConfig) -> HealthcheckSpec {
    HealthcheckSpec {
        test: config.test.clone().unwrap_or_default(),
        interval: config.interval.unwrap_or_default() / NANOS_PER_SEC,
        timeout: config.timeout.unwrap_or_default() / NANOS_PER_SEC,
        retries: config.retries.unwrap_or_default(),
        start_period: config.start_period.unwrap_or_default() / NANOS_PER_SEC,
    }
}

/// A two-part `user` string whose parts are not both numeric.
#[derive(Debug, thiserror::Error)]
#[error("malformed uid:gid specification {raw:?}")]
pub struct ParseUserError {
    pub raw: String,
}

/// Parse a container `user` string into numeric UID/GID.
///
/// Only strings of exactly two colon-separated parts carry a numeric
/// identity; both parts must then parse as integers or the whole export is
/// considered to have hit corrupted configuration. Zero or one part means no
/// numeric identity, which is not an error.
pub fn parse_user(user: &str) -> Result<Option<(i64, i64)>, ParseUserError> {
    let parts: Vec<&str> = user.split(':').collect();
    if parts.len() != 2 {
        return Ok(None);
    }

    let err = || ParseUserError {
        raw: user.to_string(),
    };
    let uid: i64 = parts[0].parse().map_err(|_| err())?;
    let gid: i64 = parts[1].parse().map_err(|_| err())?;
    Ok(Some((uid, gid)))
}
