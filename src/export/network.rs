// ABOUTME: Network translator: one canonical record per user-defined network.
// ABOUTME: Built-in default networks are filtered out before translation.

use super::document::{IpamPool, IpamSpec, NetworkRecord};
use bollard::models::NetworkInspect;

/// Networks every runtime ships with; never part of a backup.
pub const DEFAULT_NETWORKS: [&str; 3] = ["bridge", "host", "none"];

/// Whether a network is one of the runtime's built-in defaults.
pub fn is_default_network(name: &str) -> bool {
    DEFAULT_NETWORKS.contains(&name)
}

/// Translate one non-default network's inspection into a canonical record.
///
/// IPAM pool configs keep the order the runtime reported them in.
pub fn translate_network(details: &NetworkInspect) -> NetworkRecord {
    let ipam = details.ipam.clone().unwrap_or_default();

    NetworkRecord {
        name: details.name.clone().unwrap_or_default(),
        driver: details.driver.clone().unwrap_or_default(),
        internal: details.internal.unwrap_or_default(),
        attachable: details.attachable.unwrap_or_default(),
        enable_ipv6: details.enable_ipv6.unwrap_or_default(),
        labels: details
            .labels
            .clone()
            .unwrap_or_default()
            .into_iter()
            .collect(),
        ipam: IpamSpec {
            driver: ipam.driver.clone().unwrap_or_default(),
            config: ipam
                .config
                .unwrap_or_default()
                .iter()
                .map(|pool| IpamPool {
                    subnet: pool.subnet.clone().unwrap_or_default(),
                    gateway: pool.gateway.clone().unwrap_or_default(),
                })
                .collect(),
        },
    }
}
