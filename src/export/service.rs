// ABOUTME: Service translator: one canonical record per inspected container.
// ABOUTME: Direct copies where shapes match, field normalizers for the rest.

use super::document::ServiceRecord;
use super::error::ExportError;
use super::normalize;
use bollard::models::ContainerInspectResponse;

/// Translate one fully-inspected container into a canonical service record.
///
/// The record key (and `name` field) is the runtime-assigned container name
/// with its leading `/` stripped. Fails only on a malformed `uid:gid` user
/// specification; every other field degrades to its empty value when the
/// runtime omits it.
pub fn translate_container(details: &ContainerInspectResponse) -> Result<ServiceRecord, ExportError> {
    let name = details
        .name
        .as_deref()
        .unwrap_or_default()
        .trim_start_matches('/')
        .to_string();

    let config = details.config.clone().unwrap_or_default();
    let host_config = details.host_config.clone().unwrap_or_default();
    let network_settings = details.network_settings.clone().unwrap_or_default();

    let user = config.user.clone().unwrap_or_default();
    let ids = normalize::parse_user(&user).map_err(|source| ExportError::InvalidUserSpec {
        container: name.clone(),
        source,
    })?;
    let (uid, gid) = match ids {
        Some((uid, gid)) => (Some(uid), Some(gid)),
        None => (None, None),
    };

    // The runtime reports MAC per network endpoint; take the first
    // (name-ordered) endpoint that carries one.
    let mac_address = network_settings
        .networks
        .as_ref()
        .map(|networks| {
            let mut names: Vec<&String> = networks.keys().collect();
            names.sort();
            names
                .into_iter()
                .filter_map(|name| networks[name].mac_address.as_deref())
                .find(|mac| !mac.is_empty())
                .unwrap_or_default()
                .to_string()
        })
        .unwrap_or_default();

    Ok(ServiceRecord {
        name,
        image: config.image.clone().unwrap_or_default(),
        environment: config.env.clone().unwrap_or_default(),
        labels: config
            .labels
            .clone()
            .unwrap_or_default()
            .into_iter()
            .collect(),
        command: config.cmd.clone().unwrap_or_default().join(" "),
        entrypoint: config.entrypoint.clone().unwrap_or_default().join(" "),
        working_dir: config.working_dir.clone().unwrap_or_default(),
        user,
        uid,
        gid,
        tty: config.tty.unwrap_or_default(),
        stdin_open: config.open_stdin.unwrap_or_default(),
        hostname: config.hostname.clone().unwrap_or_default(),
        domainname: config.domainname.clone().unwrap_or_default(),
        mac_address,
        network_mode: host_config.network_mode.clone().unwrap_or_default(),
        stop_signal: config.stop_signal.clone().unwrap_or_default(),
        healthcheck: config
            .healthcheck
            .as_ref()
            .map(normalize::format_healthcheck)
            .unwrap_or_default(),
        dns: host_config.dns.clone().unwrap_or_default(),
        dns_search: host_config.dns_search.clone().unwrap_or_default(),
        extra_hosts: host_config.extra_hosts.clone().unwrap_or_default(),
        security_opt: host_config.security_opt.clone().unwrap_or_default(),
        storage_opt: host_config
            .storage_opt
            .clone()
            .unwrap_or_default()
            .into_iter()
            .collect(),
        sysctls: host_config
            .sysctls
            .clone()
            .unwrap_or_default()
            .into_iter()
            .collect(),
        isolation: host_config
            .isolation
            .map(|i| i.to_string())
            .unwrap_or_default(),
        cap_add: host_config.cap_add.clone().unwrap_or_default(),
        cap_drop: host_config.cap_drop.clone().unwrap_or_default(),
        privileged: host_config.privileged.unwrap_or_default(),
        ports: network_settings
            .ports
            .as_ref()
            .map(normalize::format_ports)
            .unwrap_or_default(),
        volumes: details
            .mounts
            .as_deref()
            .map(normalize::format_mounts)
            .unwrap_or_default(),
        networks: network_settings
            .networks
            .as_ref()
            .map(normalize::format_networks)
            .unwrap_or_default(),
        restart: host_config
            .restart_policy
            .as_ref()
            .and_then(|policy| policy.name)
            .map(|name| name.to_string())
            .unwrap_or_default(),
        devices: host_config
            .devices
            .as_deref()
            .map(normalize::format_devices)
            .unwrap_or_default(),
        depends_on: Vec::new(),
        expose: Vec::new(),
    })
}
