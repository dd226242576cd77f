// ABOUTME: Local runtime detection for Docker and Podman.
// ABOUTME: Probes well-known sockets or honors an explicit config override.

use super::types::{RuntimeConfig, RuntimeInfo, RuntimeType};
use std::path::Path;

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,
}

/// Detect the container runtime on the local system.
///
/// Probe order (when not explicitly configured):
/// 1. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 2. Rootful Podman socket (`/run/podman/podman.sock`)
/// 3. Docker socket (`/var/run/docker.sock`)
///
/// If `config` names a runtime, it takes precedence and no probing happens.
pub fn detect_local(config: Option<&RuntimeConfig>) -> Result<RuntimeInfo, DetectionError> {
    if let Some(cfg) = config
        && let Some(runtime_type) = cfg.runtime
    {
        let socket_path = cfg
            .socket
            .clone()
            .unwrap_or_else(|| default_socket_path(runtime_type));
        return Ok(RuntimeInfo {
            runtime_type,
            socket_path,
        });
    }

    for (runtime_type, socket_path) in candidate_sockets() {
        if Path::new(&socket_path).exists() {
            return Ok(RuntimeInfo {
                runtime_type,
                socket_path,
            });
        }
    }

    Err(DetectionError::NoRuntimeFound)
}

fn candidate_sockets() -> Vec<(RuntimeType, String)> {
    let mut candidates = Vec::new();

    if let Some(uid) = get_uid() {
        candidates.push((
            RuntimeType::Podman,
            format!("/run/user/{uid}/podman/podman.sock"),
        ));
    }
    candidates.push((RuntimeType::Podman, ROOTFUL_PODMAN.to_string()));
    candidates.push((RuntimeType::Docker, DOCKER_SOCKET.to_string()));

    candidates
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

fn default_socket_path(runtime: RuntimeType) -> String {
    match runtime {
        RuntimeType::Docker => DOCKER_SOCKET.to_string(),
        RuntimeType::Podman => ROOTFUL_PODMAN.to_string(),
    }
}
