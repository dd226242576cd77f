// ABOUTME: Container runtime detection and the bollard-backed snapshot client.
// ABOUTME: Supports Docker and Podman via the Docker-compatible API.

mod bollard;
mod detection;
mod error;
pub(crate) mod traits;
mod types;

pub use bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{SnapshotError, SnapshotOps};
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};
