// ABOUTME: Error types for the export pipeline.
// ABOUTME: Separates bad-input-data failures from runtime-availability failures.

use super::normalize::ParseUserError;
use crate::runtime::SnapshotError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate an export run.
///
/// Every variant is terminal: nothing is retried and no partial document is
/// written. `InvalidUserSpec` is the one class that originates from the data
/// itself rather than from the runtime connection, so callers can tell the
/// two apart.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("container {container}: {source}")]
    InvalidUserSpec {
        container: String,
        source: ParseUserError,
    },

    #[error("failed to serialize backup document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write backup to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportErrorKind {
    /// The runtime could not be reached at all.
    RuntimeUnavailable,
    /// Listing containers or networks failed.
    Enumeration,
    /// A single-entity detail fetch failed.
    Inspection,
    /// The inspected data itself is malformed.
    BadInput,
    /// Serializing or persisting the finished document failed.
    Persistence,
}

impl ExportError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ExportErrorKind {
        match self {
            ExportError::Snapshot(source) => match source {
                SnapshotError::ConnectionFailed(_) => ExportErrorKind::RuntimeUnavailable,
                SnapshotError::ListContainers(_) | SnapshotError::ListNetworks(_) => {
                    ExportErrorKind::Enumeration
                }
                SnapshotError::ContainerNotFound(_)
                | SnapshotError::NetworkNotFound(_)
                | SnapshotError::InspectContainer { .. }
                | SnapshotError::InspectNetwork { .. } => ExportErrorKind::Inspection,
            },
            ExportError::InvalidUserSpec { .. } => ExportErrorKind::BadInput,
            ExportError::Serialize(_) | ExportError::Write { .. } => ExportErrorKind::Persistence,
        }
    }
}
