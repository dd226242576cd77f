// ABOUTME: Translation of live runtime state into a declarative backup document.
// ABOUTME: Field normalizers, service/network translators, and the aggregator.

mod backup;
mod document;
mod error;
mod network;
mod normalize;
mod service;

pub use backup::{BACKUP_FILENAME, export, snapshot, write_document};
pub use document::{
    BackupDocument, HealthcheckSpec, IpamPool, IpamSpec, NetworkAttachment, NetworkRecord,
    ServiceRecord, VolumeMount,
};
pub use error::{ExportError, ExportErrorKind};
pub use network::{is_default_network, translate_network};
pub use normalize::{
    ParseUserError, format_devices, format_healthcheck, format_mounts, format_networks,
    format_ports, parse_user, volume_source_name,
};
pub use service::translate_container;
