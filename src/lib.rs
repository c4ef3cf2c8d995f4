#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Medshare-Core is a deterministic in-memory simulation of the three
//! state-tracking registries behind a medical equipment sharing ledger:
//! equipment inventory, sanitization verification, and training
//! certification.
//!
//! Each registry is an instance of the same pattern — an
//! authorization-gated keyed registry: an owned map from a typed key to a
//! record, where sensitive writes are gated by a caller-identity check
//! against a stored owner, a fixed administrator, or an admin-curated
//! authorization set. Caller identity and logical time (a block-height
//! analogue) are explicit parameters on every gated operation; the core
//! never reads ambient context and never advances time itself.
//!
//! Execution is single-threaded and synchronous. Gated operations validate
//! before they write, return typed errors rather than panicking, and leave
//! state untouched on failure.

// Module for shared identifier and logical-time types (Principal, EquipmentId, ...).
pub mod types;

// Module for per-component error enums and their contract-boundary codes.
pub mod error;

// Module for the generic admin-gated authorization map.
pub mod access;

// Module for the three registry instances.
pub mod registry;

// Re-export the primary surface at the crate root for easier access.
pub use access::AdminAcl;
pub use error::{AclError, EquipmentError, SanitizationError, TrainingError};
pub use registry::{
    Certification, Equipment, EquipmentRegistry, SanitizationRecord, SanitizationRegistry,
    TrainingRegistry,
};
pub use types::{BlockHeight, EquipmentId, EquipmentType, Principal, PrincipalBytes};
