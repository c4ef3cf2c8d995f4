pub mod equipment;
pub mod sanitization;
pub mod training;

// Re-export the primary types so `crate::registry::*` paths stay short.
pub use equipment::{Equipment, EquipmentRegistry};
pub use sanitization::{SanitizationRecord, SanitizationRegistry};
pub use training::{Certification, TrainingRegistry};
