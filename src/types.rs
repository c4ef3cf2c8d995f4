use std::fmt;

// --- Identities -------------------------------------------------------------

/// An opaque address-like token identifying the party invoking an operation.
///
/// Principals are compared for equality and hashed as map keys; they carry no
/// ordering. The 20 bytes correspond to the hashed account address of the
/// ledger environment this core simulates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PrincipalBytes(#[serde(with = "serde_bytes")] pub [u8; 20]);

pub type Principal = PrincipalBytes;

impl fmt::Display for PrincipalBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

// --- Logical time -----------------------------------------------------------

/// Externally supplied monotonic counter, analogous to a ledger block height.
///
/// The core reads logical time as an operation parameter and never advances
/// it; the surrounding harness decides when time moves.
pub type BlockHeight = u64;

// --- Registry keys ----------------------------------------------------------

/// Sequential identifier for a registered piece of equipment.
///
/// Assigned by [`crate::registry::EquipmentRegistry::register`], starting at
/// 1 and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(pub u64);

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of equipment a trainer is authorized for and a user is certified
/// on (e.g. "Ventilator"). Hashable key component, no interning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EquipmentType(pub String);

impl From<&str> for EquipmentType {
    fn from(s: &str) -> Self {
        EquipmentType(s.to_string())
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
