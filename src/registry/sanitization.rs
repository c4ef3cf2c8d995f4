//! Sanitization verification registry.
//!
//! An administrator fixed at construction curates the verifier set; any
//! currently authorized verifier may record a sanitization event for a piece
//! of equipment. Records are keyed by the genuine composite
//! `(EquipmentId, BlockHeight)` tuple, so history accumulates across
//! distinct logical times while a second verification of the same equipment
//! at the same height overwrites the first (last-write-wins, no conflict
//! signal).

use std::collections::HashMap;

use crate::access::AdminAcl;
use crate::error::SanitizationError;
use crate::types::{BlockHeight, EquipmentId, Principal};

/// One recorded sanitization event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SanitizationRecord {
    pub verifier: Principal,
    pub method_used: String,
    pub notes: String,
    pub verified: bool,
}

/// Verifier ACL plus the `(equipment, height)`-keyed record map.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SanitizationRegistry {
    verifiers: AdminAcl<Principal>,
    records: HashMap<(EquipmentId, BlockHeight), SanitizationRecord>,
}

impl SanitizationRegistry {
    /// Creates an empty registry with `admin` as the fixed administrator.
    /// The verifier set starts empty — even the admin must be granted before
    /// it can verify.
    pub fn new(admin: Principal) -> Self {
        SanitizationRegistry {
            verifiers: AdminAcl::new(admin),
            records: HashMap::new(),
        }
    }

    /// The fixed administrator identity.
    pub fn admin(&self) -> &Principal {
        self.verifiers.admin()
    }

    /// Marks `verifier` as authorized. Admin-only; idempotent.
    pub fn add_verifier(
        &mut self,
        caller: &Principal,
        verifier: Principal,
    ) -> Result<(), SanitizationError> {
        self.verifiers.grant(caller, verifier)?;
        tracing::debug!(verifier = %verifier, "verifier authorized");
        Ok(())
    }

    /// Clears `verifier`'s authorization flag. Admin-only.
    pub fn remove_verifier(
        &mut self,
        caller: &Principal,
        verifier: Principal,
    ) -> Result<(), SanitizationError> {
        self.verifiers.revoke(caller, verifier)?;
        tracing::debug!(verifier = %verifier, "verifier authorization cleared");
        Ok(())
    }

    /// Records a sanitization of `equipment_id` at logical time `now`.
    ///
    /// Fails with [`SanitizationError::NotAuthorized`] unless `caller` is a
    /// currently authorized verifier. An existing record at the exact
    /// `(equipment_id, now)` key is overwritten.
    pub fn verify_sanitization(
        &mut self,
        caller: Principal,
        equipment_id: EquipmentId,
        now: BlockHeight,
        method_used: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<(), SanitizationError> {
        if !self.verifiers.is_authorized(&caller) {
            return Err(SanitizationError::NotAuthorized);
        }
        let record = SanitizationRecord {
            verifier: caller,
            method_used: method_used.into(),
            notes: notes.into(),
            verified: true,
        };
        tracing::debug!(%equipment_id, height = now, method = %record.method_used, "sanitization recorded");
        self.records.insert((equipment_id, now), record);
        Ok(())
    }

    /// Looks up the record for `equipment_id` at `timestamp`. Pure read.
    pub fn record(
        &self,
        equipment_id: EquipmentId,
        timestamp: BlockHeight,
    ) -> Option<&SanitizationRecord> {
        self.records.get(&(equipment_id, timestamp))
    }

    /// Whether `identity` currently holds a true verifier flag. Pure read.
    pub fn is_verifier(&self, identity: &Principal) -> bool {
        self.verifiers.is_authorized(identity)
    }
}
