//! Training certification registry.
//!
//! Trainer authorization is scoped per equipment type: the administrator
//! grants `(trainer, equipment_type)` pairs, and a trainer may only certify
//! users on the types it is authorized for. Certifications expire by logical
//! time and can be revoked — a field flip, never a removal — by the
//! administrator or the original certifier.

use std::collections::HashMap;

use crate::access::AdminAcl;
use crate::error::TrainingError;
use crate::types::{BlockHeight, EquipmentType, Principal};

/// One user certification on one equipment type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Certification {
    pub certified_by: Principal,
    pub certification_date: BlockHeight,
    pub expiration_date: BlockHeight,
    pub valid: bool,
}

/// Trainer ACL plus the `(user, equipment_type)`-keyed certification map.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrainingRegistry {
    trainers: AdminAcl<(Principal, EquipmentType)>,
    certifications: HashMap<(Principal, EquipmentType), Certification>,
}

impl TrainingRegistry {
    /// Creates an empty registry with `admin` as the fixed administrator.
    pub fn new(admin: Principal) -> Self {
        TrainingRegistry {
            trainers: AdminAcl::new(admin),
            certifications: HashMap::new(),
        }
    }

    /// The fixed administrator identity.
    pub fn admin(&self) -> &Principal {
        self.trainers.admin()
    }

    /// Authorizes `(trainer, equipment_type)`. Admin-only; idempotent.
    pub fn add_trainer(
        &mut self,
        caller: &Principal,
        trainer: Principal,
        equipment_type: EquipmentType,
    ) -> Result<(), TrainingError> {
        self.trainers.grant(caller, (trainer, equipment_type.clone()))?;
        tracing::debug!(trainer = %trainer, %equipment_type, "trainer authorized");
        Ok(())
    }

    /// Clears the `(trainer, equipment_type)` authorization flag. Admin-only.
    pub fn remove_trainer(
        &mut self,
        caller: &Principal,
        trainer: Principal,
        equipment_type: EquipmentType,
    ) -> Result<(), TrainingError> {
        self.trainers.revoke(caller, (trainer, equipment_type.clone()))?;
        tracing::debug!(trainer = %trainer, %equipment_type, "trainer authorization cleared");
        Ok(())
    }

    /// Whether `(identity, equipment_type)` currently holds a true trainer
    /// flag. Pure read.
    pub fn is_trainer(&self, identity: &Principal, equipment_type: &EquipmentType) -> bool {
        self.trainers
            .is_authorized(&(*identity, equipment_type.clone()))
    }

    /// Writes (or overwrites) the certification of `user` on
    /// `equipment_type`, valid from `now` until `now + validity_period`
    /// inclusive. The expiration saturates at the maximum height rather
    /// than wrapping.
    ///
    /// Fails with [`TrainingError::NotAuthorizedTrainer`] unless
    /// `(caller, equipment_type)` is an authorized trainer pair.
    pub fn certify_user(
        &mut self,
        caller: Principal,
        user: Principal,
        equipment_type: EquipmentType,
        validity_period: u64,
        now: BlockHeight,
    ) -> Result<(), TrainingError> {
        if !self.trainers.is_authorized(&(caller, equipment_type.clone())) {
            return Err(TrainingError::NotAuthorizedTrainer);
        }
        let certification = Certification {
            certified_by: caller,
            certification_date: now,
            expiration_date: now.saturating_add(validity_period),
            valid: true,
        };
        tracing::debug!(
            user = %user,
            %equipment_type,
            expires = certification.expiration_date,
            "user certified"
        );
        self.certifications
            .insert((user, equipment_type), certification);
        Ok(())
    }

    /// Invalidates the certification of `user` on `equipment_type`, leaving
    /// the date fields untouched.
    ///
    /// Fails with [`TrainingError::NotFound`] if no certification exists and
    /// with [`TrainingError::NotAuthorized`] unless `caller` is the
    /// administrator or the original certifier.
    pub fn revoke_certification(
        &mut self,
        caller: &Principal,
        user: Principal,
        equipment_type: EquipmentType,
    ) -> Result<(), TrainingError> {
        let admin = *self.trainers.admin();
        let certification = self
            .certifications
            .get_mut(&(user, equipment_type))
            .ok_or(TrainingError::NotFound)?;
        if *caller != admin && *caller != certification.certified_by {
            return Err(TrainingError::NotAuthorized);
        }
        certification.valid = false;
        tracing::debug!(user = %user, "certification revoked");
        Ok(())
    }

    /// Whether `user` holds an active certification on `equipment_type` at
    /// logical time `now`: the record must exist, be valid, and not yet be
    /// expired (`expiration_date >= now`). Pure read.
    pub fn is_certified(
        &self,
        user: &Principal,
        equipment_type: &EquipmentType,
        now: BlockHeight,
    ) -> bool {
        match self.certifications.get(&(*user, equipment_type.clone())) {
            Some(certification) => certification.valid && certification.expiration_date >= now,
            None => false,
        }
    }

    /// Looks up the certification record for `(user, equipment_type)`,
    /// whether or not it is still active. Pure read.
    pub fn certification(
        &self,
        user: &Principal,
        equipment_type: &EquipmentType,
    ) -> Option<&Certification> {
        self.certifications.get(&(*user, equipment_type.clone()))
    }
}
