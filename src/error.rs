//!
//! Error types for the registry operations.
//!
//! Errors are values: every gated operation returns a `Result` with one of
//! the enums below, never a panic. Each enum also exposes the small integer
//! code the simulated contract boundary reports for that failure, via
//! `code()`. Codes are local to a component (and, for training, to an
//! operation family) — they are not globally unified.

/// Failures raised by the admin-gated authorization map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AclError {
    /// An administrator-only mutation was attempted by another principal.
    #[error("caller is not the administrator")]
    NotAdmin,
}

/// Failures raised by the equipment registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EquipmentError {
    /// The referenced equipment id has never been assigned.
    #[error("equipment not found")]
    NotFound,
    /// A mutation was attempted by someone other than the stored owner.
    #[error("caller does not own this equipment")]
    NotOwner,
}

impl EquipmentError {
    /// Numeric code surfaced at the contract boundary.
    pub fn code(&self) -> u32 {
        match self {
            EquipmentError::NotFound => 1,
            EquipmentError::NotOwner => 2,
        }
    }
}

/// Failures raised by the sanitization verification registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SanitizationError {
    /// Verifier-set mutation attempted by a non-administrator.
    #[error("caller is not the administrator")]
    NotAdmin,
    /// The caller is not in the authorized verifier set.
    #[error("caller is not an authorized verifier")]
    NotAuthorized,
}

impl SanitizationError {
    /// Numeric code surfaced at the contract boundary.
    pub fn code(&self) -> u32 {
        match self {
            SanitizationError::NotAdmin => 1,
            SanitizationError::NotAuthorized => 2,
        }
    }
}

impl From<AclError> for SanitizationError {
    fn from(err: AclError) -> Self {
        match err {
            AclError::NotAdmin => SanitizationError::NotAdmin,
        }
    }
}

/// Failures raised by the training certification registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrainingError {
    /// Trainer-set mutation attempted by a non-administrator.
    #[error("caller is not the administrator")]
    NotAdmin,
    /// The caller is not an authorized trainer for this equipment type.
    #[error("caller is not an authorized trainer for this equipment type")]
    NotAuthorizedTrainer,
    /// No certification exists for the referenced (user, equipment type).
    #[error("certification not found")]
    NotFound,
    /// Revocation attempted by someone other than the administrator or the
    /// original certifier.
    #[error("caller may not revoke this certification")]
    NotAuthorized,
}

impl TrainingError {
    /// Numeric code surfaced at the contract boundary. Codes are scoped to
    /// the operation family: `NotAdmin` and `NotFound` both report 1 because
    /// they can never arise from the same operation.
    pub fn code(&self) -> u32 {
        match self {
            TrainingError::NotAdmin | TrainingError::NotFound => 1,
            TrainingError::NotAuthorizedTrainer | TrainingError::NotAuthorized => 2,
        }
    }
}

impl From<AclError> for TrainingError {
    fn from(err: AclError) -> Self {
        match err {
            AclError::NotAdmin => TrainingError::NotAdmin,
        }
    }
}
