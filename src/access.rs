//!
//! Admin-gated authorization map.
//!
//! Two of the three registries gate their sensitive writes on a capability
//! set curated by a fixed administrator: the sanitization registry keys its
//! set by verifier principal, the training registry by (trainer, equipment
//! type) pair. [`AdminAcl`] is that shared core, generic over the key.
//!
//! Authorization is stored as a boolean flag per key rather than key
//! presence: `revoke` flips the flag to false and a later `grant` flips it
//! back, so the map records every principal the administrator has ever
//! touched.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::AclError;
use crate::types::Principal;

/// A boolean flag map mutable only by the administrator fixed at
/// construction. Lookups are open to everyone.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminAcl<K: Eq + Hash> {
    admin: Principal,
    grants: HashMap<K, bool>,
}

impl<K: Eq + Hash> AdminAcl<K> {
    /// Creates an empty map with `admin` as the only principal allowed to
    /// mutate it. The administrator identity is immutable afterwards.
    pub fn new(admin: Principal) -> Self {
        AdminAcl {
            admin,
            grants: HashMap::new(),
        }
    }

    /// The fixed administrator identity.
    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    fn check_admin(&self, caller: &Principal) -> Result<(), AclError> {
        if *caller == self.admin {
            Ok(())
        } else {
            Err(AclError::NotAdmin)
        }
    }

    /// Marks `key` as authorized. Fails with [`AclError::NotAdmin`] unless
    /// `caller` is the administrator; idempotent otherwise.
    pub fn grant(&mut self, caller: &Principal, key: K) -> Result<(), AclError> {
        self.check_admin(caller)?;
        self.grants.insert(key, true);
        Ok(())
    }

    /// Clears the authorization flag for `key`. Fails with
    /// [`AclError::NotAdmin`] unless `caller` is the administrator. Revoking
    /// a key that was never granted is permitted and records a false flag.
    pub fn revoke(&mut self, caller: &Principal, key: K) -> Result<(), AclError> {
        self.check_admin(caller)?;
        self.grants.insert(key, false);
        Ok(())
    }

    /// Whether `key` currently holds a true authorization flag. Pure read.
    pub fn is_authorized(&self, key: &K) -> bool {
        self.grants.get(key).copied().unwrap_or(false)
    }
}
