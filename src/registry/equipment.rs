//! Equipment inventory registry.
//!
//! Registration is open to any caller and assigns sequential ids; the only
//! gated mutation is the availability flip, which is reserved to the stored
//! owner. There is no deletion — an unavailable device stays in the map.

use std::collections::HashMap;

use crate::error::EquipmentError;
use crate::types::{BlockHeight, EquipmentId, Principal};

/// A registered piece of equipment. The owner is fixed at registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Equipment {
    pub owner: Principal,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub location: String,
    pub last_maintenance: BlockHeight,
}

/// Owned map from [`EquipmentId`] to [`Equipment`], plus the id counter.
///
/// Constructed empty; ids start at 1 and are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EquipmentRegistry {
    items: HashMap<EquipmentId, Equipment>,
    last_id: u64,
}

impl EquipmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers new equipment owned by `caller` and returns its id.
    ///
    /// Always succeeds — creation carries no access control. The new record
    /// starts available.
    pub fn register(
        &mut self,
        caller: Principal,
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        last_maintenance: BlockHeight,
    ) -> EquipmentId {
        self.last_id += 1;
        let id = EquipmentId(self.last_id);
        let equipment = Equipment {
            owner: caller,
            name: name.into(),
            description: description.into(),
            available: true,
            location: location.into(),
            last_maintenance,
        };
        tracing::debug!(%id, owner = %caller, name = %equipment.name, "equipment registered");
        self.items.insert(id, equipment);
        id
    }

    /// Replaces the `available` flag of `id`, leaving every other field
    /// unchanged.
    ///
    /// Fails with [`EquipmentError::NotFound`] if `id` was never assigned and
    /// with [`EquipmentError::NotOwner`] if `caller` is not the stored owner.
    /// Checks precede the write, so a failed call mutates nothing.
    pub fn update_availability(
        &mut self,
        caller: &Principal,
        id: EquipmentId,
        available: bool,
    ) -> Result<(), EquipmentError> {
        let equipment = self.items.get_mut(&id).ok_or(EquipmentError::NotFound)?;
        if equipment.owner != *caller {
            return Err(EquipmentError::NotOwner);
        }
        equipment.available = available;
        tracing::debug!(%id, available, "equipment availability updated");
        Ok(())
    }

    /// Looks up a record by id. Pure read, no access control.
    pub fn get(&self, id: EquipmentId) -> Option<&Equipment> {
        self.items.get(&id)
    }

    /// Highest id assigned so far; 0 while the registry is empty.
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
