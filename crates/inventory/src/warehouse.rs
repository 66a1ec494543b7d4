use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, WarehouseId};

/// A storage location. Items reference it through `warehouse_id`; the
/// warehouse itself keeps no list of its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
    pub location: String,
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWarehouse {
    pub name: String,
    pub location: String,
}

impl NewWarehouse {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("warehouse name cannot be empty"));
        }
        Ok(())
    }

    pub(crate) fn into_warehouse(self, id: WarehouseId) -> Warehouse {
        Warehouse {
            id,
            name: self.name,
            location: self.location,
        }
    }
}

/// Partial update for a warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehousePatch {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl WarehousePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(DomainError::validation("warehouse name cannot be empty"));
        }
        Ok(())
    }

    pub fn apply(&self, warehouse: &mut Warehouse) {
        if let Some(name) = &self.name {
            warehouse.name = name.clone();
        }
        if let Some(location) = &self.location {
            warehouse.location = location.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_location_only() {
        let mut warehouse =
            NewWarehouse::new("Central Warehouse", "New York, NY").into_warehouse(WarehouseId::new());

        WarehousePatch::new().location("Newark, NJ").apply(&mut warehouse);

        assert_eq!(warehouse.name, "Central Warehouse");
        assert_eq!(warehouse.location, "Newark, NJ");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = NewWarehouse::new(" ", "Nowhere").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(WarehousePatch::new().name("").validate().is_err());
    }
}
