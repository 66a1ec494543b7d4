use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId, WarehouseId};

/// A stock record: one named product held in one warehouse.
///
/// The same product kept in two warehouses is two records sharing a `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u64,
    /// Unit price in the smallest currency unit (e.g. cents).
    pub price: u64,
    pub expiry_date: NaiveDate,
    pub warehouse_id: WarehouseId,
    /// Low-stock trigger level (inclusive).
    pub threshold: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// True when stock has fallen to or below the configured threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.threshold
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields supplied when creating an item; id and timestamps are assigned by
/// the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub price: u64,
    pub expiry_date: NaiveDate,
    pub warehouse_id: WarehouseId,
    pub threshold: u64,
}

impl NewItem {
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(())
    }

    pub(crate) fn into_item(self, id: ItemId, now: DateTime<Utc>) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            expiry_date: self.expiry_date,
            warehouse_id: self.warehouse_id,
            threshold: self.threshold,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for an item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u64>,
    pub price: Option<u64>,
    pub expiry_date: Option<NaiveDate>,
    pub warehouse_id: Option<WarehouseId>,
    pub threshold: Option<u64>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    pub fn warehouse_id(mut self, warehouse_id: WarehouseId) -> Self {
        self.warehouse_id = Some(warehouse_id);
        self
    }

    pub fn threshold(mut self, threshold: u64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(())
    }

    /// Merge the patch into `item`. Does not touch `id` or timestamps.
    pub fn apply(&self, item: &mut InventoryItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(expiry_date) = self.expiry_date {
            item.expiry_date = expiry_date;
        }
        if let Some(warehouse_id) = self.warehouse_id {
            item.warehouse_id = warehouse_id;
        }
        if let Some(threshold) = self.threshold {
            item.threshold = threshold;
        }
    }
}
