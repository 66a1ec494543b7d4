use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, WarehouseId};
use stockroom_events::Event;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item_id: ItemId,
    pub warehouse_id: WarehouseId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdated {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDeleted {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: WarehouseAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseAdded {
    pub warehouse_id: WarehouseId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: WarehouseUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseUpdated {
    pub warehouse_id: WarehouseId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: WarehouseDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseDeleted {
    pub warehouse_id: WarehouseId,
    /// Items still pointing at the deleted warehouse.
    pub orphaned_items: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockTransferred.
///
/// Also the receipt returned by `InventoryService::transfer_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTransferred {
    pub source_item_id: ItemId,
    pub target_item_id: ItemId,
    pub from_warehouse_id: WarehouseId,
    pub to_warehouse_id: WarehouseId,
    pub quantity: u64,
    /// True when the target record did not exist and was cloned from the source.
    pub created_target: bool,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemUpdated(ItemUpdated),
    ItemDeleted(ItemDeleted),
    WarehouseAdded(WarehouseAdded),
    WarehouseUpdated(WarehouseUpdated),
    WarehouseDeleted(WarehouseDeleted),
    StockTransferred(StockTransferred),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemUpdated(_) => "inventory.item.updated",
            InventoryEvent::ItemDeleted(_) => "inventory.item.deleted",
            InventoryEvent::WarehouseAdded(_) => "inventory.warehouse.added",
            InventoryEvent::WarehouseUpdated(_) => "inventory.warehouse.updated",
            InventoryEvent::WarehouseDeleted(_) => "inventory.warehouse.deleted",
            InventoryEvent::StockTransferred(_) => "inventory.stock.transferred",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::ItemUpdated(e) => e.occurred_at,
            InventoryEvent::ItemDeleted(e) => e.occurred_at,
            InventoryEvent::WarehouseAdded(e) => e.occurred_at,
            InventoryEvent::WarehouseUpdated(e) => e.occurred_at,
            InventoryEvent::WarehouseDeleted(e) => e.occurred_at,
            InventoryEvent::StockTransferred(e) => e.occurred_at,
        }
    }
}
