//! Inventory domain module.
//!
//! Items and warehouses live in two in-memory stores owned by
//! [`InventoryService`], which is the only way to change them. Every mutation
//! is copy-on-write: snapshots handed out earlier keep showing the state they
//! were taken from.

pub mod event;
pub mod item;
pub mod records;
pub mod seed;
pub mod service;
pub mod store;
pub mod warehouse;

pub use event::{
    InventoryEvent, ItemAdded, ItemDeleted, ItemUpdated, StockTransferred, WarehouseAdded,
    WarehouseDeleted, WarehouseUpdated,
};
pub use item::{InventoryItem, ItemPatch, NewItem};
pub use records::{SaleRecord, WastageRecord};
pub use seed::mock_inventory;
pub use service::InventoryService;
pub use store::{Snapshot, Store};
pub use warehouse::{NewWarehouse, Warehouse, WarehousePatch};
