//! Inventory service: the single owner of the item and warehouse stores.

use std::sync::Arc;

use stockroom_core::{Clock, DomainError, DomainResult, ItemId, SystemClock, WarehouseId};
use stockroom_events::{Event, EventBus, InMemoryEventBus, Subscription};

use crate::event::{
    InventoryEvent, ItemAdded, ItemDeleted, ItemUpdated, StockTransferred, WarehouseAdded,
    WarehouseDeleted, WarehouseUpdated,
};
use crate::item::{InventoryItem, ItemPatch, NewItem};
use crate::store::{Snapshot, Store};
use crate::warehouse::{NewWarehouse, Warehouse, WarehousePatch};

/// CRUD, stock transfer and low-stock queries over items and warehouses.
///
/// # Invariants
/// - A transfer never drives any quantity below zero and conserves the total
///   quantity of the transferred item name across warehouses.
/// - A failed operation leaves both stores untouched and publishes nothing.
/// - Every successful mutation publishes exactly one [`InventoryEvent`].
///
/// Referential integrity between items and warehouses is *not* enforced:
/// items may point at unknown warehouses, and deleting a warehouse leaves its
/// items in place (see [`InventoryService::orphaned_items`]).
pub struct InventoryService<B = InMemoryEventBus<InventoryEvent>> {
    items: Store<InventoryItem>,
    warehouses: Store<Warehouse>,
    clock: Arc<dyn Clock>,
    bus: B,
}

impl<B> core::fmt::Debug for InventoryService<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryService")
            .field("items", &self.items.len())
            .field("warehouses", &self.warehouses.len())
            .finish_non_exhaustive()
    }
}

impl InventoryService {
    /// Empty service on the wall clock with an in-memory change bus.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_parts(Arc::new(clock), InMemoryEventBus::new())
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> InventoryService<B>
where
    B: EventBus<InventoryEvent>,
{
    pub fn with_parts(clock: Arc<dyn Clock>, bus: B) -> Self {
        Self {
            items: Store::new(),
            warehouses: Store::new(),
            clock,
            bus,
        }
    }

    /// Subscribe to change notifications for every later mutation.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.bus.subscribe()
    }

    // ── queries ─────────────────────────────────────────────────────────────

    pub fn items(&self) -> Snapshot<InventoryItem> {
        self.items.snapshot()
    }

    pub fn warehouses(&self) -> Snapshot<Warehouse> {
        self.warehouses.snapshot()
    }

    pub fn item(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.get(&id)
    }

    pub fn warehouse(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.warehouses.get(&id)
    }

    /// Items whose quantity is at or below their threshold, in collection order.
    pub fn low_stock_items(&self) -> Vec<&InventoryItem> {
        self.items.iter().filter(|item| item.is_low_stock()).collect()
    }

    pub fn items_in_warehouse(&self, warehouse_id: WarehouseId) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item.warehouse_id == warehouse_id)
            .collect()
    }

    /// Items referencing a warehouse that does not exist.
    pub fn orphaned_items(&self) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| !self.warehouses.contains(&item.warehouse_id))
            .collect()
    }

    /// Sum of quantities across every record with this exact name.
    ///
    /// Fails when the sum does not fit in a `u64`.
    pub fn total_quantity_by_name(&self, name: &str) -> DomainResult<u64> {
        self.items
            .iter()
            .filter(|item| item.name == name)
            .try_fold(0u64, |total, item| {
                total.checked_add(item.quantity).ok_or_else(|| {
                    DomainError::invariant(format!("total quantity of '{name}' overflows"))
                })
            })
    }

    // ── items ───────────────────────────────────────────────────────────────

    pub fn add_item(&mut self, new_item: NewItem) -> DomainResult<InventoryItem> {
        new_item.validate()?;
        self.warn_if_unknown_warehouse(new_item.warehouse_id, "add_item");

        let now = self.clock.now();
        let item = new_item.into_item(ItemId::new(), now);
        self.items.insert(item.clone())?;

        tracing::info!(item_id = %item.id, name = %item.name, warehouse_id = %item.warehouse_id, "item added");
        self.publish(InventoryEvent::ItemAdded(ItemAdded {
            item_id: item.id,
            warehouse_id: item.warehouse_id,
            occurred_at: now,
        }));
        Ok(item)
    }

    /// Merge `patch` into the item and refresh `updated_at`.
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> DomainResult<InventoryItem> {
        patch.validate()?;
        if !self.items.contains(&id) {
            tracing::debug!(item_id = %id, "update_item: no such item");
            return Err(DomainError::not_found("item", id));
        }
        if let Some(warehouse_id) = patch.warehouse_id {
            self.warn_if_unknown_warehouse(warehouse_id, "update_item");
        }

        let now = self.clock.now();
        let updated = self
            .items
            .update(&id, |item| {
                patch.apply(item);
                item.updated_at = now;
            })
            .cloned()
            .ok_or_else(|| DomainError::not_found("item", id))?;

        tracing::info!(item_id = %id, "item updated");
        self.publish(InventoryEvent::ItemUpdated(ItemUpdated {
            item_id: id,
            occurred_at: now,
        }));
        Ok(updated)
    }

    pub fn delete_item(&mut self, id: ItemId) -> DomainResult<InventoryItem> {
        let removed = self.items.remove(&id).ok_or_else(|| {
            tracing::debug!(item_id = %id, "delete_item: no such item");
            DomainError::not_found("item", id)
        })?;

        tracing::info!(item_id = %id, name = %removed.name, "item deleted");
        self.publish(InventoryEvent::ItemDeleted(ItemDeleted {
            item_id: id,
            occurred_at: self.clock.now(),
        }));
        Ok(removed)
    }

    // ── warehouses ──────────────────────────────────────────────────────────

    pub fn add_warehouse(&mut self, new_warehouse: NewWarehouse) -> DomainResult<Warehouse> {
        new_warehouse.validate()?;
        let warehouse = new_warehouse.into_warehouse(WarehouseId::new());
        self.warehouses.insert(warehouse.clone())?;

        tracing::info!(warehouse_id = %warehouse.id, name = %warehouse.name, "warehouse added");
        self.publish(InventoryEvent::WarehouseAdded(WarehouseAdded {
            warehouse_id: warehouse.id,
            occurred_at: self.clock.now(),
        }));
        Ok(warehouse)
    }

    pub fn update_warehouse(
        &mut self,
        id: WarehouseId,
        patch: WarehousePatch,
    ) -> DomainResult<Warehouse> {
        patch.validate()?;
        let updated = self
            .warehouses
            .update(&id, |warehouse| patch.apply(warehouse))
            .cloned()
            .ok_or_else(|| {
                tracing::debug!(warehouse_id = %id, "update_warehouse: no such warehouse");
                DomainError::not_found("warehouse", id)
            })?;

        tracing::info!(warehouse_id = %id, "warehouse updated");
        self.publish(InventoryEvent::WarehouseUpdated(WarehouseUpdated {
            warehouse_id: id,
            occurred_at: self.clock.now(),
        }));
        Ok(updated)
    }

    /// Remove a warehouse. Its items are left in place and become orphans.
    pub fn delete_warehouse(&mut self, id: WarehouseId) -> DomainResult<Warehouse> {
        let removed = self.warehouses.remove(&id).ok_or_else(|| {
            tracing::debug!(warehouse_id = %id, "delete_warehouse: no such warehouse");
            DomainError::not_found("warehouse", id)
        })?;

        let orphaned_items = self.items_in_warehouse(id).len();
        if orphaned_items > 0 {
            tracing::warn!(warehouse_id = %id, orphaned_items, "deleted warehouse still holds items");
        }

        tracing::info!(warehouse_id = %id, name = %removed.name, "warehouse deleted");
        self.publish(InventoryEvent::WarehouseDeleted(WarehouseDeleted {
            warehouse_id: id,
            orphaned_items,
            occurred_at: self.clock.now(),
        }));
        Ok(removed)
    }

    // ── transfer ────────────────────────────────────────────────────────────

    /// Move `quantity` units of an item into `target_warehouse_id`.
    ///
    /// The units land on the target warehouse's record with the same name, or
    /// on a new record cloned from the source (same name, category, price,
    /// expiry and threshold) when there is none. The source is decremented by
    /// the same amount.
    ///
    /// Every check runs before anything is written, so an error means nothing
    /// changed.
    pub fn transfer_item(
        &mut self,
        item_id: ItemId,
        target_warehouse_id: WarehouseId,
        quantity: u64,
    ) -> DomainResult<StockTransferred> {
        if quantity == 0 {
            return Err(DomainError::validation("transfer quantity must be positive"));
        }

        let source = self.items.get(&item_id).ok_or_else(|| {
            tracing::debug!(item_id = %item_id, "transfer_item: no such item");
            DomainError::not_found("item", item_id)
        })?;

        if source.warehouse_id == target_warehouse_id {
            return Err(DomainError::validation(
                "target warehouse must differ from the source warehouse",
            ));
        }

        if quantity > source.quantity {
            tracing::warn!(
                item_id = %item_id,
                requested = quantity,
                available = source.quantity,
                "transfer rejected: insufficient stock"
            );
            return Err(DomainError::invariant(format!(
                "cannot transfer {quantity} units, only {} available",
                source.quantity
            )));
        }

        let existing_target = self
            .items
            .iter()
            .find(|item| item.warehouse_id == target_warehouse_id && item.name == source.name)
            .map(|item| (item.id, item.quantity));

        if existing_target.is_some_and(|(_, held)| held.checked_add(quantity).is_none()) {
            return Err(DomainError::invariant("target quantity would overflow"));
        }

        self.warn_if_unknown_warehouse(target_warehouse_id, "transfer_item");

        let now = self.clock.now();
        let from_warehouse_id = source.warehouse_id;
        let template = source.clone();

        let (target_item_id, created_target) = match existing_target {
            Some((target_id, _)) => {
                self.items.update(&target_id, |target| {
                    target.quantity += quantity;
                    target.updated_at = now;
                });
                (target_id, false)
            }
            None => {
                let clone = InventoryItem {
                    id: ItemId::new(),
                    quantity,
                    warehouse_id: target_warehouse_id,
                    created_at: now,
                    updated_at: now,
                    ..template
                };
                let target_id = clone.id;
                self.items.insert(clone)?;
                (target_id, true)
            }
        };

        self.items.update(&item_id, |source| {
            source.quantity -= quantity;
            source.updated_at = now;
        });

        let receipt = StockTransferred {
            source_item_id: item_id,
            target_item_id,
            from_warehouse_id,
            to_warehouse_id: target_warehouse_id,
            quantity,
            created_target,
            occurred_at: now,
        };

        tracing::info!(
            source_item_id = %item_id,
            target_item_id = %target_item_id,
            from = %from_warehouse_id,
            to = %target_warehouse_id,
            quantity,
            created_target,
            "stock transferred"
        );
        self.publish(InventoryEvent::StockTransferred(receipt.clone()));
        Ok(receipt)
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn warn_if_unknown_warehouse(&self, warehouse_id: WarehouseId, operation: &'static str) {
        if !self.warehouses.contains(&warehouse_id) {
            tracing::warn!(warehouse_id = %warehouse_id, operation, "item references unknown warehouse");
        }
    }

    /// Publish failures are logged; the mutation itself stands.
    fn publish(&self, event: InventoryEvent) {
        let event_type = event.event_type();
        if let Err(err) = self.bus.publish(event) {
            tracing::error!(event_type, error = %err, "failed to publish inventory event");
        }
    }
}
