//! Dashboard view models and their plain-text rendering.

use core::fmt;

use serde::Serialize;

use stockroom_auth::{Role, User};
use stockroom_core::{ItemId, WarehouseId};
use stockroom_events::EventBus;
use stockroom_inventory::{InventoryEvent, InventoryItem, InventoryService};

use crate::search::search_items;

const UNASSIGNED: &str = "unassigned";

/// Render a price held in cents as dollars, e.g. `399` → `$3.99`.
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockAlert {
    pub item_id: ItemId,
    pub name: String,
    pub warehouse: String,
    pub quantity: u64,
    pub threshold: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub item_id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub price: String,
    pub warehouse: String,
    pub low_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseSummary {
    pub warehouse_id: WarehouseId,
    pub name: String,
    pub location: String,
    pub item_count: usize,
    /// Saturates at `u64::MAX`.
    pub total_units: u64,
}

/// Everything the dashboard shows for one user at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub username: String,
    pub role: Role,
    pub search: String,
    pub alerts: Vec<LowStockAlert>,
    pub items: Vec<ItemRow>,
    pub warehouses: Vec<WarehouseSummary>,
    pub orphaned_items: usize,
}

impl DashboardView {
    pub fn build<B>(user: &User, service: &InventoryService<B>, search: &str) -> Self
    where
        B: EventBus<InventoryEvent>,
    {
        let warehouse_name = |item: &InventoryItem| {
            service
                .warehouse(item.warehouse_id)
                .map(|w| w.name.clone())
                .unwrap_or_else(|| UNASSIGNED.to_string())
        };

        let alerts = service
            .low_stock_items()
            .into_iter()
            .map(|item| LowStockAlert {
                item_id: item.id,
                name: item.name.clone(),
                warehouse: warehouse_name(item),
                quantity: item.quantity,
                threshold: item.threshold,
            })
            .collect();

        let snapshot = service.items();
        let items = search_items(&snapshot, search)
            .into_iter()
            .map(|item| ItemRow {
                item_id: item.id,
                name: item.name.clone(),
                category: item.category.clone(),
                quantity: item.quantity,
                price: format_price(item.price),
                warehouse: warehouse_name(item),
                low_stock: item.is_low_stock(),
            })
            .collect();

        let warehouses = service
            .warehouses()
            .iter()
            .map(|warehouse| {
                let held = service.items_in_warehouse(warehouse.id);
                let total_units = held
                    .iter()
                    .try_fold(0u64, |total, item| total.checked_add(item.quantity))
                    .unwrap_or_else(|| {
                        tracing::warn!(
                            warehouse_id = %warehouse.id,
                            "warehouse unit total overflows; showing u64::MAX"
                        );
                        u64::MAX
                    });
                WarehouseSummary {
                    warehouse_id: warehouse.id,
                    name: warehouse.name.clone(),
                    location: warehouse.location.clone(),
                    item_count: held.len(),
                    total_units,
                }
            })
            .collect();

        Self {
            username: user.username.clone(),
            role: user.role,
            search: search.trim().to_string(),
            alerts,
            items,
            warehouses,
            orphaned_items: service.orphaned_items().len(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inventory Management  ({} · {})", self.username, self.role)?;
        writeln!(f)?;

        if self.alerts.is_empty() {
            writeln!(f, "Low stock: none")?;
        } else {
            writeln!(f, "Low stock ({}):", self.alerts.len())?;
            for alert in &self.alerts {
                writeln!(
                    f,
                    "  ! {} @ {}: {} left (threshold {})",
                    alert.name, alert.warehouse, alert.quantity, alert.threshold
                )?;
            }
        }
        writeln!(f)?;

        if self.search.is_empty() {
            writeln!(f, "Items ({}):", self.items.len())?;
        } else {
            writeln!(f, "Items matching \"{}\" ({}):", self.search, self.items.len())?;
        }
        writeln!(
            f,
            "  {:<24} {:<12} {:>8} {:>10}  {}",
            "NAME", "CATEGORY", "QTY", "PRICE", "WAREHOUSE"
        )?;
        for row in &self.items {
            let marker = if row.low_stock { "*" } else { " " };
            writeln!(
                f,
                "  {:<24} {:<12} {:>7}{} {:>10}  {}",
                row.name, row.category, row.quantity, marker, row.price, row.warehouse
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Warehouses ({}):", self.warehouses.len())?;
        for warehouse in &self.warehouses {
            writeln!(
                f,
                "  {} ({}): {} items, {} units",
                warehouse.name, warehouse.location, warehouse.item_count, warehouse.total_units
            )?;
        }
        if self.orphaned_items > 0 {
            writeln!(f, "  {} item(s) reference a deleted warehouse", self.orphaned_items)?;
        }
        Ok(())
    }
}
