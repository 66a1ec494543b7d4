//! Fixed mock dataset the dashboard starts from.

use std::sync::Arc;

use chrono::Days;

use stockroom_core::{Clock, DomainResult};
use stockroom_events::InMemoryEventBus;

use crate::item::NewItem;
use crate::service::InventoryService;
use crate::warehouse::NewWarehouse;

struct SeedItem {
    name: &'static str,
    category: &'static str,
    quantity: u64,
    price: u64,
    shelf_life_days: u64,
    warehouse: usize,
    threshold: u64,
}

const WAREHOUSES: &[(&str, &str)] = &[
    ("Central Warehouse", "New York, NY"),
    ("West Coast Hub", "Los Angeles, CA"),
    ("Midwest Depot", "Chicago, IL"),
];

#[rustfmt::skip]
const ITEMS: &[SeedItem] = &[
    SeedItem { name: "Organic Milk", category: "Dairy", quantity: 45, price: 399, shelf_life_days: 10, warehouse: 0, threshold: 20 },
    SeedItem { name: "Whole Wheat Bread", category: "Bakery", quantity: 12, price: 299, shelf_life_days: 5, warehouse: 0, threshold: 15 },
    SeedItem { name: "Fresh Apples", category: "Produce", quantity: 150, price: 149, shelf_life_days: 21, warehouse: 1, threshold: 50 },
    SeedItem { name: "Cheddar Cheese", category: "Dairy", quantity: 8, price: 649, shelf_life_days: 60, warehouse: 1, threshold: 10 },
    SeedItem { name: "Orange Juice", category: "Beverages", quantity: 30, price: 459, shelf_life_days: 14, warehouse: 2, threshold: 30 },
    SeedItem { name: "Free-Range Eggs", category: "Dairy", quantity: 60, price: 549, shelf_life_days: 28, warehouse: 2, threshold: 24 },
    SeedItem { name: "Organic Milk", category: "Dairy", quantity: 18, price: 399, shelf_life_days: 9, warehouse: 2, threshold: 20 },
];

/// Build a service pre-populated with three warehouses and a handful of items,
/// some already at or below their low-stock threshold.
///
/// Expiry dates are relative to the clock's current date.
pub fn mock_inventory(clock: Arc<dyn Clock>) -> DomainResult<InventoryService> {
    let today = clock.now().date_naive();
    let mut service = InventoryService::with_parts(clock, InMemoryEventBus::new());

    let mut warehouse_ids = Vec::with_capacity(WAREHOUSES.len());
    for (name, location) in WAREHOUSES {
        warehouse_ids.push(service.add_warehouse(NewWarehouse::new(*name, *location))?.id);
    }

    for seed in ITEMS {
        service.add_item(NewItem {
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            quantity: seed.quantity,
            price: seed.price,
            expiry_date: today + Days::new(seed.shelf_life_days),
            warehouse_id: warehouse_ids[seed.warehouse],
            threshold: seed.threshold,
        })?;
    }

    tracing::debug!(
        warehouses = service.warehouses().len(),
        items = service.items().len(),
        "seeded mock inventory"
    );
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use stockroom_core::FixedClock;

    fn seeded() -> InventoryService {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap());
        mock_inventory(Arc::new(clock)).unwrap()
    }

    #[test]
    fn seeds_every_warehouse_and_item() {
        let service = seeded();
        assert_eq!(service.warehouses().len(), WAREHOUSES.len());
        assert_eq!(service.items().len(), ITEMS.len());
        assert!(service.orphaned_items().is_empty());
    }

    #[test]
    fn seed_contains_low_stock_items() {
        let service = seeded();
        let names: Vec<&str> = service
            .low_stock_items()
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Whole Wheat Bread", "Cheddar Cheese", "Orange Juice", "Organic Milk"]
        );
    }

    #[test]
    fn expiry_is_relative_to_clock() {
        let service = seeded();
        let items = service.items();
        let milk = &items[0];
        assert_eq!(milk.expiry_date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    }
}
