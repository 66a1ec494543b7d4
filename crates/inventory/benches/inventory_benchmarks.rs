use std::hint::black_box;
use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use stockroom_core::{FixedClock, WarehouseId};
use stockroom_events::InMemoryEventBus;
use stockroom_inventory::{InventoryService, NewItem, NewWarehouse};

fn populated(items: usize) -> (InventoryService, Vec<WarehouseId>) {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let mut service = InventoryService::with_parts(Arc::new(clock), InMemoryEventBus::new());
    let warehouses: Vec<_> = (0..4)
        .map(|i| {
            service
                .add_warehouse(NewWarehouse::new(format!("W{i}"), "bench"))
                .unwrap()
                .id
        })
        .collect();

    for i in 0..items {
        service
            .add_item(NewItem {
                name: format!("item-{}", i % (items / 4).max(1)),
                category: "bench".to_string(),
                quantity: (i as u64 % 100) + 50,
                price: 100,
                expiry_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                warehouse_id: warehouses[i % warehouses.len()],
                threshold: 60,
            })
            .unwrap();
    }
    (service, warehouses)
}

fn bench_low_stock(c: &mut Criterion) {
    let (service, _) = populated(10_000);
    c.bench_function("low_stock_items/10k", |b| {
        b.iter(|| black_box(service.low_stock_items().len()))
    });
}

fn bench_transfer(c: &mut Criterion) {
    c.bench_function("transfer_item/1k", |b| {
        b.iter_batched(
            || populated(1_000),
            |(mut service, warehouses)| {
                let source = service.items()[0].id;
                black_box(service.transfer_item(source, warehouses[1], 10).unwrap());
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_low_stock, bench_transfer);
criterion_main!(benches);
