//! `stockroom-dashboard` — what the signed-in user sees.
//!
//! Builds plain view models (alerts, filtered item rows, warehouse summaries)
//! from an [`InventoryService`](stockroom_inventory::InventoryService) and
//! renders them as text. Configuration comes from the environment.

pub mod config;
pub mod search;
pub mod view;

pub use config::{ConfigError, DashboardConfig, OutputFormat, SeedMode};
pub use search::search_items;
pub use view::{DashboardView, ItemRow, LowStockAlert, WarehouseSummary, format_price};
