//! Wastage and sale records.
//!
//! Declared for reporting on stock leaving the system; nothing in the
//! inventory service produces or consumes them yet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, RecordId};

/// Stock written off (spoiled, damaged, expired).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WastageRecord {
    pub id: RecordId,
    pub item_id: ItemId,
    pub quantity: u64,
    pub reason: String,
    pub date: NaiveDate,
}

/// Stock sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: RecordId,
    pub item_id: ItemId,
    pub quantity: u64,
    /// Sale price per unit in the smallest currency unit.
    pub price: u64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wastage_record_uses_item_id_key() {
        let record = WastageRecord {
            id: RecordId::new(),
            item_id: ItemId::new(),
            quantity: 3,
            reason: "expired".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["itemId"], record.item_id.to_string());
        assert_eq!(json["date"], "2024-05-02");
    }
}
