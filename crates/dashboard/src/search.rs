use stockroom_inventory::InventoryItem;

/// Items whose name or category contains `term`, ignoring case.
///
/// A blank term matches everything. Input order is preserved.
pub fn search_items<'a, I>(items: I, term: &str) -> Vec<&'a InventoryItem>
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let needle = term.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use stockroom_core::FixedClock;
    use stockroom_inventory::mock_inventory;

    fn names(items: &[&InventoryItem]) -> Vec<String> {
        items.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn matches_name_or_category_case_insensitively() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let service = mock_inventory(Arc::new(clock)).unwrap();
        let items = service.items();

        assert_eq!(
            names(&search_items(&items, "CHEESE")),
            vec!["Cheddar Cheese"]
        );
        assert_eq!(
            names(&search_items(&items, "dairy")),
            vec!["Organic Milk", "Cheddar Cheese", "Free-Range Eggs", "Organic Milk"]
        );
    }

    #[test]
    fn blank_term_returns_everything_in_order() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let service = mock_inventory(Arc::new(clock)).unwrap();
        let items = service.items();

        let all = search_items(&items, "  ");
        assert_eq!(all.len(), items.len());
        assert_eq!(all[0].id, items[0].id);
        assert!(search_items(&items, "caviar").is_empty());
    }
}
