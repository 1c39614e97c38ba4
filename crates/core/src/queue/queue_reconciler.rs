//! Status-change detection between consecutive fetches.

use std::collections::{HashMap, HashSet};

use crate::items::ProductionItem;

/// Returns the ids whose status changed since the previous fetch.
///
/// Only ids that existed before are flagged; newly appeared items are not.
/// An empty previous set (first load) flags nothing, so the initial paint
/// does not pulse every row.
pub fn diff_status_changes(
    prev: &HashMap<i64, ProductionItem>,
    next: &[ProductionItem],
) -> HashSet<i64> {
    if prev.is_empty() {
        return HashSet::new();
    }

    next.iter()
        .filter(|item| {
            prev.get(&item.id)
                .map_or(false, |old| old.status != item.status)
        })
        .map(|item| item.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::items::ProductionStatus;

    fn item(id: i64, status: &str) -> ProductionItem {
        ProductionItem {
            id,
            order_ref: format!("INV-{id}"),
            customer_name: "Dewi Anggraini".to_string(),
            description: "Jahit Seragam Karyawan".to_string(),
            material_name: "Albatros".to_string(),
            length: None,
            width: None,
            quantity: 1,
            status: ProductionStatus::new(status),
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 1, 0, 0).unwrap(),
        }
    }

    fn indexed(items: &[ProductionItem]) -> HashMap<i64, ProductionItem> {
        items.iter().map(|i| (i.id, i.clone())).collect()
    }

    #[test]
    fn test_first_load_flags_nothing() {
        let next = vec![item(1, "Proses"), item(2, "Selesai")];
        assert!(diff_status_changes(&HashMap::new(), &next).is_empty());
    }

    #[test]
    fn test_status_change_is_flagged() {
        let prev = indexed(&[item(1, "Belum Dikerjakan")]);
        let next = vec![item(1, "Proses")];
        let changed = diff_status_changes(&prev, &next);
        assert_eq!(changed, HashSet::from([1]));
    }

    #[test]
    fn test_unchanged_status_is_not_flagged() {
        let prev = indexed(&[item(1, "Proses")]);
        let next = vec![item(1, "Proses")];
        assert!(diff_status_changes(&prev, &next).is_empty());
    }

    #[test]
    fn test_new_item_is_not_flagged() {
        let prev = indexed(&[item(1, "Proses")]);
        let next = vec![item(1, "Proses"), item(2, "Belum Dikerjakan")];
        assert!(diff_status_changes(&prev, &next).is_empty());
    }

    #[test]
    fn test_removed_item_is_not_flagged() {
        let prev = indexed(&[item(1, "Proses"), item(2, "Proses")]);
        let next = vec![item(1, "Selesai")];
        let changed = diff_status_changes(&prev, &next);
        assert_eq!(changed, HashSet::from([1]));
    }
}
