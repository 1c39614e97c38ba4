//! Queue ordering and windowing.

use crate::items::{ProductionItem, StatusScheme};

/// Orders items by status priority, then recency, and truncates to `window`.
///
/// Truncation happens after the full sort, so a high-priority item created
/// long ago still wins a slot over lower-priority newer items. Ties on
/// identical timestamps keep input order (stable sort).
pub fn rank_queue(
    items: &[ProductionItem],
    scheme: &StatusScheme,
    window: usize,
) -> Vec<ProductionItem> {
    let mut ranked: Vec<ProductionItem> = items.to_vec();
    ranked.sort_by(|a, b| {
        scheme
            .rank_of(&a.status)
            .cmp(&scheme.rank_of(&b.status))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    ranked.truncate(window);
    ranked
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    use super::*;
    use crate::constants::QUEUE_WINDOW_SIZE;
    use crate::items::ProductionStatus;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap()
    }

    fn item(id: i64, status: &str, minutes_ago: i64) -> ProductionItem {
        ProductionItem {
            id,
            order_ref: format!("INV-{id}"),
            customer_name: "Eko Prasetyo".to_string(),
            description: "Desain Logo Perusahaan".to_string(),
            material_name: "Art Paper 260g".to_string(),
            length: None,
            width: None,
            quantity: 1,
            status: ProductionStatus::new(status),
            created_at: base_time() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_in_progress_sorts_before_unstarted_and_done() {
        let scheme = StatusScheme::three_stage();
        let items = vec![
            item(1, "Selesai", 1),
            item(2, "Belum Dikerjakan", 2),
            item(3, "Proses", 3),
        ];

        let ranked = rank_queue(&items, &scheme, QUEUE_WINDOW_SIZE);
        let ids: Vec<i64> = ranked.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_newest_first_within_same_status() {
        let scheme = StatusScheme::three_stage();
        let items = vec![
            item(1, "Proses", 30),
            item(2, "Proses", 10),
            item(3, "Proses", 20),
        ];

        let ranked = rank_queue(&items, &scheme, QUEUE_WINDOW_SIZE);
        let ids: Vec<i64> = ranked.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_truncation_happens_after_full_sort() {
        let scheme = StatusScheme::three_stage();
        // Ten fresh finished items, plus one in-progress item from hours ago.
        let mut items: Vec<ProductionItem> = (1..=10).map(|id| item(id, "Selesai", id)).collect();
        items.push(item(99, "Proses", 600));

        let ranked = rank_queue(&items, &scheme, QUEUE_WINDOW_SIZE);
        assert_eq!(ranked.len(), QUEUE_WINDOW_SIZE);
        assert_eq!(ranked[0].id, 99);
    }

    #[test]
    fn test_unknown_status_ranks_last() {
        let scheme = StatusScheme::three_stage();
        let items = vec![item(1, "Archived", 1), item(2, "Selesai", 2)];

        let ranked = rank_queue(&items, &scheme, QUEUE_WINDOW_SIZE);
        let ids: Vec<i64> = ranked.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    proptest! {
        #[test]
        fn prop_ranked_is_windowed_and_ordered(
            specs in prop::collection::vec((0u8..4, 0i64..10_000), 0..40)
        ) {
            let scheme = StatusScheme::three_stage();
            let statuses = ["Proses", "Belum Dikerjakan", "Selesai", "Archived"];
            let items: Vec<ProductionItem> = specs
                .iter()
                .enumerate()
                .map(|(idx, (status, minutes))| {
                    item(idx as i64, statuses[*status as usize], *minutes)
                })
                .collect();

            let ranked = rank_queue(&items, &scheme, QUEUE_WINDOW_SIZE);

            prop_assert!(ranked.len() <= QUEUE_WINDOW_SIZE);
            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let key_a = (scheme.rank_of(&a.status), -a.created_at.timestamp());
                let key_b = (scheme.rank_of(&b.status), -b.created_at.timestamp());
                prop_assert!(key_a <= key_b);
            }
        }
    }
}
