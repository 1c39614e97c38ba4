//! Same-day aggregates recomputed from the full item set.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::items::{ProductionItem, StatusScheme};

use super::queue_model::QueueStats;

/// Computes today's counters from the full item set.
///
/// `total_orders` counts distinct order refs, not items. Counters are
/// recomputed from scratch on every change; the set is tens of items, not
/// thousands.
pub fn daily_stats(
    items: &[ProductionItem],
    today: NaiveDate,
    scheme: &StatusScheme,
) -> QueueStats {
    let todays: Vec<&ProductionItem> = items
        .iter()
        .filter(|item| item.created_at.date_naive() == today)
        .collect();

    let total_orders = todays
        .iter()
        .map(|item| item.order_ref.as_str())
        .collect::<HashSet<_>>()
        .len();

    QueueStats {
        total_orders,
        in_progress: todays
            .iter()
            .filter(|item| item.status == *scheme.in_progress())
            .count(),
        completed: todays
            .iter()
            .filter(|item| item.status == *scheme.completed())
            .count(),
    }
}

/// Today's delivered items, newest first, for the pickup panel.
pub fn delivered_today(
    items: &[ProductionItem],
    today: NaiveDate,
    scheme: &StatusScheme,
) -> Vec<ProductionItem> {
    let mut delivered: Vec<ProductionItem> = items
        .iter()
        .filter(|item| {
            item.created_at.date_naive() == today && item.status == *scheme.delivered()
        })
        .cloned()
        .collect();
    delivered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    delivered
}
