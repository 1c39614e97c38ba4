//! Queue read-model types.

use serde::Serialize;

/// Same-day counters shown in the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    /// Distinct orders created today, not item count.
    pub total_orders: usize,
    /// Today's items currently being worked on.
    pub in_progress: usize,
    /// Today's items finished.
    pub completed: usize,
}
