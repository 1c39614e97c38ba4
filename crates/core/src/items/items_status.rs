//! Production status values and the configurable priority table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A production status value as recorded by the store.
///
/// Deployments have shipped different status vocabularies (a three-stage and
/// a five-stage lifecycle), so the value itself is an opaque string and the
/// active vocabulary lives in [`StatusScheme`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionStatus(String);

impl ProductionStatus {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductionStatus {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered status vocabulary with queue display priorities.
///
/// Position in the priority list is the queue rank: lower sorts first.
/// Statuses not in the list rank after all known ones. The statuses of
/// interest for the daily counters and the pickup panel are named explicitly
/// so the same counters work across vocabularies.
#[derive(Debug, Clone)]
pub struct StatusScheme {
    priority: Vec<ProductionStatus>,
    in_progress: ProductionStatus,
    completed: ProductionStatus,
    delivered: ProductionStatus,
}

impl StatusScheme {
    /// Builds a scheme from an explicit priority list and statuses of
    /// interest. `priority` must name every status the deployment uses.
    pub fn new(
        priority: Vec<ProductionStatus>,
        in_progress: ProductionStatus,
        completed: ProductionStatus,
        delivered: ProductionStatus,
    ) -> Self {
        Self {
            priority,
            in_progress,
            completed,
            delivered,
        }
    }

    /// Three-stage lifecycle: `Belum Dikerjakan → Proses → Selesai`.
    ///
    /// Queue priority puts in-progress work first, then unstarted, then
    /// finished.
    pub fn three_stage() -> Self {
        Self::new(
            vec![
                "Proses".into(),
                "Belum Dikerjakan".into(),
                "Selesai".into(),
            ],
            "Proses".into(),
            "Selesai".into(),
            "Selesai".into(),
        )
    }

    /// Five-stage lifecycle: `Pending → Waiting → Proses → Ready → Delivered`.
    ///
    /// Queue priority follows the lifecycle order; `Ready` feeds the
    /// completed counter and `Delivered` the pickup panel.
    pub fn five_stage() -> Self {
        Self::new(
            vec![
                "Pending".into(),
                "Waiting".into(),
                "Proses".into(),
                "Ready".into(),
                "Delivered".into(),
            ],
            "Proses".into(),
            "Ready".into(),
            "Delivered".into(),
        )
    }

    /// Queue rank for a status; unknown statuses sort after all known ones.
    pub fn rank_of(&self, status: &ProductionStatus) -> usize {
        self.priority
            .iter()
            .position(|s| s == status)
            .unwrap_or(self.priority.len())
    }

    /// The active status vocabulary in lifecycle/priority order.
    pub fn statuses(&self) -> &[ProductionStatus] {
        &self.priority
    }

    /// Status counted as "in progress" on the dashboard.
    pub fn in_progress(&self) -> &ProductionStatus {
        &self.in_progress
    }

    /// Status counted as "completed today" on the dashboard.
    pub fn completed(&self) -> &ProductionStatus {
        &self.completed
    }

    /// Status listed in the delivered/pickup panel.
    pub fn delivered(&self) -> &ProductionStatus {
        &self.delivered
    }
}
