//! Production item domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductionStatus;

/// One unit of production work within an order - the unit tracked by status.
///
/// Items are created externally and observed through fetches; this crate
/// never mutates them beyond the ephemeral highlight marking in the queue
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionItem {
    /// Stable identity key assigned by the store; unique across the set.
    pub id: i64,
    /// Groups items belonging to one order; not unique across items.
    pub order_ref: String,
    /// Denormalized customer display name.
    pub customer_name: String,
    pub description: String,
    pub material_name: String,
    /// Physical dimensions in meters; both-or-neither expected but not
    /// enforced.
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub quantity: u32,
    pub status: ProductionStatus,
    /// Drives both same-day filtering and recency ordering.
    pub created_at: DateTime<Utc>,
}
