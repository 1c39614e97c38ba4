//! Change-notification wire model.

use serde::{Deserialize, Serialize};

/// Collection carrying order-level rows.
pub const ORDERS_COLLECTION: &str = "orders";
/// Collection carrying item-level rows.
pub const ORDER_ITEMS_COLLECTION: &str = "order_items";
/// Collection carrying display settings rows.
pub const DISPLAY_SETTINGS_COLLECTION: &str = "display_settings";

/// Kind of change reported by the store's notification feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Insert,
    Update,
    Delete,
}

/// A single change notification from the store.
///
/// The dashboard never applies deltas from these; any event on a watched
/// collection triggers a full re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Table/collection name the change occurred in.
    pub collection: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl ChangeEvent {
    pub fn new(collection: impl Into<String>, kind: EventKind) -> Self {
        Self {
            collection: collection.into(),
            kind,
        }
    }

    /// Whether this event should refresh the production queue.
    pub fn touches_queue(&self) -> bool {
        self.collection == ORDERS_COLLECTION || self.collection == ORDER_ITEMS_COLLECTION
    }

    /// Whether this event should refresh the display settings.
    /// Settings rows are only ever updated in place, so inserts and deletes
    /// are ignored.
    pub fn touches_settings(&self) -> bool {
        self.collection == DISPLAY_SETTINGS_COLLECTION && self.kind == EventKind::Update
    }
}
