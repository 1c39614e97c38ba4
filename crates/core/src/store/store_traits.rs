//! Orders repository trait.
//!
//! This trait defines the contract for the external store's production
//! query without any transport-specific types; the REST client and the
//! in-memory test store both implement it.

use async_trait::async_trait;

use crate::errors::Result;

use super::store_model::OrderRecord;

/// Trait defining the contract for fetching production orders.
#[async_trait]
pub trait OrdersRepositoryTrait: Send + Sync {
    /// Fetches orders currently in production, newest first, with nested
    /// customer and item/material records.
    async fn fetch_production_orders(&self) -> Result<Vec<OrderRecord>>;
}
