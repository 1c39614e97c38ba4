//! In-memory store used by tests and demos.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{Result, StoreError};
use crate::settings::{DisplaySettings, SettingsRepositoryTrait};

use super::store_model::OrderRecord;
use super::store_traits::OrdersRepositoryTrait;

/// Store double backed by plain memory.
///
/// Implements both repository traits; failure modes can be toggled to
/// exercise the degraded paths of the feed controller.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<InMemoryStoreState>,
}

#[derive(Default)]
struct InMemoryStoreState {
    orders: Vec<OrderRecord>,
    settings: Option<DisplaySettings>,
    orders_unavailable: bool,
    settings_unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_orders(&self, orders: Vec<OrderRecord>) {
        self.inner.lock().unwrap().orders = orders;
    }

    pub fn set_settings(&self, settings: DisplaySettings) {
        self.inner.lock().unwrap().settings = Some(settings);
    }

    /// Makes order fetches fail until toggled back.
    pub fn set_orders_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().orders_unavailable = unavailable;
    }

    /// Makes settings fetches fail until toggled back.
    pub fn set_settings_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().settings_unavailable = unavailable;
    }
}

#[async_trait]
impl OrdersRepositoryTrait for InMemoryStore {
    async fn fetch_production_orders(&self) -> Result<Vec<OrderRecord>> {
        let state = self.inner.lock().unwrap();
        if state.orders_unavailable {
            return Err(StoreError::Rejected {
                status: 503,
                message: "store unavailable".to_string(),
            }
            .into());
        }
        Ok(state.orders.clone())
    }
}

#[async_trait]
impl SettingsRepositoryTrait for InMemoryStore {
    async fn fetch_display_settings(&self) -> Result<DisplaySettings> {
        let state = self.inner.lock().unwrap();
        if state.settings_unavailable {
            return Err(StoreError::Rejected {
                status: 503,
                message: "store unavailable".to_string(),
            }
            .into());
        }
        state
            .settings
            .clone()
            .ok_or_else(|| StoreError::SettingsNotFound.into())
    }
}
