//! Settings repository trait.

use async_trait::async_trait;

use crate::errors::Result;

use super::DisplaySettings;

/// Trait defining the contract for reading display settings from the store.
///
/// The store keeps a history of settings rows; implementations return the
/// most recent one. Callers fall back to
/// [`DisplaySettings::fallback`](super::DisplaySettings::fallback) on error.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Fetches the most recent display settings record.
    async fn fetch_display_settings(&self) -> Result<DisplaySettings>;
}
