//! Live feed controller - the subscribe/refetch lifecycle.
//!
//! On activation the controller performs one immediate fetch of items and
//! settings, then consumes the store's change-notification stream; any
//! notification on a watched collection triggers a full re-fetch. No deltas
//! are applied from the wire. Overlapping fetches are tolerated: each
//! completion unconditionally replaces the item set (last write wins, no
//! response sequencing).

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use log::{debug, error, warn};
use tokio::sync::{broadcast, watch};
use tokio_stream::wrappers::BroadcastStream;

use crate::constants::HIGHLIGHT_DECAY;
use crate::errors::Result;
use crate::items::project_orders;
use crate::queue::QueueState;
use crate::settings::{DisplaySettings, SettingsRepositoryTrait};
use crate::store::OrdersRepositoryTrait;

use super::change_event::ChangeEvent;

/// Source of change notifications from the store.
///
/// The wire transport (the store's realtime channel) is owned by the host
/// application; this crate only consumes the resulting event stream.
#[async_trait]
pub trait ChangeFeedTrait: Send + Sync {
    /// Opens a standing subscription. The stream ends when the feed closes;
    /// dropping the stream releases the subscription.
    async fn subscribe(&self) -> Result<BoxStream<'static, ChangeEvent>>;
}

/// Channel-backed change feed for embedding and tests.
///
/// The host pushes events it receives from the store's realtime channel;
/// every active subscriber sees each published event.
pub struct ChannelChangeFeed {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChannelChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes one event to all active subscribers. Events published with
    /// no subscriber are dropped.
    pub fn publish(&self, event: ChangeEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait]
impl ChangeFeedTrait for ChannelChangeFeed {
    async fn subscribe(&self) -> Result<BoxStream<'static, ChangeEvent>> {
        let rx = self.tx.subscribe();
        // Lagged receivers skip ahead; a missed notification only delays the
        // next refresh until the following event.
        let stream = BroadcastStream::new(rx).filter_map(|event| async move { event.ok() });
        Ok(stream.boxed())
    }
}

/// Drives the fetch/subscribe lifecycle against the external store.
pub struct LiveFeedController {
    orders: Arc<dyn OrdersRepositoryTrait>,
    settings: Arc<dyn SettingsRepositoryTrait>,
    feed: Arc<dyn ChangeFeedTrait>,
    state: Arc<QueueState>,
}

impl LiveFeedController {
    pub fn new(
        orders: Arc<dyn OrdersRepositoryTrait>,
        settings: Arc<dyn SettingsRepositoryTrait>,
        feed: Arc<dyn ChangeFeedTrait>,
        state: Arc<QueueState>,
    ) -> Self {
        Self {
            orders,
            settings,
            feed,
            state,
        }
    }

    /// Runs the subscribe/refetch loop until the feed closes or `shutdown`
    /// flips to true. Dropping the shutdown sender also stops the loop.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        self.refresh_queue().await;
        self.refresh_settings().await;

        let mut events = self.feed.subscribe().await?;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Feed controller shutting down");
                        break;
                    }
                }
                event = events.next() => {
                    match event {
                        Some(event) => self.handle_event(&event).await,
                        None => {
                            warn!("Change feed closed; stopping controller");
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    async fn handle_event(&self, event: &ChangeEvent) {
        debug!(
            "Change notification: {:?} on {}",
            event.kind, event.collection
        );
        if event.touches_queue() {
            self.refresh_queue().await;
        }
        if event.touches_settings() {
            self.refresh_settings().await;
        }
    }

    /// Fetches and applies the current item set.
    ///
    /// On failure the previous set is retained; stale-but-present beats
    /// empty. When rows changed status, a deferred task clears the highlight
    /// set after the decay window unless a newer fetch replaced it.
    pub async fn refresh_queue(&self) {
        match self.orders.fetch_production_orders().await {
            Ok(orders) => {
                let items = project_orders(&orders);
                if let Some(generation) = self.state.apply_fetch(items) {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        tokio::time::sleep(HIGHLIGHT_DECAY).await;
                        state.clear_highlights(generation);
                    });
                }
            }
            Err(e) => error!("Failed to fetch production orders: {}", e),
        }
    }

    /// Fetches display settings, falling back to the default playlist.
    pub async fn refresh_settings(&self) {
        let settings = match self.settings.fetch_display_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to fetch display settings: {}", e);
                DisplaySettings::fallback()
            }
        };
        self.state.apply_settings(settings);
    }
}
