//! Shared view state for the production queue.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::constants::QUEUE_WINDOW_SIZE;
use crate::items::{ProductionItem, StatusScheme};
use crate::settings::DisplaySettings;
use crate::utils::time_utils::queue_date_today;

use super::queue_model::QueueStats;
use super::{daily_stats, delivered_today, diff_status_changes, rank_queue};

/// Lock-protected view state shared between the feed controller and readers.
///
/// All mutation goes through [`apply_fetch`](Self::apply_fetch),
/// [`apply_settings`](Self::apply_settings) and
/// [`clear_highlights`](Self::clear_highlights); readers get consistent
/// snapshots through the accessor methods. There are no ambient globals.
pub struct QueueState {
    inner: RwLock<QueueStateInner>,
    scheme: StatusScheme,
}

#[derive(Default)]
struct QueueStateInner {
    items: Vec<ProductionItem>,
    by_id: HashMap<i64, ProductionItem>,
    highlighted: HashSet<i64>,
    highlight_generation: u64,
    settings: DisplaySettings,
    loaded: bool,
}

impl QueueState {
    pub fn new(scheme: StatusScheme) -> Self {
        Self {
            inner: RwLock::new(QueueStateInner::default()),
            scheme,
        }
    }

    /// Replaces the item set with a completed fetch, last write wins.
    ///
    /// Returns the new highlight generation when any existing row changed
    /// status, so the caller can schedule the matching
    /// [`clear_highlights`](Self::clear_highlights) call. The previous
    /// highlight set is replaced wholesale, never merged.
    pub fn apply_fetch(&self, items: Vec<ProductionItem>) -> Option<u64> {
        let mut inner = self.inner.write().unwrap();
        let changed = diff_status_changes(&inner.by_id, &items);

        inner.by_id = items.iter().map(|item| (item.id, item.clone())).collect();
        inner.items = items;
        inner.loaded = true;

        if changed.is_empty() {
            return None;
        }
        inner.highlight_generation += 1;
        inner.highlighted = changed;
        Some(inner.highlight_generation)
    }

    /// Clears the highlight set if it still belongs to `generation`.
    ///
    /// A fetch that arrived in the meantime bumped the generation; its
    /// highlights keep their own full decay window.
    pub fn clear_highlights(&self, generation: u64) {
        let mut inner = self.inner.write().unwrap();
        if inner.highlight_generation == generation {
            inner.highlighted.clear();
        }
    }

    pub fn apply_settings(&self, settings: DisplaySettings) {
        self.inner.write().unwrap().settings = settings;
    }

    /// The ranked, windowed queue view.
    pub fn ranked(&self, window: usize) -> Vec<ProductionItem> {
        let inner = self.inner.read().unwrap();
        rank_queue(&inner.items, &self.scheme, window)
    }

    /// The ranked queue view at the standard dashboard window size.
    pub fn ranked_window(&self) -> Vec<ProductionItem> {
        self.ranked(QUEUE_WINDOW_SIZE)
    }

    /// Today's stat-card counters.
    pub fn stats(&self, today: NaiveDate) -> QueueStats {
        let inner = self.inner.read().unwrap();
        daily_stats(&inner.items, today, &self.scheme)
    }

    /// Today's counters at the current UTC date.
    pub fn stats_today(&self) -> QueueStats {
        self.stats(queue_date_today())
    }

    /// Today's delivered items for the pickup panel.
    pub fn delivered_today(&self, today: NaiveDate) -> Vec<ProductionItem> {
        let inner = self.inner.read().unwrap();
        delivered_today(&inner.items, today, &self.scheme)
    }

    /// Ids currently carrying the changed-row pulse.
    pub fn highlighted(&self) -> HashSet<i64> {
        self.inner.read().unwrap().highlighted.clone()
    }

    /// The full unranked item set, for the assistant and ad-hoc views.
    pub fn items(&self) -> Vec<ProductionItem> {
        self.inner.read().unwrap().items.clone()
    }

    pub fn playlist(&self) -> Vec<String> {
        self.inner.read().unwrap().settings.playlist.clone()
    }

    /// False until the first fetch has been applied.
    pub fn is_loaded(&self) -> bool {
        self.inner.read().unwrap().loaded
    }

    pub fn scheme(&self) -> &StatusScheme {
        &self.scheme
    }
}
