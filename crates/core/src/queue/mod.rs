//! Queue module - reconciliation, ranking, aggregates, and shared state.

mod queue_model;
mod queue_ranking;
mod queue_reconciler;
mod queue_state;
mod queue_stats;

// Re-export the public interface
pub use queue_model::QueueStats;
pub use queue_ranking::rank_queue;
pub use queue_reconciler::diff_status_changes;
pub use queue_state::QueueState;
pub use queue_stats::{daily_stats, delivered_today};
