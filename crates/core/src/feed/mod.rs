//! Feed module - change notifications and the live feed controller.

mod change_event;
mod feed_controller;

// Re-export the public interface
pub use change_event::{
    ChangeEvent, EventKind, DISPLAY_SETTINGS_COLLECTION, ORDERS_COLLECTION,
    ORDER_ITEMS_COLLECTION,
};
pub use feed_controller::{ChangeFeedTrait, ChannelChangeFeed, LiveFeedController};
