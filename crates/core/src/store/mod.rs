//! Store module - wire records, repository traits, and clients.

mod memory;
mod rest_client;
mod store_model;
mod store_traits;

// Re-export the public interface
pub use memory::InMemoryStore;
pub use rest_client::{RestStoreClient, StoreConfig};
pub use store_model::{
    CustomerRecord, DisplaySettingsRecord, MaterialRecord, OrderItemRecord, OrderRecord,
};
pub use store_traits::OrdersRepositoryTrait;
