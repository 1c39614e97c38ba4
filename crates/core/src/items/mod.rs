//! Items module - domain model, status scheme, and projection.

mod items_model;
mod items_projection;
mod items_status;

// Re-export the public interface
pub use items_model::ProductionItem;
pub use items_projection::project_orders;
pub use items_status::{ProductionStatus, StatusScheme};
