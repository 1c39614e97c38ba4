//! Settings module - display settings model and repository trait.

mod settings_model;
mod settings_traits;

// Re-export the public interface
pub use settings_model::DisplaySettings;
pub use settings_traits::SettingsRepositoryTrait;
