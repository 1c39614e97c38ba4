//! Video module - id extraction and title lookup.

mod video_id;
mod video_metadata;

// Re-export the public interface
pub use video_id::extract_video_id;
pub use video_metadata::{title_or_placeholder, OEmbedClient, VideoMetadataProvider};
