use std::time::Duration;

/// Maximum number of rows shown in the ranked queue view
pub const QUEUE_WINDOW_SIZE: usize = 10;

/// How long changed rows stay highlighted after a refresh
pub const HIGHLIGHT_DECAY: Duration = Duration::from_millis(1600);

/// Placeholder for missing customer or material names
pub const NAME_PLACEHOLDER: &str = "N/A";

/// Placeholder for items without a description
pub const DESCRIPTION_PLACEHOLDER: &str = "No description";

/// Video shown when the settings playlist is missing or empty
pub const DEFAULT_VIDEO_ID: &str = "mKq7nk8pQFs";

/// Title shown when video metadata cannot be fetched
pub const VIDEO_TITLE_PLACEHOLDER: &str = "Now playing";
