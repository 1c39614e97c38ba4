//! Display settings domain model.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VIDEO_ID;

/// Display settings for the dashboard media panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Video identifiers or URLs, in play order.
    pub playlist: Vec<String>,
}

impl DisplaySettings {
    /// The fixed fallback used when the settings fetch fails or the stored
    /// playlist is empty.
    pub fn fallback() -> Self {
        Self {
            playlist: vec![DEFAULT_VIDEO_ID.to_string()],
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_single_default_video() {
        let settings = DisplaySettings::fallback();
        assert_eq!(settings.playlist, vec![DEFAULT_VIDEO_ID.to_string()]);
    }
}
