//! Display implementation for ttrack application messages.
//!
//! Single source of truth for all user-facing text: every `Message` variant
//! maps to its terminal representation here, keeping wording consistent and
//! ready for future localization.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::NoActiveTasks => "no active tasks".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleTrackingTime => "TrackingTime settings".to_string(),
            Message::TrackingTimeConfigNotFound => "TrackingTime is not configured. Run 'ttrack init' first".to_string(),

            // === PROMPTS ===
            Message::PromptUsername => "Enter your TrackingTime username".to_string(),
            Message::PromptPassword => "Enter your TrackingTime password".to_string(),
            Message::PromptUserId => "Enter your TrackingTime user id".to_string(),
            Message::PromptApiUrl => "Enter the TrackingTime API URL".to_string(),
        };
        write!(f, "{}", text)
    }
}
