//! User settings for the contact book
//!
//! Manages user preferences such as the default upcoming-birthday window,
//! audit logging and the interactive shell prompt.

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::error::ContactsError;
use crate::models::address_book::DEFAULT_UPCOMING_WINDOW;

/// User settings for the contact book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default number of days `birthdays` looks ahead
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: u32,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Prompt printed by the interactive shell
    #[serde(default = "default_shell_prompt")]
    pub shell_prompt: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_upcoming_window_days() -> u32 {
    DEFAULT_UPCOMING_WINDOW
}

fn default_audit_enabled() -> bool {
    true
}

fn default_shell_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_window_days: default_upcoming_window_days(),
            audit_enabled: default_audit_enabled(),
            shell_prompt: default_shell_prompt(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ContactsError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ContactsError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ContactsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
