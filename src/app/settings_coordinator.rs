//! Preference persistence coordination.
//!
//! Stores serializable settings as JSON strings in eframe's persistent
//! storage. Only preferences go through here; the week selection is
//! deliberately never written.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::app::Preferences;

/// Storage key for [`Preferences`]
pub const PREFERENCES_KEY: &str = "scheduler_preferences";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if the key is missing or unreadable
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        match Self::try_load_setting(storage, key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("Ignoring stored setting '{}': {:#}", key, e);
                default
            }
        }
    }

    /// Attempts to load a setting.
    ///
    /// Returns `Ok(None)` when there is no storage or no value under `key`,
    /// and an error when the stored JSON does not match `T`.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> anyhow::Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        use anyhow::Context;

        let Some(json_str) = storage.and_then(|storage| storage.get_string(key)) else {
            return Ok(None);
        };
        let value = serde_json::from_str(&json_str)
            .with_context(|| format!("malformed JSON under '{}'", key))?;
        Ok(Some(value))
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => warn!("Could not serialize setting '{}': {}", key, e),
        }
    }

    /// Loads the scheduler preferences, falling back to defaults.
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> Preferences {
        let preferences = Self::load_setting_or(storage, PREFERENCES_KEY, Preferences::default());
        debug!("Loaded preferences: {:?}", preferences);
        preferences
    }

    /// Saves the scheduler preferences.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &Preferences) {
        Self::save_setting(storage, PREFERENCES_KEY, preferences);
    }
}
