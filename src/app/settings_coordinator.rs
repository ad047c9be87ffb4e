//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings (tick scale,
//! panel preferences) to eframe's storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Storage key for the selected tick scale.
pub const TIME_SCALE_KEY: &str = "time_scale";

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_axis::TimeScale;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_scale() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, TIME_SCALE_KEY, &TimeScale::Thirty);

        let loaded: TimeScale =
            SettingsCoordinator::load_setting_or(Some(&storage), TIME_SCALE_KEY, TimeScale::Ten);
        assert_eq!(loaded, TimeScale::Thirty);
    }

    #[test]
    fn test_missing_key_returns_default() {
        let storage = MockStorage::new();
        let loaded: TimeScale =
            SettingsCoordinator::load_setting_or(Some(&storage), "missing", TimeScale::Ten);
        assert_eq!(loaded, TimeScale::Ten);
    }

    #[test]
    fn test_invalid_json_returns_default() {
        let mut storage = MockStorage::new();
        storage.set_string(TIME_SCALE_KEY, "not json".to_string());
        let loaded: TimeScale =
            SettingsCoordinator::load_setting_or(Some(&storage), TIME_SCALE_KEY, TimeScale::Five);
        assert_eq!(loaded, TimeScale::Five);
    }
}
