// Platform collaborator interfaces.
// The sync layer consumes these as black boxes: image decoding, location
// services, and the persisted key-value settings store.

use std::collections::HashMap;

use bytes::Bytes;
use thiserror::Error;

/// Raw bytes could not be decoded into a displayable image.
#[derive(Debug, Error)]
#[error("undecodable image data")]
pub struct ImageDecodeError;

/// Decodes fetched bytes into the platform's displayable image type.
pub trait ImageDecoder {
    type Image;

    fn decode(&self, data: &Bytes) -> Result<Self::Image, ImageDecodeError>;
}

/// Location authorization state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationAuthorization {
    #[default]
    NotDetermined,
    Denied,
    Restricted,
    Authorized,
}

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Read-only view of the platform location services.
pub trait LocationProvider {
    fn authorization(&self) -> LocationAuthorization;
    fn last_known(&self) -> Option<Coordinate>;
}

/// Persisted key-value settings store.
pub trait SettingsStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_bool(&mut self, key: &str, value: bool);
    fn get_int(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64);
}

#[derive(Debug, Clone, PartialEq)]
enum SettingsValue {
    Text(String),
    Flag(bool),
    Int(i64),
}

/// In-memory settings store, used as a test double for the persisted
/// platform store.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, SettingsValue>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(SettingsValue::Text(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), SettingsValue::Text(value.to_string()));
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(SettingsValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), SettingsValue::Flag(value));
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(SettingsValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), SettingsValue::Int(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_settings_round_trip() {
        let mut settings = MemorySettings::new();
        settings.set_string("username", "ben");
        settings.set_bool("dark_mode", true);
        settings.set_int("feed_page_size", 20);

        assert_eq!(settings.get_string("username"), Some("ben".to_string()));
        assert_eq!(settings.get_bool("dark_mode"), Some(true));
        assert_eq!(settings.get_int("feed_page_size"), Some(20));
        assert_eq!(settings.get_string("missing"), None);
    }

    #[test]
    fn test_type_mismatch_reads_as_absent() {
        let mut settings = MemorySettings::new();
        settings.set_bool("flag", true);

        assert_eq!(settings.get_string("flag"), None);
        assert_eq!(settings.get_int("flag"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut settings = MemorySettings::new();
        settings.set_int("limit", 20);
        settings.set_int("limit", 50);
        assert_eq!(settings.get_int("limit"), Some(50));
    }
}
