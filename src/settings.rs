use std::collections::HashMap;

use codee::{string::FromToStringCodec, Decoder, Encoder};
use thiserror::Error;

pub const DARK_MODE_KEY: &str = "prefers-dark";

#[derive(Error, Debug, Clone)]
pub enum SettingsError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("couldn't write preference '{0}'")]
    WriteFailed(String),
}

/// Key-value storage for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::LocalStorageStore;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::window;
    use web_sys::Storage;

    use super::{PreferenceStore, SettingsError};

    /// `window.localStorage`. Private browsing modes may refuse access entirely.
    pub struct LocalStorageStore {
        storage: Option<Storage>,
    }

    impl LocalStorageStore {
        pub fn new() -> Self {
            let storage = window().local_storage().ok().flatten();
            if storage.is_none() {
                log::warn!("localStorage unavailable, preferences won't persist");
            }
            Self { storage }
        }
    }

    impl PreferenceStore for LocalStorageStore {
        fn read(&self, key: &str) -> Option<String> {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
            let storage = self.storage.as_ref().ok_or(SettingsError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| SettingsError::WriteFailed(key.to_string()))
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub dark: bool,
}

impl Settings {
    /// A stored choice wins over the system color scheme.
    pub fn load(store: &impl PreferenceStore, system_prefers_dark: bool) -> Self {
        let stored = store
            .read(DARK_MODE_KEY)
            .and_then(|v| <FromToStringCodec as Decoder<bool>>::decode(v.as_str()).ok());
        Self {
            dark: stored.unwrap_or(system_prefers_dark),
        }
    }

    pub fn save(&self, store: &mut impl PreferenceStore) -> Result<(), SettingsError> {
        let encoded = <FromToStringCodec as Encoder<bool>>::encode(&self.dark)
            .map_err(|_| SettingsError::WriteFailed(DARK_MODE_KEY.to_string()))?;
        store.write(DARK_MODE_KEY, &encoded)
    }

    pub fn toggle_dark(&mut self) {
        self.dark = !self.dark;
    }
}
