// SPDX-License-Identifier: GPL-3.0-only

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anywho::{Error, anywho};

use crate::{config::APP_ID, entities::ThemePreference, utils::StarryError};

/// Key the theme is stored under
pub const THEME_KEY: &str = "theme";

/// Persistent string key-value store backing the preferences
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StarryError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StarryError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StarryError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StarryError> {
        (**self).set(key, value)
    }
}

/// RON file holding every key, rewritten whole on each write
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/<APP_ID>/preferences.ron`
    pub fn default_location() -> Result<Self, StarryError> {
        let path = dirs::data_dir()
            .ok_or_else(|| StarryError::Storage(String::from("no data directory available")))?
            .join(APP_ID)
            .join("preferences.ron");
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, Error> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        ron::from_str(&contents).map_err(|e| anywho!("{e}"))
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let serialized = ron::ser::to_string_pretty(values, ron::ser::PrettyConfig::default())
            .map_err(|e| anywho!("{e}"))?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StarryError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StarryError> {
        // unreadable contents are dropped and rewritten
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        Ok(self.write_all(&values)?)
    }
}

/// Process-local store, nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StarryError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StarryError::Storage(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StarryError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StarryError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the theme preference
#[derive(Debug)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored theme, `Light` when nothing is stored or the store can't be read
    pub fn get_preference(&self) -> ThemePreference {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => ThemePreference::from_stored(&value),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme preference, using default");
                ThemePreference::default()
            }
        }
    }

    pub fn set_preference(&self, theme: ThemePreference) -> Result<(), StarryError> {
        tracing::debug!(%theme, "persisting theme preference");
        self.store.set(THEME_KEY, theme.as_str())
    }
}
