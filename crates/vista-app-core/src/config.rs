// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Preference persistence.
//!
//! A [`ConfigStore`] only moves bytes under logical keys. [`ConfigService`]
//! owns the JSON encoding and knows where the explorer preferences live.

use crate::prefs::{ExplorerPrefs, EXPLORER_PREFS_KEY};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port for raw config blobs, keyed by logical name.
pub trait ConfigStore {
    /// Load a raw blob. Returns [`ConfigError::NotFound`] when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Config failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key.
    #[error("no config stored")]
    NotFound,
    /// The key cannot name a blob in this store.
    #[error("invalid config key {0:?}")]
    InvalidKey(String),
    /// The platform has no per-user config directory.
    #[error("no platform config directory")]
    NoConfigDir,
    /// The store refused the operation.
    #[error("config store unavailable: {0}")]
    Unavailable(String),
    /// Filesystem failure.
    #[error("config i/o: {0}")]
    Io(#[from] std::io::Error),
    /// A stored blob is not valid for the requested type.
    #[error("config `{key}` is unreadable: {source}")]
    Corrupt {
        /// Key of the bad blob.
        key: String,
        /// Decoder error.
        source: serde_json::Error,
    },
    /// A value could not be encoded.
    #[error("could not encode config: {0}")]
    Encode(#[source] serde_json::Error),
}

/// JSON codec over a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Value stored under `key`; `Ok(None)` when missing or blank.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ConfigError::Corrupt {
                key: key.to_owned(),
                source,
            })
    }

    /// Like [`load`](Self::load), but a missing key yields `T::default()`.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Encode `value` as pretty JSON and store it under `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value).map_err(ConfigError::Encode)?;
        self.store.save_raw(key, &data)
    }

    /// Saved explorer preferences, or the defaults when none were saved.
    /// Fields missing from an older file take their defaults.
    pub fn load_prefs(&self) -> Result<ExplorerPrefs, ConfigError> {
        self.load_or_default(EXPLORER_PREFS_KEY)
    }

    /// Persist explorer preferences.
    pub fn save_prefs(&self, prefs: &ExplorerPrefs) -> Result<(), ConfigError> {
        self.save(EXPLORER_PREFS_KEY, prefs)
    }
}
