//! Key-value storage backends.
//!
//! The simulators only ever talk to a [`KeyValueStore`]. In the browser that is
//! `window.localStorage`; everywhere else (and whenever localStorage is blocked,
//! e.g. some private-browsing modes) it is an in-memory map that lives for the
//! page load.

use std::collections::HashMap;
use std::fmt;

/// Why a storage operation failed.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage backend is reachable.
    Unavailable,
    /// The backend refused the operation (quota exceeded, security error, ...).
    Rejected(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Rejected(reason) => write!(f, "storage rejected the operation: {reason}"),
        }
    }
}

/// Minimal string key-value interface, shaped after the Web Storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    #[cfg(test)]
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Forgets everything when dropped.
#[derive(Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    /// When set, every read fails with [`StorageError::Rejected`].
    reject_reads: bool,
    /// When set, every write fails with [`StorageError::Rejected`].
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising the swallow-and-log paths.
    #[cfg(test)]
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    /// A store whose reads always fail (security error on `getItem`).
    #[cfg(test)]
    pub fn rejecting_reads() -> Self {
        Self {
            reject_reads: true,
            ..Self::default()
        }
    }

    /// Seed a value directly, bypassing `reject_writes`.
    #[cfg(test)]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.reject_reads {
            return Err(StorageError::Rejected("access denied".to_string()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    #[cfg(test)]
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        self.items.remove(key);
        Ok(())
    }
}

/// `window.localStorage`. WASM 環境でのみ動作。
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Rejected(format!("{e:?}"))),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    #[cfg(test)]
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// Pick the best store for the current target.
/// localStorage が使えない場合はページ内メモリにフォールバックする。
#[cfg(target_arch = "wasm32")]
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            crate::console::warn(&format!(
                "Storage: localStorage unavailable ({e}), falling back to memory"
            ));
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_store() -> Box<dyn KeyValueStore> {
    Box::new(MemoryStore::new())
}
