//! Word cache - remembered dictionary verdicts
//!
//! Verdicts are stored as one JSON object under [`CACHE_KEY`], keyed by the
//! uppercased word. Entries never expire.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Storage key holding the verdict map
pub const CACHE_KEY: &str = "cachedWords";

/// Verdict cache over an injected store
///
/// Clones share one write lock, so concurrent inserts never drop each other.
#[derive(Clone)]
pub struct WordCache {
    store: Arc<dyn KeyValueStore>,
    write: Arc<Mutex<()>>,
}

impl WordCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write: Arc::new(Mutex::new(())),
        }
    }

    /// Cache key for `word`
    pub fn key(word: &str) -> String {
        word.to_uppercase()
    }

    fn load(&self) -> BTreeMap<String, bool> {
        let Some(text) = self.store.get(CACHE_KEY) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("[Cache] ignoring unreadable word cache: {}", e);
                BTreeMap::new()
            }
        }
    }

    /// Cached verdict for `word`, if any
    pub fn get(&self, word: &str) -> Option<bool> {
        self.load().get(&Self::key(word)).copied()
    }

    /// Remember the verdict for `word`
    pub fn insert(&self, word: &str, valid: bool) -> Result<(), StorageError> {
        let _guard = self.write.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut map = self.load();
        map.insert(Self::key(word), valid);
        let text = serde_json::to_string(&map)?;
        self.store.set(CACHE_KEY, &text)
    }

    /// Number of cached verdicts
    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for WordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCache").field("entries", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_cache_is_case_insensitive() {
        let cache = WordCache::new(Arc::new(MemoryStore::new()));
        cache.insert("planet", true).unwrap();
        assert_eq!(cache.get("PLANET"), Some(true));
        assert_eq!(cache.get("Planet"), Some(true));
        assert_eq!(cache.get("QZX"), None);
    }

    #[test]
    fn test_cache_stores_negative_verdicts() {
        let store = Arc::new(MemoryStore::new());
        let cache = WordCache::new(store.clone());
        cache.insert("qzx", false).unwrap();
        assert_eq!(cache.get("QZX"), Some(false));
        assert_eq!(store.get(CACHE_KEY).as_deref(), Some(r#"{"QZX":false}"#));
    }

    /// Memory store whose reads are slow enough to interleave writers
    struct SlowReads(MemoryStore);

    impl KeyValueStore for SlowReads {
        fn get(&self, key: &str) -> Option<String> {
            let value = self.0.get(key);
            std::thread::sleep(std::time::Duration::from_millis(20));
            value
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_concurrent_inserts_keep_both_verdicts() {
        let cache = WordCache::new(Arc::new(SlowReads(MemoryStore::new())));
        let writers: Vec<_> = ["CAT", "DOG"]
            .into_iter()
            .map(|word| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.insert(word, true).unwrap())
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(cache.get("CAT"), Some(true));
        assert_eq!(cache.get("DOG"), Some(true));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_recovers_from_garbage() {
        let store = Arc::new(MemoryStore::new());
        store.set(CACHE_KEY, "[oops").unwrap();
        let cache = WordCache::new(store);
        assert_eq!(cache.get("CAT"), None);
        cache.insert("cat", true).unwrap();
        assert_eq!(cache.len(), 1);
    }
}
