//! Word validation: local checks, verdict cache, and the HTTP dictionary

use std::future::Future;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use lexplosion::dictionary::{
    DictionaryError, DictionaryLookup, HttpDictionary, JsonFileStore, KeyValueStore, LookupMatch,
    MemoryStore, WordCache, WordValidator, CACHE_KEY,
};
use lexplosion::types::{Coord, ValidityPolicy};

/// Answers every lookup with one defined match, counting calls
#[derive(Default)]
struct EverythingDictionary {
    calls: AtomicUsize,
}

impl DictionaryLookup for EverythingDictionary {
    fn lookup(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<LookupMatch>, DictionaryError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let found = vec![LookupMatch::new(word.to_lowercase(), vec!["n\tsomething".into()])];
        std::future::ready(Ok(found))
    }
}

fn path(n: usize) -> Vec<Coord> {
    (0..n).map(|i| Coord::new(i, 0)).collect()
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lexplosion-it-{}-{}", std::process::id(), name))
}

#[test]
fn test_short_words_skip_the_dictionary() {
    let dict = Arc::new(EverythingDictionary::default());
    let validator = WordValidator::new(
        Arc::clone(&dict),
        WordCache::new(Arc::new(MemoryStore::new())),
        ValidityPolicy::Loose,
    );
    for word in ["", "A", "AT"] {
        let cells = path(word.len());
        assert!(!tokio_test::block_on(validator.validate(word, &cells)));
    }
    assert_eq!(dict.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_second_validation_uses_cache() {
    let dict = Arc::new(EverythingDictionary::default());
    let validator = WordValidator::new(
        Arc::clone(&dict),
        WordCache::new(Arc::new(MemoryStore::new())),
        ValidityPolicy::Strict,
    );
    assert!(tokio_test::block_on(validator.validate("rain", &path(4))));
    assert!(tokio_test::block_on(validator.validate("RAIN", &path(4))));
    assert_eq!(dict.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_cache_survives_restart() {
    let file = temp_file("cache.json");
    let _ = std::fs::remove_file(&file);

    let dict = Arc::new(EverythingDictionary::default());
    {
        let store = Arc::new(JsonFileStore::open(&file).unwrap());
        let validator = WordValidator::new(
            Arc::clone(&dict),
            WordCache::new(store),
            ValidityPolicy::Strict,
        );
        assert!(tokio_test::block_on(validator.validate("TREE", &path(4))));
    }

    let store = Arc::new(JsonFileStore::open(&file).unwrap());
    let raw = store.get(CACHE_KEY).unwrap();
    let cached: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(cached["TREE"], serde_json::Value::Bool(true));

    let validator = WordValidator::new(
        Arc::clone(&dict),
        WordCache::new(store),
        ValidityPolicy::Strict,
    );
    assert!(tokio_test::block_on(validator.validate("tree", &path(4))));
    assert_eq!(dict.calls.load(Ordering::SeqCst), 1);
    let _ = std::fs::remove_file(&file);
}

async fn serve(body: &'static str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    port
}

#[tokio::test]
async fn test_strict_policy_needs_a_definition() {
    // The service answered, but with a near match and no definitions.
    let port = serve(r#"[{"word":"catt","score":10}]"#).await;
    let strict = WordValidator::new(
        HttpDictionary::new("127.0.0.1", port),
        WordCache::new(Arc::new(MemoryStore::new())),
        ValidityPolicy::Strict,
    );
    assert!(!strict.validate("CAT", &path(3)).await);

    let port = serve(r#"[{"word":"catt","score":10}]"#).await;
    let loose = WordValidator::new(
        HttpDictionary::new("127.0.0.1", port),
        WordCache::new(Arc::new(MemoryStore::new())),
        ValidityPolicy::Loose,
    );
    assert!(loose.validate("CAT", &path(3)).await);
}

#[tokio::test]
async fn test_unreachable_dictionary_counts_as_invalid() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let cache = WordCache::new(Arc::new(MemoryStore::new()));
    let validator = WordValidator::new(
        HttpDictionary::new("127.0.0.1", port),
        cache,
        ValidityPolicy::Strict,
    );
    assert!(!validator.validate("CAT", &path(3)).await);
    assert_eq!(validator.cache().get("CAT"), None);
}
