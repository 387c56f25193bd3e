//! Leaderboard stores
//!
//! A store is an append-only ranked collection. `submit` appends, re-sorts by
//! score descending, and trims to the store's cap; `list` returns the ranking.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::entry::{parse_entries, rank, LeaderboardEntry};
use crate::error::LeaderboardError;

/// Default number of entries a store keeps
pub const DEFAULT_CAP: usize = 10;

/// Remote or local collection of scores
pub trait LeaderboardStore: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<LeaderboardEntry>, LeaderboardError>> + Send;

    fn submit(
        &self,
        entry: LeaderboardEntry,
    ) -> impl Future<Output = Result<(), LeaderboardError>> + Send;
}

impl<S: LeaderboardStore> LeaderboardStore for Arc<S> {
    fn list(&self) -> impl Future<Output = Result<Vec<LeaderboardEntry>, LeaderboardError>> + Send {
        (**self).list()
    }

    fn submit(
        &self,
        entry: LeaderboardEntry,
    ) -> impl Future<Output = Result<(), LeaderboardError>> + Send {
        (**self).submit(entry)
    }
}

/// In-memory store
#[derive(Debug)]
pub struct MemoryLeaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
    cap: Option<usize>,
}

impl Default for MemoryLeaderboard {
    fn default() -> Self {
        Self::new(Some(DEFAULT_CAP))
    }
}

impl MemoryLeaderboard {
    pub fn new(cap: Option<usize>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            cap,
        }
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }
}

impl LeaderboardStore for MemoryLeaderboard {
    fn list(&self) -> impl Future<Output = Result<Vec<LeaderboardEntry>, LeaderboardError>> + Send {
        async move { Ok(self.entries.lock().await.clone()) }
    }

    fn submit(
        &self,
        entry: LeaderboardEntry,
    ) -> impl Future<Output = Result<(), LeaderboardError>> + Send {
        async move {
            let mut entries = self.entries.lock().await;
            entries.push(entry);
            rank(&mut entries, self.cap);
            Ok(())
        }
    }
}

/// Store kept as a pretty-printed JSON array in a file
///
/// A missing file is an empty leaderboard. Writes are serialized through a
/// lock so concurrent submissions do not lose entries.
#[derive(Debug)]
pub struct FileLeaderboard {
    path: PathBuf,
    cap: Option<usize>,
    write_lock: Mutex<()>,
}

impl FileLeaderboard {
    pub fn new(path: impl AsRef<Path>, cap: Option<usize>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cap,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(parse_entries(&text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl LeaderboardStore for FileLeaderboard {
    fn list(&self) -> impl Future<Output = Result<Vec<LeaderboardEntry>, LeaderboardError>> + Send {
        async move {
            let mut entries = self.read().await?;
            rank(&mut entries, None);
            Ok(entries)
        }
    }

    fn submit(
        &self,
        entry: LeaderboardEntry,
    ) -> impl Future<Output = Result<(), LeaderboardError>> + Send {
        async move {
            let _guard = self.write_lock.lock().await;
            let mut entries = self.read().await?;
            entries.push(entry);
            rank(&mut entries, self.cap);

            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            let text = serde_json::to_string_pretty(&entries)?;
            tokio::fs::write(&self.path, text).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "lexplosion-leaderboard-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn test_memory_store_empty() {
        let store = MemoryLeaderboard::default();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_caps() {
        let store = MemoryLeaderboard::new(Some(2));
        for (name, score) in [("a", 1), ("b", 9), ("c", 5)] {
            store.submit(LeaderboardEntry::new(name, score, 0)).await.unwrap();
        }
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "b");
        assert_eq!(listed[1].name, "c");
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let path = temp_path("roundtrip");
        let _ = tokio::fs::remove_file(&path).await;

        let store = FileLeaderboard::new(&path, None);
        assert!(store.list().await.unwrap().is_empty());

        store.submit(LeaderboardEntry::new("low", 3, 10)).await.unwrap();
        store.submit(LeaderboardEntry::new("high", 40, 20)).await.unwrap();

        let reopened = FileLeaderboard::new(&path, None);
        let listed = reopened.list().await.unwrap();
        assert_eq!(listed[0], LeaderboardEntry::new("high", 40, 20));
        assert_eq!(listed[1], LeaderboardEntry::new("low", 3, 10));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_file_store_non_array_is_empty() {
        let path = temp_path("object");
        tokio::fs::write(&path, r#"{"error":"oops"}"#).await.unwrap();
        let store = FileLeaderboard::new(&path, None);
        assert!(store.list().await.unwrap().is_empty());
        let _ = tokio::fs::remove_file(&path).await;
    }
}
