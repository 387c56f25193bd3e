//! Game-side leaderboard client
//!
//! Leaderboard trouble never interrupts play: reads that fail come back
//! empty, and submissions run in the background with failures only logged.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::entry::LeaderboardEntry;
use crate::store::LeaderboardStore;

/// Best-effort wrapper around a store
#[derive(Debug)]
pub struct LeaderboardClient<S> {
    store: Arc<S>,
}

impl<S> Clone for LeaderboardClient<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LeaderboardStore + 'static> LeaderboardClient<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Current ranking; empty if the store cannot be read
    pub async fn list(&self) -> Vec<LeaderboardEntry> {
        match self.store.list().await {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("[Leaderboard] could not fetch leaderboard: {}", e);
                Vec::new()
            }
        }
    }

    /// Submit and wait; returns whether the entry was saved
    pub async fn submit(&self, entry: LeaderboardEntry) -> bool {
        let name = entry.name.clone();
        let score = entry.score;
        match self.store.submit(entry).await {
            Ok(()) => {
                log::info!("[Leaderboard] saved {} with {} points", name, score);
                true
            }
            Err(e) => {
                log::error!("[Leaderboard] could not save score for {}: {}", name, e);
                false
            }
        }
    }

    /// Submit in the background
    ///
    /// Must be called from within a tokio runtime. The handle may be dropped.
    pub fn submit_detached(&self, entry: LeaderboardEntry) -> JoinHandle<bool> {
        let client = self.clone();
        tokio::spawn(async move { client.submit(entry).await })
    }
}
