//! Collaborators built from a [`GameConfig`]

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};

use lexplosion_dictionary::{
    DictionaryError, DictionaryLookup, HttpDictionary, JsonFileStore, KeyValueStore, LookupMatch,
    MemoryStore, WordCache, WordListDictionary, WordValidator,
};
use lexplosion_leaderboard::{FileLeaderboard, LeaderboardClient, LocalHighScores};

use crate::config::GameConfig;

/// Dictionary picked at startup
#[derive(Debug, Clone)]
pub enum AnyDictionary {
    Http(HttpDictionary),
    WordList(WordListDictionary),
}

impl DictionaryLookup for AnyDictionary {
    fn lookup(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<LookupMatch>, DictionaryError>> + Send {
        async move {
            match self {
                AnyDictionary::Http(d) => d.lookup(word).await,
                AnyDictionary::WordList(d) => d.lookup(word).await,
            }
        }
    }
}

/// Client storage: a JSON file when configured, memory otherwise
pub fn open_storage(config: &GameConfig) -> Result<Arc<dyn KeyValueStore>> {
    match &config.storage_path {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .with_context(|| format!("failed to open storage at {}", path.display()))?;
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(MemoryStore::new())),
    }
}

/// Network dictionary, or a local word list for offline play
pub async fn build_dictionary(config: &GameConfig) -> Result<AnyDictionary> {
    if let Some(path) = &config.word_list_path {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let list = WordListDictionary::from_text(&text);
        log::info!("[Engine] loaded {} words from {}", list.len(), path.display());
        return Ok(AnyDictionary::WordList(list));
    }
    if config.offline {
        log::warn!("[Engine] offline without a word list; every word will be rejected");
        return Ok(AnyDictionary::WordList(WordListDictionary::default()));
    }
    Ok(AnyDictionary::Http(
        HttpDictionary::new(config.dictionary_host.clone(), config.dictionary_port)
            .with_timeout(config.dictionary_timeout),
    ))
}

pub fn build_validator(
    config: &GameConfig,
    dictionary: AnyDictionary,
    storage: Arc<dyn KeyValueStore>,
) -> WordValidator<AnyDictionary> {
    WordValidator::new(dictionary, WordCache::new(storage), config.validity)
}

pub fn build_leaderboard(config: &GameConfig) -> LeaderboardClient<FileLeaderboard> {
    LeaderboardClient::new(FileLeaderboard::new(
        &config.leaderboard_path,
        config.leaderboard_cap,
    ))
}

pub fn build_local_scores(storage: Arc<dyn KeyValueStore>) -> LocalHighScores {
    LocalHighScores::new(storage)
}
