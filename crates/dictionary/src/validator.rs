//! Word validator - local checks, cache, then the dictionary
//!
//! Order of checks for `validate(word, cells)`:
//!
//! 1. Shape: non-empty path of distinct, touching cells, one per letter,
//!    and at least `MIN_WORD_LEN` letters. Failing words never reach the
//!    cache or the network.
//! 2. Cache: a remembered verdict is returned as-is.
//! 3. Dictionary: one lookup; the verdict is cached forever.
//!
//! A failed lookup counts as invalid and is not cached, so the next attempt
//! asks again.

use std::fmt;

use crate::cache::WordCache;
use crate::lookup::{is_valid_response, DictionaryLookup};
use crate::types::{Coord, ValidityPolicy, MIN_WORD_LEN};
use lexplosion_core::is_connected_path;

/// Why a word was refused before any lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    EmptySelection,
    TooShort,
    /// Cell count differs from letter count
    LengthMismatch,
    /// Cells repeat or do not touch in sequence
    NotConnected,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EmptySelection => write!(f, "no cells selected"),
            ShapeError::TooShort => write!(f, "word shorter than {} letters", MIN_WORD_LEN),
            ShapeError::LengthMismatch => write!(f, "cells do not match the word"),
            ShapeError::NotConnected => write!(f, "cells are not a connected path"),
        }
    }
}

/// Where a verdict came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictSource {
    Shape(ShapeError),
    Cache,
    Dictionary,
    /// Lookup failed; treated as invalid
    Unavailable,
}

/// Validity plus provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub source: VerdictSource,
}

impl Verdict {
    fn new(valid: bool, source: VerdictSource) -> Self {
        Self { valid, source }
    }
}

/// Check that `word` and `cells` describe a submittable selection
pub fn check_shape(word: &str, cells: &[Coord]) -> Result<(), ShapeError> {
    if cells.is_empty() {
        return Err(ShapeError::EmptySelection);
    }
    let len = word.chars().count();
    if len < MIN_WORD_LEN {
        return Err(ShapeError::TooShort);
    }
    if len != cells.len() {
        return Err(ShapeError::LengthMismatch);
    }
    if !is_connected_path(cells) {
        return Err(ShapeError::NotConnected);
    }
    Ok(())
}

/// Validates words against a dictionary through a verdict cache
pub struct WordValidator<D> {
    dictionary: D,
    cache: WordCache,
    policy: ValidityPolicy,
}

impl<D: DictionaryLookup> WordValidator<D> {
    pub fn new(dictionary: D, cache: WordCache, policy: ValidityPolicy) -> Self {
        Self {
            dictionary,
            cache,
            policy,
        }
    }

    pub fn policy(&self) -> ValidityPolicy {
        self.policy
    }

    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// True when `word` spelled along `cells` is a playable word
    pub async fn validate(&self, word: &str, cells: &[Coord]) -> bool {
        self.check(word, cells).await.valid
    }

    /// Like [`validate`](Self::validate) but reports where the verdict came from
    pub async fn check(&self, word: &str, cells: &[Coord]) -> Verdict {
        if let Err(reason) = check_shape(word, cells) {
            log::debug!("[Validator] rejected {:?} before lookup: {}", word, reason);
            return Verdict::new(false, VerdictSource::Shape(reason));
        }

        let key = WordCache::key(word);
        if let Some(valid) = self.cache.get(&key) {
            log::debug!("[Validator] cache hit for {} -> {}", key, valid);
            return Verdict::new(valid, VerdictSource::Cache);
        }

        match self.dictionary.lookup(word).await {
            Ok(matches) => {
                let valid = is_valid_response(&key, &matches, self.policy);
                self.remember(&key, valid).await;
                log::info!("[Validator] {} -> {}", key, if valid { "valid" } else { "invalid" });
                Verdict::new(valid, VerdictSource::Dictionary)
            }
            Err(e) => {
                log::warn!("[Validator] error validating {}: {}", key, e);
                Verdict::new(false, VerdictSource::Unavailable)
            }
        }
    }
}

impl<D> WordValidator<D> {
    /// Cache a verdict on the blocking pool; file-backed stores write synchronously
    async fn remember(&self, key: &str, valid: bool) {
        let cache = self.cache.clone();
        let owned = key.to_string();
        match tokio::task::spawn_blocking(move || cache.insert(&owned, valid)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::warn!("[Validator] could not cache verdict for {}: {}", key, e),
            Err(e) => log::warn!("[Validator] cache write for {} did not finish: {}", key, e),
        }
    }
}

impl<D> fmt::Debug for WordValidator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordValidator")
            .field("cache", &self.cache)
            .field("policy", &self.policy)
            .finish()
    }
}
