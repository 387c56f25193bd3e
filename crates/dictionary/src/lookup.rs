//! Lookup module - dictionary responses and validity policy
//!
//! A lookup returns candidate matches for an exact spelling. Each match is a
//! word plus its definitions (possibly none). Whether that makes the word
//! playable is decided by [`ValidityPolicy`]:
//!
//! - **Strict**: some match equals the word (ignoring case) and has a definition
//! - **Loose**: the service returned anything at all

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;
use crate::types::ValidityPolicy;

/// One candidate returned by the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupMatch {
    pub word: String,
    #[serde(default, rename = "defs")]
    pub definitions: Vec<String>,
}

impl LookupMatch {
    pub fn new(word: impl Into<String>, definitions: Vec<String>) -> Self {
        Self {
            word: word.into(),
            definitions,
        }
    }

    /// True when this candidate is `word` (case-insensitive)
    pub fn matches(&self, word: &str) -> bool {
        self.word.to_uppercase() == word.to_uppercase()
    }

    pub fn has_definitions(&self) -> bool {
        self.definitions.iter().any(|d| !d.trim().is_empty())
    }
}

/// Decide validity of `word` from the candidates the dictionary returned
pub fn is_valid_response(word: &str, matches: &[LookupMatch], policy: ValidityPolicy) -> bool {
    match policy {
        ValidityPolicy::Loose => !matches.is_empty(),
        ValidityPolicy::Strict => matches
            .iter()
            .any(|m| m.matches(word) && m.has_definitions()),
    }
}

/// External dictionary queried by exact spelling
pub trait DictionaryLookup: Send + Sync {
    fn lookup(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<LookupMatch>, DictionaryError>> + Send;
}

impl<D: DictionaryLookup> DictionaryLookup for Arc<D> {
    fn lookup(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<LookupMatch>, DictionaryError>> + Send {
        (**self).lookup(word)
    }
}

/// In-process dictionary backed by a word list
///
/// Used for offline play. Every listed word is returned with a placeholder
/// definition so it passes the strict policy.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: BTreeSet<String>,
}

impl WordListDictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// One word per line; blank lines and `#` comments are skipped
    pub fn from_text(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }
}

impl DictionaryLookup for WordListDictionary {
    fn lookup(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<LookupMatch>, DictionaryError>> + Send {
        let found = if self.contains(word) {
            vec![LookupMatch::new(
                word.to_lowercase(),
                vec!["word list entry".to_string()],
            )]
        } else {
            Vec::new()
        };
        std::future::ready(Ok(found))
    }
}
