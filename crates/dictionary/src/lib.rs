//! Dictionary module - word validation with a persistent verdict cache
//!
//! Words that pass the local shape checks are looked up in an external
//! dictionary, and the verdict is remembered in client storage so each word
//! costs at most one network call.
//!
//! # Module Structure
//!
//! - [`storage`]: Injected string-keyed storage (memory or JSON file)
//! - [`cache`]: Verdict cache kept under the `cachedWords` key
//! - [`lookup`]: Dictionary trait, response type, and validity policy
//! - [`http`]: Datamuse-compatible HTTP client over tokio
//! - [`validator`]: The `validate(word, cells)` pipeline
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lexplosion_dictionary::{MemoryStore, WordCache, WordListDictionary, WordValidator};
//! use lexplosion_dictionary::types::{Coord, ValidityPolicy};
//!
//! let validator = WordValidator::new(
//!     WordListDictionary::new(["cat"]),
//!     WordCache::new(Arc::new(MemoryStore::new())),
//!     ValidityPolicy::Strict,
//! );
//! let cells = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)];
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! assert!(rt.block_on(validator.validate("CAT", &cells)));
//! assert!(!rt.block_on(validator.validate("CAX", &cells)));
//! ```

pub mod cache;
pub mod error;
pub mod http;
pub mod lookup;
pub mod storage;
pub mod validator;

pub use lexplosion_types as types;

pub use cache::{WordCache, CACHE_KEY};
pub use error::{DictionaryError, StorageError};
pub use http::HttpDictionary;
pub use lookup::{is_valid_response, DictionaryLookup, LookupMatch, WordListDictionary};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use validator::{check_shape, ShapeError, Verdict, VerdictSource, WordValidator};
