//! Error types for storage and dictionary lookups

use std::fmt;

/// Failure reading or writing the key-value store
#[derive(Debug)]
pub enum StorageError {
    /// Backing file could not be read or written
    Io(std::io::Error),
    /// Stored value or file is not the expected JSON
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O failed: {}", e),
            StorageError::Json(e) => write!(f, "storage data is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Json(err)
    }
}

/// Failure talking to the dictionary service
#[derive(Debug)]
pub enum DictionaryError {
    /// Connection, read, or write failed
    Io(std::io::Error),
    /// The service did not answer in time
    Timeout,
    /// Non-success HTTP status
    Status(u16),
    /// Response could not be parsed as HTTP
    MalformedResponse(String),
    /// Response body is not the expected JSON
    Decode(serde_json::Error),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Io(e) => write!(f, "dictionary request failed: {}", e),
            DictionaryError::Timeout => write!(f, "dictionary request timed out"),
            DictionaryError::Status(code) => write!(f, "dictionary returned status {}", code),
            DictionaryError::MalformedResponse(msg) => {
                write!(f, "malformed dictionary response: {}", msg)
            }
            DictionaryError::Decode(e) => write!(f, "unexpected dictionary payload: {}", e),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io(e) => Some(e),
            DictionaryError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DictionaryError {
    fn from(err: std::io::Error) -> Self {
        DictionaryError::Io(err)
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(err: serde_json::Error) -> Self {
        DictionaryError::Decode(err)
    }
}
