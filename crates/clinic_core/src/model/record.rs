//! Persisted record envelope.

use serde::Serialize;

/// Store-generated row identifier. Always positive.
pub type RecordId = i64;

/// A validated record together with the identifier the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stored<T> {
    pub id: RecordId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Stored<T> {
    pub fn new(id: RecordId, record: T) -> Self {
        Self { id, record }
    }
}
