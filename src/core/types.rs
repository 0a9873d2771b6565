use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A document identifier, chosen by the caller. Logically non-negative;
/// negative values are rejected at the `SearchServer` boundary rather than
/// encoded into the type, so the error path can report `InvalidDocumentId`
/// the same way for "negative" and "already indexed" (see spec.md's error
/// taxonomy).
pub type DocumentId = i64;

/// An interned token. Cloning is a refcount bump, not a copy of the bytes,
/// and two `intern()` calls on equal text always yield equal `Word`s.
pub type Word = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// The ranked result handed back to callers: a scored, rated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

/// Immutable record stored for every live document. Never mutated after
/// `AddDocument`; only removed wholesale by `RemoveDocument`.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub rating: i32,
    pub status: DocumentStatus,
    pub text: String,
}

/// Truncated integer division with the sign following the usual C-style
/// truncation toward zero. An empty list averages to 0.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_truncates_toward_zero() {
        assert_eq!(compute_average_rating(&[]), 0);
        assert_eq!(compute_average_rating(&[1, 2, 3]), 2);
        assert_eq!(compute_average_rating(&[-1, -2, -3]), -2);
        assert_eq!(compute_average_rating(&[5]), 5);
        assert_eq!(compute_average_rating(&[1, 2]), 1);
    }
}
