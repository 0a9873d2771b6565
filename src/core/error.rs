use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A stop-word given at construction is empty or contains control bytes.
    InvalidStopWord,
    /// A negative document id, a reused id on add, or an unknown id on lookup.
    InvalidDocumentId,
    /// A document token contains a control byte.
    InvalidWord,
    /// A query token is malformed: empty after stripping `-`, `--` prefix,
    /// trailing bare `-`, or a control byte anywhere in the raw query.
    InvalidQuery,
    /// `get_document_id` was called with a negative or too-large index.
    IndexOutOfRange,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Error {
            kind,
            context: context.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
