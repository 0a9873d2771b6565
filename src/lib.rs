//! An in-memory, TF-IDF-ranked inverted index over short documents.
//!
//! The engine is four interlocked pieces, leaves first:
//!
//! - [`analysis`] — whitespace tokenization (`tokenizer`) and word
//!   canonicalization (`interner`).
//! - [`index`] — the sharded [`index::concurrent_map::ConcurrentMap`] used to
//!   accumulate scores across parallel workers without a single shared lock.
//! - [`query`] — the plus/minus-word grammar (`parser`, `ast`).
//! - [`core`] — [`core::search_server::SearchServer`], which owns the forward
//!   and reverse posting lists, document metadata, and the stop-word set, and
//!   exposes `add_document`/`remove_document`/`match_document`/
//!   `find_top_documents`.
//! - [`scoring`] — TF-IDF combination (`scorer`) and top-K ranking with
//!   deterministic tie-breaking (`ranker`).
//! - [`parallel`] — a runtime `ExecutionPolicy` over the sequential/parallel
//!   pairs `SearchServer` already exposes.
//! - [`search`] — operations built on top of `SearchServer` rather than
//!   inside it: duplicate-set detection (`duplicates`) and the parallel
//!   batch query runner (`batch`).
//!
//! Out of scope, per spec: persistence, cross-process distribution,
//! stemming/linguistic normalization, phrase or proximity queries.

pub mod analysis;
pub mod core;
pub mod index;
pub mod parallel;
pub mod query;
pub mod scoring;
pub mod search;

pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::search_server::SearchServer;
pub use crate::core::types::{Document, DocumentId, DocumentStatus};
