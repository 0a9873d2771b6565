use crate::analysis::interner::WordInterner;
use crate::analysis::tokenizer::split_into_words;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{compute_average_rating, Document, DocumentId, DocumentRecord, DocumentStatus, Word};
use crate::index::concurrent_map::ConcurrentMap;
use crate::query::ast::Query;
use crate::query::parser::{is_valid_word, parse_query};
use crate::scoring::ranker::top_k;
use crate::scoring::scorer::{inverse_document_freq, Scorer, TfIdfScorer};
use dashmap::DashMap;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A document predicate as used by `find_top_documents`: given a candidate's
/// id, status, and rating, decide whether it stays in contention.
pub trait DocumentPredicate: Fn(DocumentId, DocumentStatus, i32) -> bool + Send + Sync {}
impl<F: Fn(DocumentId, DocumentStatus, i32) -> bool + Send + Sync> DocumentPredicate for F {}

/// In-memory, TF-IDF-ranked inverted index over short documents.
///
/// Owns two mirror posting lists — `forward` (word -> doc -> tf) and
/// `reverse` (doc -> word -> tf) — plus the document metadata and the
/// stop-word set fixed at construction. Readers (`find_top_documents`,
/// `match_document`, `get_word_frequencies`) take `&self` and may run
/// concurrently with each other; writers (`add_document`,
/// `remove_document`) take `&mut self`, so the borrow checker itself
/// enforces the "no writer overlaps a reader" rule spec.md leaves to the
/// caller in other languages.
pub struct SearchServer {
    stop_words: HashSet<Box<str>>,
    interner: WordInterner,
    forward: DashMap<Word, BTreeMap<DocumentId, f64>>,
    reverse: HashMap<DocumentId, HashMap<Word, f64>>,
    documents: BTreeMap<DocumentId, DocumentRecord>,
    config: Config,
    scorer: TfIdfScorer,
}

impl SearchServer {
    /// Builds a server from an already-split stop-word list.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, Config::default())
    }

    pub fn with_config<I, S>(stop_words: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Mirrors the teacher's `ParallelIndexer::new` (`parallel/indexer.rs`):
        // size rayon's global pool once. `build_global` errors if the pool is
        // already initialized (e.g. a second `SearchServer` in the same
        // process); `.ok()` ignores that the same way the teacher does, since
        // a pool sized by an earlier caller is still a valid pool to share.
        rayon::ThreadPoolBuilder::new().num_threads(config.worker_count).build_global().ok();

        let mut validated = HashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if word.is_empty() || !is_valid_word(word) {
                return Err(Error::new(
                    ErrorKind::InvalidStopWord,
                    format!("stop word {word:?} is empty or contains a control byte"),
                ));
            }
            validated.insert(Box::from(word));
        }
        Ok(SearchServer {
            stop_words: validated,
            interner: WordInterner::new(),
            forward: DashMap::new(),
            reverse: HashMap::new(),
            documents: BTreeMap::new(),
            config,
            scorer: TfIdfScorer,
        })
    }

    /// Equivalent to tokenizing `stop_words_text` first, then calling `new`.
    pub fn with_stop_words_text(stop_words_text: &str) -> Result<Self> {
        Self::new(split_into_words(stop_words_text))
    }

    pub fn get_document_count(&self) -> usize {
        self.documents.len()
    }

    /// Live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.keys().copied()
    }

    /// The `index`-th live document id in ascending order.
    pub fn get_document_id(&self, index: i64) -> Result<DocumentId> {
        if index < 0 || index as usize >= self.documents.len() {
            return Err(Error::new(
                ErrorKind::IndexOutOfRange,
                format!("index {index} is out of range for {} documents", self.documents.len()),
            ));
        }
        Ok(*self.documents.keys().nth(index as usize).expect("index bounds checked above"))
    }

    /// A freshly computed `word -> tf` map for `id`, or an empty map if `id`
    /// isn't indexed. Never cached across calls.
    pub fn get_word_frequencies(&self, id: DocumentId) -> HashMap<Word, f64> {
        self.reverse.get(&id).cloned().unwrap_or_default()
    }

    pub fn add_document(&mut self, id: DocumentId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if id < 0 {
            return Err(Error::new(ErrorKind::InvalidDocumentId, format!("document id {id} is negative")));
        }
        if self.documents.contains_key(&id) {
            return Err(Error::new(ErrorKind::InvalidDocumentId, format!("document id {id} is already indexed")));
        }

        let mut surviving = Vec::new();
        for token in split_into_words(text) {
            if !is_valid_word(token) {
                return Err(Error::new(ErrorKind::InvalidWord, format!("word {token:?} contains a control byte")));
            }
            if self.stop_words.contains(token) {
                continue;
            }
            surviving.push(token);
        }

        let inv_word_count = if surviving.is_empty() { 0.0 } else { 1.0 / surviving.len() as f64 };
        let mut doc_freqs: HashMap<Word, f64> = HashMap::new();
        for token in surviving {
            let word = self.interner.intern(token);
            *self.forward.entry(word.clone()).or_default().entry(id).or_insert(0.0) += inv_word_count;
            *doc_freqs.entry(word).or_insert(0.0) += inv_word_count;
        }

        self.reverse.insert(id, doc_freqs);
        self.documents.insert(
            id,
            DocumentRecord {
                rating: compute_average_rating(ratings),
                status,
                text: text.to_string(),
            },
        );
        Ok(())
    }

    /// No-op if `id` isn't indexed.
    pub fn remove_document(&mut self, id: DocumentId) {
        let Some(word_freqs) = self.reverse.remove(&id) else {
            return;
        };
        for word in word_freqs.into_keys() {
            self.erase_from_forward(&word, id);
        }
        self.documents.remove(&id);
    }

    /// Same contract as `remove_document`, but the per-word erasures from
    /// `forward` run across rayon workers. Each worker touches a distinct
    /// word's posting list, and `forward` is a `DashMap` so concurrent
    /// mutation of distinct entries needs no extra locking on our part.
    pub fn remove_document_parallel(&mut self, id: DocumentId) {
        let Some(word_freqs) = self.reverse.remove(&id) else {
            return;
        };
        let words: Vec<Word> = word_freqs.into_keys().collect();
        let forward = &self.forward;
        words.into_par_iter().for_each(|word| {
            erase_from_forward(forward, &word, id);
        });
        self.documents.remove(&id);
    }

    fn erase_from_forward(&self, word: &Word, id: DocumentId) {
        erase_from_forward(&self.forward, word, id);
    }

    /// Parses `raw_query` and reports which of its plus-words appear in
    /// `id`, or an empty set together with the status if any minus-word is
    /// present. Preserves the parse's sorted set order.
    pub fn match_document(&self, raw_query: &str, id: DocumentId) -> Result<(Vec<Word>, DocumentStatus)> {
        let record = self.document_record(id)?;
        let query = parse_query(raw_query, &self.stop_words, &self.interner)?;
        let doc_words = self.reverse.get(&id);

        if query.minus_words.iter().any(|w| doc_words.is_some_and(|dw| dw.contains_key(w))) {
            return Ok((Vec::new(), record.status));
        }
        let matched = query
            .plus_words
            .into_iter()
            .filter(|w| doc_words.is_some_and(|dw| dw.contains_key(w)))
            .collect();
        Ok((matched, record.status))
    }

    /// Same contract as `match_document`, evaluated across rayon workers.
    /// The result is sorted and de-duplicated after gathering — the fixed
    /// form of a one-off slicing bug in the original implementation (see
    /// DESIGN.md).
    pub fn match_document_parallel(&self, raw_query: &str, id: DocumentId) -> Result<(Vec<Word>, DocumentStatus)> {
        let record = self.document_record(id)?;
        let query = parse_query(raw_query, &self.stop_words, &self.interner)?;
        let doc_words = self.reverse.get(&id);

        let any_minus = query.minus_words.par_iter().any(|w| doc_words.is_some_and(|dw| dw.contains_key(w)));
        if any_minus {
            return Ok((Vec::new(), record.status));
        }

        let mut matched: Vec<Word> = query
            .plus_words
            .into_par_iter()
            .filter(|w| doc_words.is_some_and(|dw| dw.contains_key(w)))
            .collect();
        matched.sort_unstable();
        matched.dedup();
        Ok((matched, record.status))
    }

    fn document_record(&self, id: DocumentId) -> Result<&DocumentRecord> {
        if id < 0 {
            return Err(Error::new(ErrorKind::InvalidDocumentId, format!("document id {id} is negative")));
        }
        self.documents
            .get(&id)
            .ok_or_else(|| Error::new(ErrorKind::InvalidDocumentId, format!("document id {id} is not indexed")))
    }

    /// Top `max_k` documents for `raw_query`, filtered by `predicate`,
    /// scored sequentially.
    pub fn find_top_documents<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let query = parse_query(raw_query, &self.stop_words, &self.interner)?;
        let scored = self.score_sequential(&query, &predicate);
        Ok(top_k(scored, self.config.max_k, self.config.epsilon))
    }

    /// Same contract as `find_top_documents`, but the plus-word scoring
    /// runs across rayon workers into a `ConcurrentMap` before the
    /// sequential minus-word erasure and ranking pass.
    pub fn find_top_documents_parallel<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let query = parse_query(raw_query, &self.stop_words, &self.interner)?;
        let scored = self.score_parallel(&query, &predicate);
        Ok(top_k(scored, self.config.max_k, self.config.epsilon))
    }

    /// Convenience over `find_top_documents` selecting by document status.
    pub fn find_top_documents_with_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents(raw_query, move |_, s, _| s == status)
    }

    /// `find_top_documents_with_status(raw_query, DocumentStatus::Actual)`.
    pub fn find_top_documents_actual(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    fn score_sequential<P: DocumentPredicate>(&self, query: &Query, predicate: &P) -> Vec<Document> {
        let total_docs = self.documents.len();
        // Keyed by id (ascending) rather than by arrival order: this mirrors
        // the original's `std::map<int, double>` accumulator and is what
        // gives the ranker's final tie-break rule a well-defined, thread-
        // count-independent "insertion order" to fall back on.
        let mut scores: BTreeMap<DocumentId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(postings) = self.forward.get(word) else { continue };
            let doc_freq = postings.len();
            if doc_freq == 0 {
                continue;
            }
            let idf = inverse_document_freq(total_docs, doc_freq);
            for (&doc_id, &tf) in postings.iter() {
                let record = &self.documents[&doc_id];
                if predicate(doc_id, record.status, record.rating) {
                    *scores.entry(doc_id).or_insert(0.0) += self.scorer.score_term(tf, idf);
                }
            }
        }

        self.erase_minus_matches(&mut scores, &query.minus_words);
        self.documents_from_scores(scores)
    }

    fn score_parallel<P: DocumentPredicate>(&self, query: &Query, predicate: &P) -> Vec<Document> {
        let total_docs = self.documents.len();
        let accumulator: ConcurrentMap<f64> = ConcurrentMap::new(self.config.shard_count);

        query.plus_words.par_iter().for_each(|word| {
            let Some(postings) = self.forward.get(word) else { return };
            let doc_freq = postings.len();
            if doc_freq == 0 {
                return;
            }
            let idf = inverse_document_freq(total_docs, doc_freq);
            for (&doc_id, &tf) in postings.iter() {
                let record = &self.documents[&doc_id];
                if predicate(doc_id, record.status, record.rating) {
                    *accumulator.access(doc_id) += self.scorer.score_term(tf, idf);
                }
            }
        });

        let mut scores = accumulator.build_ordinary();
        self.erase_minus_matches(&mut scores, &query.minus_words);
        self.documents_from_scores(scores)
    }

    fn erase_minus_matches(&self, scores: &mut BTreeMap<DocumentId, f64>, minus_words: &[Word]) {
        for word in minus_words {
            let Some(postings) = self.forward.get(word) else { continue };
            for &doc_id in postings.keys() {
                scores.remove(&doc_id);
            }
        }
    }

    fn documents_from_scores(&self, scores: BTreeMap<DocumentId, f64>) -> Vec<Document> {
        scores
            .into_iter()
            .map(|(id, relevance)| Document::new(id, relevance, self.documents[&id].rating))
            .collect()
    }
}

fn erase_from_forward(forward: &DashMap<Word, BTreeMap<DocumentId, f64>>, word: &Word, id: DocumentId) {
    let mut now_empty = false;
    if let Some(mut postings) = forward.get_mut(word) {
        postings.remove(&id);
        now_empty = postings.is_empty();
    }
    if now_empty {
        forward.remove(word);
    }
}
