use crate::analysis::interner::WordInterner;
use crate::analysis::tokenizer::split_into_words;
use crate::core::error::{Error, ErrorKind, Result};
use crate::query::ast::{Query, QueryWord};
use std::collections::HashSet;

/// Rejects any token containing a byte in `[0x00, 0x20)` — the same control-byte
/// check used to validate document tokens and stop-words.
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < 0x20)
}

fn parse_query_word(token: &str) -> Result<QueryWord> {
    let mut body = token;
    let mut is_minus = false;
    if let Some(rest) = token.strip_prefix('-') {
        is_minus = true;
        body = rest;
    }
    if body.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidQuery,
            format!("query token {token:?} is empty after stripping '-'"),
        ));
    }
    if body.starts_with('-') {
        return Err(Error::new(
            ErrorKind::InvalidQuery,
            format!("query token {token:?} has a double '-' prefix"),
        ));
    }
    if !is_valid_word(body) {
        return Err(Error::new(
            ErrorKind::InvalidQuery,
            format!("query token {token:?} contains a control byte"),
        ));
    }
    Ok(QueryWord {
        word: body.into(),
        is_minus,
    })
}

/// Parses a raw query string into a `Query`, discarding stop-words and
/// de-duplicating both sequences by sorting-then-unique-ing the interned
/// handles. One parse serves both the sequential and the parallel paths:
/// a sorted, duplicate-free sequence is equally valid as a set for
/// sequential scoring and as a stable work list for parallel iteration.
pub fn parse_query(raw_query: &str, stop_words: &HashSet<Box<str>>, interner: &WordInterner) -> Result<Query> {
    if !is_valid_word(raw_query) {
        return Err(Error::new(ErrorKind::InvalidQuery, "query contains a control byte"));
    }

    let mut plus_words = Vec::new();
    let mut minus_words = Vec::new();

    for token in split_into_words(raw_query) {
        let query_word = parse_query_word(token)?;
        if stop_words.contains(&*query_word.word) {
            continue;
        }
        let word = interner.intern(&query_word.word);
        if query_word.is_minus {
            minus_words.push(word);
        } else {
            plus_words.push(word);
        }
    }

    dedup_sorted(&mut plus_words);
    dedup_sorted(&mut minus_words);

    Ok(Query { plus_words, minus_words })
}

fn dedup_sorted(words: &mut Vec<crate::core::types::Word>) {
    words.sort_unstable();
    words.dedup();
}
