use crate::core::search_server::SearchServer;
use crate::core::types::{DocumentId, Word};
use std::collections::BTreeSet;

/// Scans every live document, treats each document's set of words (ignoring
/// frequency and order) as its identity, and removes every document whose
/// word-set duplicates one already seen at a lower id. Favors the earliest
/// id as the canonical copy (spec.md §4.H).
///
/// Returns the ids removed, in ascending order — the same order the caller
/// should report them in (spec.md §6: one `"Found duplicate document id
/// <id>"` line per removal, in ascending order).
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocumentId> {
    let mut seen: std::collections::HashSet<BTreeSet<Word>> = std::collections::HashSet::new();
    let mut duplicates = Vec::new();

    for id in server.document_ids().collect::<Vec<_>>() {
        let word_set: BTreeSet<Word> = server.get_word_frequencies(id).into_keys().collect();
        if !seen.insert(word_set) {
            duplicates.push(id);
        }
    }

    for &id in &duplicates {
        server.remove_document(id);
    }
    duplicates
}

/// `remove_duplicates`, additionally printing the line spec.md §6 requires
/// for every removed id — the library-side half of the out-of-core example
/// driver's duplicate-removal output contract.
pub fn remove_duplicates_reporting(server: &mut SearchServer) -> Vec<DocumentId> {
    let duplicates = remove_duplicates(server);
    for &id in &duplicates {
        println!("Found duplicate document id {id}");
    }
    duplicates
}
