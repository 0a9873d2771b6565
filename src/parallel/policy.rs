use crate::core::search_server::{DocumentPredicate, SearchServer};
use crate::core::types::Document;
use crate::core::error::Result;

/// Runtime choice between the sequential and parallel scoring algorithms
/// (spec.md §9, "Execution-policy overloads"). `SearchServer` exposes both
/// as separate entry points (`find_top_documents` / `find_top_documents_parallel`,
/// `remove_document` / `remove_document_parallel`); `ExecutionPolicy` lets a
/// caller pick one at runtime instead of committing to a call site, the way
/// the teacher's `ParallelIndexer` picks its worker count once and is then
/// reused across call sites rather than forking into two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    Sequential,
    #[default]
    Parallel,
}

/// `find_top_documents` under a runtime-selected policy. Both branches share
/// the same ranking and truncation rules (§4.F); only the scoring phase
/// differs between them.
pub fn find_top_documents<P>(
    server: &SearchServer,
    raw_query: &str,
    policy: ExecutionPolicy,
    predicate: P,
) -> Result<Vec<Document>>
where
    P: DocumentPredicate,
{
    match policy {
        ExecutionPolicy::Sequential => server.find_top_documents(raw_query, predicate),
        ExecutionPolicy::Parallel => server.find_top_documents_parallel(raw_query, predicate),
    }
}

/// `remove_document` under a runtime-selected policy.
pub fn remove_document(server: &mut SearchServer, policy: ExecutionPolicy, id: crate::core::types::DocumentId) {
    match policy {
        ExecutionPolicy::Sequential => server.remove_document(id),
        ExecutionPolicy::Parallel => server.remove_document_parallel(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentStatus;

    #[test]
    fn both_policies_agree_on_top_k() {
        let mut server = SearchServer::new::<_, &str>([]).unwrap();
        for id in 0..5i64 {
            server.add_document(id, "cat dog bird", DocumentStatus::Actual, &[id as i32]).unwrap();
        }
        let seq = find_top_documents(&server, "cat", ExecutionPolicy::Sequential, |_, s, _| s == DocumentStatus::Actual).unwrap();
        let par = find_top_documents(&server, "cat", ExecutionPolicy::Parallel, |_, s, _| s == DocumentStatus::Actual).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn default_policy_is_parallel() {
        assert_eq!(ExecutionPolicy::default(), ExecutionPolicy::Parallel);
    }
}
