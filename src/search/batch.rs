use crate::core::error::Result;
use crate::core::search_server::SearchServer;
use crate::core::types::Document;
use rayon::prelude::*;

/// Runs every query against `server` in parallel, one `find_top_documents`
/// call per query, preserving input order in the output (spec.md §4.I).
///
/// Assumes `server` is not mutated while this runs — the shared-resource
/// policy (spec.md §5) leaves enforcing that to the caller, exactly as it
/// leaves enforcing "no reader overlaps a writer" to the caller for any
/// single `find_top_documents` call.
///
/// On the first query that fails to parse, propagates that error rather
/// than isolating it into an empty per-query result; this is the
/// implementer's documented choice spec.md §7 leaves open.
pub fn process_queries(server: &SearchServer, queries: &[String]) -> Result<Vec<Vec<Document>>> {
    queries.par_iter().map(|query| server.find_top_documents_actual(query)).collect()
}

/// `process_queries`, flattened into the concatenation of all per-query
/// result vectors, in query order.
pub fn process_queries_joined(server: &SearchServer, queries: &[String]) -> Result<Vec<Document>> {
    Ok(process_queries(server, queries)?.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentStatus;

    fn server() -> SearchServer {
        let mut server = SearchServer::new::<_, &str>([]).unwrap();
        server.add_document(1, "cat dog", DocumentStatus::Actual, &[3]).unwrap();
        server.add_document(2, "dog bird", DocumentStatus::Actual, &[1]).unwrap();
        server.add_document(3, "bird fish", DocumentStatus::Actual, &[2]).unwrap();
        server
    }

    #[test]
    fn process_queries_preserves_input_order() {
        let server = server();
        let queries = vec!["cat".to_string(), "bird".to_string(), "fish".to_string()];
        let results = process_queries(&server, &queries).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(results[2].iter().map(|d| d.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn process_queries_joined_concatenates_in_query_order() {
        let server = server();
        let queries = vec!["cat".to_string(), "fish".to_string()];
        let joined = process_queries_joined(&server, &queries).unwrap();
        assert_eq!(joined.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn process_queries_propagates_the_first_parse_error() {
        let server = server();
        let queries = vec!["cat".to_string(), "--bad".to_string()];
        assert!(process_queries(&server, &queries).is_err());
    }

    #[test]
    fn empty_query_list_yields_empty_output() {
        let server = server();
        assert!(process_queries(&server, &[]).unwrap().is_empty());
        assert!(process_queries_joined(&server, &[]).unwrap().is_empty());
    }
}
