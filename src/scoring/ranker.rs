use crate::core::types::Document;

/// Orders scored candidates by the spec's precedence — higher relevance
/// wins outright past `epsilon`, ties go to the higher rating, and any
/// remaining tie keeps the candidates' original (insertion) order — then
/// truncates to `max_k`.
///
/// `candidates` is consumed in its incoming order, which callers must
/// already have made deterministic (e.g. ascending document id), since a
/// stable sort only preserves relative order among entries that compare
/// equal under the first two rules.
pub fn top_k(mut candidates: Vec<Document>, max_k: usize, epsilon: f64) -> Vec<Document> {
    candidates.sort_by(|a, b| {
        if (a.relevance - b.relevance).abs() >= epsilon {
            b.relevance.partial_cmp(&a.relevance).expect("relevance is never NaN")
        } else {
            b.rating.cmp(&a.rating)
        }
    });
    candidates.truncate(max_k);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: i64, relevance: f64, rating: i32) -> Document {
        Document::new(id, relevance, rating)
    }

    #[test]
    fn orders_by_relevance_first() {
        let ranked = top_k(vec![doc(1, 0.1, 5), doc(2, 0.9, 1)], 5, 1e-6);
        assert_eq!(ranked[0].id, 2);
        assert_eq!(ranked[1].id, 1);
    }

    #[test]
    fn breaks_near_ties_by_rating() {
        let ranked = top_k(vec![doc(1, 0.5, 1), doc(2, 0.5 + 1e-9, 2)], 5, 1e-6);
        assert_eq!(ranked[0].id, 2);
        assert_eq!(ranked[1].id, 1);
    }

    #[test]
    fn keeps_insertion_order_on_full_tie() {
        let ranked = top_k(vec![doc(1, 0.5, 3), doc(2, 0.5, 3)], 5, 1e-6);
        assert_eq!(ranked[0].id, 1);
        assert_eq!(ranked[1].id, 2);
    }

    #[test]
    fn truncates_to_max_k() {
        let docs: Vec<Document> = (0..10).map(|i| doc(i, i as f64, 0)).collect();
        let ranked = top_k(docs, 5, 1e-6);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].id, 9);
    }
}
