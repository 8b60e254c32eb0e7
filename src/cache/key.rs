//! Cache Key Composition
//!
//! Deterministic cache keys scoping each metric value to its metric
//! parameters, owner, and document, plus the owner-level aggregate key.

use crate::models::Metric;

/// Key for one metric parameterization of one owner's document.
pub fn metric_key(metric: &Metric, owner_id: &str, document_id: &str) -> String {
    format!("{}:{}:{}", metric.key_segment(), owner_id, document_id)
}

/// Owner-scoped aggregate ("report") key, invalidated whenever the
/// owner's document set changes.
pub fn report_key(owner_id: &str) -> String {
    format!("report:{}", owner_id)
}

/// Every per-document key a mutation must invalidate: all metric
/// parameterizations for the given document.
pub fn document_keys(owner_id: &str, document_id: &str) -> Vec<String> {
    Metric::all_variants()
        .iter()
        .map(|metric| metric_key(metric, owner_id, document_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_metric_key_is_deterministic() {
        let a = metric_key(&Metric::WordCount, "user1", "doc1");
        let b = metric_key(&Metric::WordCount, "user1", "doc1");
        assert_eq!(a, b);
        assert_eq!(a, "words:user1:doc1");
    }

    #[test]
    fn test_parameter_variants_get_distinct_keys() {
        let with_ws = metric_key(
            &Metric::CharacterCount {
                include_whitespace: true,
            },
            "user1",
            "doc1",
        );
        let without_ws = metric_key(
            &Metric::CharacterCount {
                include_whitespace: false,
            },
            "user1",
            "doc1",
        );
        assert_ne!(with_ws, without_ws);
    }

    #[test]
    fn test_document_keys_covers_every_variant() {
        let keys = document_keys("user1", "doc1");
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(keys.len(), 7);
        assert_eq!(unique.len(), 7);
    }

    #[test]
    fn test_report_key_is_owner_scoped() {
        assert_eq!(report_key("user1"), "report:user1");
        assert_ne!(report_key("user1"), report_key("user2"));
    }

    #[test]
    fn test_keys_differ_across_documents_and_owners() {
        let base = metric_key(&Metric::SentenceCount, "user1", "doc1");
        assert_ne!(base, metric_key(&Metric::SentenceCount, "user1", "doc2"));
        assert_ne!(base, metric_key(&Metric::SentenceCount, "user2", "doc1"));
    }
}
