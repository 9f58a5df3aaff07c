//! The three demonstration pipelines.
//!
//! | Pipeline | Corpus fallback | Answer strategy | Extras |
//! |----------|-----------------|-----------------|--------|
//! | [`basic`] | HR handbook | top document | none |
//! | [`compliance`] | regulatory policies | top document | PII redaction, classification, audit log |
//! | [`enterprise`] | synthetic finance/HR/pharma | canned domain answers | categorized corpus |
//!
//! All three rank documents with [`lexrag_core::search::retrieve`] and hand
//! the ranked list to an [`AnswerGenerator`](lexrag_core::answer::AnswerGenerator).
//! Stores are shared through `Arc`, so several pipelines can read the same
//! snapshot.

pub mod basic;
pub mod compliance;
pub mod enterprise;

use anyhow::Result;
use std::sync::Arc;

use lexrag_core::samples::BuiltinCorpus;
use lexrag_core::store::{DocumentSource, DocumentStore};

pub use basic::BasicRagPipeline;
pub use compliance::{ComplianceRagPipeline, ComplianceResult};
pub use enterprise::EnterpriseRagPipeline;

/// Load a store from `primary`, falling back to a built-in corpus.
pub fn open_store(
    primary: Option<&dyn DocumentSource>,
    fallback: BuiltinCorpus,
) -> Result<Arc<DocumentStore>> {
    Ok(Arc::new(DocumentStore::load(primary, &fallback)?))
}

/// Pick the question from CLI words, or the first built-in example.
pub fn question_or_default(words: &[String], examples: &[&str]) -> String {
    let joined = words.join(" ");
    if joined.trim().is_empty() {
        examples.first().map(|s| s.to_string()).unwrap_or_default()
    } else {
        joined
    }
}

pub(crate) fn rule() -> String {
    "-".repeat(80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_or_default() {
        let examples = ["first example", "second"];
        assert_eq!(question_or_default(&[], &examples), "first example");
        let words = vec!["how".to_string(), "many".to_string()];
        assert_eq!(question_or_default(&words, &examples), "how many");
    }

    #[test]
    fn test_open_store_without_primary() {
        let store = open_store(None, BuiltinCorpus::Hr).unwrap();
        assert_eq!(store.len(), 5);
    }
}
