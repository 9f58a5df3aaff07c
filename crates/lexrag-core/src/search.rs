//! Lexical scorer: ranks documents by raw term-occurrence counts.
//!
//! # Scoring
//!
//! 1. Lower-case the query and the document content.
//! 2. Split the query on whitespace and drop terms of 3 characters or fewer.
//! 3. For each remaining term, add the number of non-overlapping substring
//!    occurrences of the term in the content. Matching is not
//!    word-boundary aware: `"cat"` matches inside `"category"`.
//!
//! # Retrieval
//!
//! Every document is scored, zero scores are discarded, the rest are
//! sorted by descending score with a stable sort (equal scores keep store
//! order), and the first `top_k` are returned.

use crate::models::{Document, ScoredDocument};

/// Default number of documents returned by [`retrieve`].
pub const DEFAULT_TOP_K: i64 = 3;

/// Query terms shorter than or equal to this many characters are ignored.
pub const MIN_TERM_CHARS: usize = 3;

/// Terms of `query` that participate in scoring, lower-cased.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Score a single document against `query`. Zero means no match.
pub fn score(query: &str, document: &Document) -> u64 {
    score_terms(&query_terms(query), &document.content)
}

fn score_terms(terms: &[String], content: &str) -> u64 {
    if terms.is_empty() {
        return 0;
    }
    let content_lower = content.to_lowercase();
    terms
        .iter()
        .map(|t| content_lower.matches(t.as_str()).count() as u64)
        .sum()
}

/// Rank `documents` against `query` and return at most `top_k` matches.
///
/// `top_k <= 0` yields an empty result.
pub fn retrieve<'a, I>(query: &str, documents: I, top_k: i64) -> Vec<ScoredDocument>
where
    I: IntoIterator<Item = &'a Document>,
{
    if top_k <= 0 {
        return Vec::new();
    }

    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredDocument> = documents
        .into_iter()
        .filter_map(|doc| {
            let s = score_terms(&terms, &doc.content);
            (s > 0).then(|| ScoredDocument {
                document: doc.clone(),
                score: s,
            })
        })
        .collect();

    // `sort_by` is stable, which keeps store order for ties.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_k as usize);
    scored
}

/// Text preview of at most `max_chars` characters, with `...` appended
/// when the content was cut.
pub fn snippet(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}
