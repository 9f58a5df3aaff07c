//! Answer assembly.
//!
//! [`AnswerGenerator`] is the seam where a real generation backend would
//! plug in. The built-in generators are deliberately simple: one echoes
//! the top-ranked document, the other picks a canned domain answer by
//! keyword checks on the query. Neither touches the scorer or classifier.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::models::ScoredDocument;

/// Answer returned by every built-in generator when nothing was retrieved.
pub const NO_INFORMATION_FOUND: &str =
    "I couldn't find any relevant information to answer your question.";

/// Produces an answer string from a query and its ranked documents.
///
/// # Example
///
/// ```rust
/// use lexrag_core::answer::AnswerGenerator;
/// use lexrag_core::models::ScoredDocument;
/// use lexrag_core::Result;
///
/// struct Echo;
///
/// impl AnswerGenerator for Echo {
///     fn name(&self) -> &str { "echo" }
///
///     fn generate(&self, query: &str, _docs: &[ScoredDocument]) -> Result<String> {
///         Ok(query.to_string())
///     }
/// }
/// ```
pub trait AnswerGenerator: Send + Sync {
    fn name(&self) -> &str;

    fn generate(&self, query: &str, docs: &[ScoredDocument]) -> Result<String>;
}

/// How [`TopDocumentGenerator`] mentions the other retrieved documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingNote {
    /// `(Found N relevant document(s))`, counting all documents.
    FoundCount,
    /// `Additional information from N related document(s).`, counting the rest.
    AdditionalCount,
}

/// Answers with the content of the highest-ranked document.
#[derive(Debug, Clone)]
pub struct TopDocumentGenerator {
    preamble: Option<&'static str>,
    note: TrailingNote,
}

impl TopDocumentGenerator {
    /// `Based on the available information:` followed by the top document.
    pub fn basic() -> Self {
        Self {
            preamble: Some("Based on the available information:"),
            note: TrailingNote::FoundCount,
        }
    }

    /// The top document verbatim, then a note on related documents.
    pub fn compliance() -> Self {
        Self {
            preamble: None,
            note: TrailingNote::AdditionalCount,
        }
    }
}

impl AnswerGenerator for TopDocumentGenerator {
    fn name(&self) -> &str {
        "top-document"
    }

    fn generate(&self, _query: &str, docs: &[ScoredDocument]) -> Result<String> {
        let Some(top) = docs.first() else {
            return Ok(NO_INFORMATION_FOUND.to_string());
        };

        let mut answer = String::new();
        if let Some(preamble) = self.preamble {
            answer.push_str(preamble);
            answer.push_str("\n\n");
        }
        answer.push_str(&top.document.content);
        answer.push_str("\n\n");

        if docs.len() > 1 {
            match self.note {
                TrailingNote::FoundCount => {
                    answer.push_str(&format!("(Found {} relevant document(s))", docs.len()));
                }
                TrailingNote::AdditionalCount => {
                    answer.push_str(&format!(
                        "Additional information from {} related document(s).",
                        docs.len() - 1
                    ));
                }
            }
        }

        Ok(answer)
    }
}

const HR_DATA_COMPLIANCE: &str = "Employee data must comply with GDPR and HIPAA retention rules. \
All personal data must be retained for 7 years with full audit logs enabled. \
Access is restricted to authorized HR personnel only, and mandatory data \
anonymization is required for analytics purposes.";

const HR_BENEFITS: &str = "Employees receive comprehensive benefits including health insurance (80% employer-paid), \
401(k) matching up to 6%, 15-20 vacation days based on tenure, and parental leave \
(12 weeks maternity, 6 weeks paternity). All full-time employees are eligible for \
benefits after 30 days of employment.";

const FINANCE_APPROVAL: &str = "Financial transactions over $50,000 require dual approval from department VP, CFO, and CEO. \
Transactions between $5,000-$50,000 require dual approval from department manager and \
finance manager. All transactions must have supporting documentation and comply with \
SOX 404 requirements.";

const FINANCE_INVESTMENT: &str = "The investment policy focuses on capital preservation and liquidity. Authorized investments \
include U.S. Treasury securities, investment-grade corporate bonds (rated A or higher), \
and money market funds. Prohibited investments include individual equities, derivatives, \
and cryptocurrencies. Maximum single issuer concentration is limited to 5%.";

const PHARMA_SAFETY: &str = "FDA drug safety reporting must comply with 21 CFR Part 312 and 314. Fatal or life-threatening \
unexpected serious adverse events must be reported within 7 days, with follow-up within 8 days. \
Other serious unexpected events require reporting within 15 days. All adverse event data logs \
must be maintained in secure repositories with retention for product lifetime plus 10 years.";

const PHARMA_CLINICAL: &str = "Clinical trials must comply with ICH-GCP guidelines and obtain Institutional Review Board approval. \
Informed consent is mandatory for all participants. Study design requires clear objectives, \
pre-specified statistical analysis plans, and data safety monitoring boards. All data must maintain \
audit trails and comply with 21 CFR Part 11 for electronic records.";

/// Picks a canned domain answer by substring checks on the query.
///
/// Stands in for a generation backend. The domain is decided first (HR,
/// then finance, then pharma); if the matched domain has no answer for
/// the query's topic, a generic summary of the retrieved documents is
/// returned instead of trying the next domain.
#[derive(Debug, Clone, Default)]
pub struct KeywordAnswerGenerator;

impl KeywordAnswerGenerator {
    fn canned(query_lower: &str) -> Option<&'static str> {
        let has = |words: &[&str]| words.iter().any(|w| query_lower.contains(w));

        if has(&["hr", "employee", "data"]) {
            if has(&["compliance", "gdpr", "hipaa"]) {
                Some(HR_DATA_COMPLIANCE)
            } else if has(&["benefits", "leave"]) {
                Some(HR_BENEFITS)
            } else {
                None
            }
        } else if has(&["finance", "audit", "transaction"]) {
            if has(&["approval"]) {
                Some(FINANCE_APPROVAL)
            } else if has(&["investment"]) {
                Some(FINANCE_INVESTMENT)
            } else {
                None
            }
        } else if has(&["pharma", "fda", "drug"]) {
            if has(&["safety", "reporting"]) {
                Some(PHARMA_SAFETY)
            } else if has(&["clinical", "trial"]) {
                Some(PHARMA_CLINICAL)
            } else {
                None
            }
        } else {
            None
        }
    }

    fn summary(docs: &[ScoredDocument]) -> String {
        let categories: BTreeSet<&str> = docs
            .iter()
            .map(|d| d.document.category.as_deref().unwrap_or("uncategorized"))
            .collect();
        format!(
            "Based on the retrieved documents, relevant information was found in \
             {} document(s) across {} categories. \
             For specific details, please refer to the source documents listed below.",
            docs.len(),
            categories.into_iter().collect::<Vec<_>>().join(", ")
        )
    }
}

impl AnswerGenerator for KeywordAnswerGenerator {
    fn name(&self) -> &str {
        "keyword"
    }

    fn generate(&self, query: &str, docs: &[ScoredDocument]) -> Result<String> {
        if docs.is_empty() {
            return Ok(NO_INFORMATION_FOUND.to_string());
        }
        let query_lower = query.to_lowercase();
        Ok(match Self::canned(&query_lower) {
            Some(answer) => answer.to_string(),
            None => Self::summary(docs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;

    fn scored(id: &str, content: &str, score: u64) -> ScoredDocument {
        ScoredDocument {
            document: Document::new(id, id, content),
            score,
        }
    }

    #[test]
    fn test_empty_docs_use_fixed_message() {
        for generator in [
            &TopDocumentGenerator::basic() as &dyn AnswerGenerator,
            &TopDocumentGenerator::compliance(),
            &KeywordAnswerGenerator,
        ] {
            assert_eq!(
                generator.generate("anything", &[]).unwrap(),
                NO_INFORMATION_FOUND
            );
        }
    }

    #[test]
    fn test_basic_single_document() {
        let docs = vec![scored("1", "Body text.", 2)];
        let answer = TopDocumentGenerator::basic().generate("q", &docs).unwrap();
        assert_eq!(answer, "Based on the available information:\n\nBody text.\n\n");
    }

    #[test]
    fn test_basic_found_count() {
        let docs = vec![scored("1", "Top.", 5), scored("2", "Other.", 1)];
        let answer = TopDocumentGenerator::basic().generate("q", &docs).unwrap();
        assert!(answer.starts_with("Based on the available information:\n\nTop."));
        assert!(answer.ends_with("(Found 2 relevant document(s))"));
    }

    #[test]
    fn test_compliance_additional_count() {
        let docs = vec![
            scored("1", "Top.", 5),
            scored("2", "B.", 3),
            scored("3", "C.", 1),
        ];
        let answer = TopDocumentGenerator::compliance()
            .generate("q", &docs)
            .unwrap();
        assert_eq!(
            answer,
            "Top.\n\nAdditional information from 2 related document(s)."
        );
    }

    #[test]
    fn test_keyword_branches() {
        let docs = vec![scored("1", "x", 1)];
        let g = KeywordAnswerGenerator;
        assert_eq!(
            g.generate("Summarize key HR data compliance requirements.", &docs)
                .unwrap(),
            HR_DATA_COMPLIANCE
        );
        assert_eq!(
            g.generate("Which transaction approval levels apply?", &docs)
                .unwrap(),
            FINANCE_APPROVAL
        );
        assert_eq!(
            g.generate("Explain FDA safety reporting requirements for adverse events.", &docs)
                .unwrap(),
            PHARMA_SAFETY
        );
        assert_eq!(
            g.generate("Tell me about the clinical trial design for this drug", &docs)
                .unwrap(),
            PHARMA_CLINICAL
        );
    }

    #[test]
    fn test_keyword_checks_are_substrings() {
        // "thresholds" contains "hr", so this lands in the HR domain.
        let mut doc = scored("1", "x", 1);
        doc.document.category = Some("finance_reports".to_string());
        let answer = KeywordAnswerGenerator
            .generate("What are the financial approval thresholds?", &[doc])
            .unwrap();
        assert_ne!(answer, FINANCE_APPROVAL);
        assert!(answer.starts_with("Based on the retrieved documents"));
    }

    #[test]
    fn test_keyword_domain_without_topic_falls_back_to_summary() {
        let mut a = scored("a", "x", 2);
        a.document.category = Some("pharma_regulations".to_string());
        let mut b = scored("b", "y", 1);
        b.document.category = Some("finance_reports".to_string());
        let answer = KeywordAnswerGenerator
            .generate("employee parking", &[a, b])
            .unwrap();
        assert!(answer.contains("found in 2 document(s)"));
        assert!(answer.contains("across finance_reports, pharma_regulations categories"));
    }
}
