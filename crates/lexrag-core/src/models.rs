//! Core data models used throughout lexrag.
//!
//! These types represent the documents, ranked results, and citations that
//! flow through the retrieval and answer pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sensitivity level: `Public < Internal < Confidential < Restricted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    #[default]
    Public,
    Internal,
    Confidential,
    Restricted,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Public => "PUBLIC",
            Classification::Internal => "INTERNAL",
            Classification::Confidential => "CONFIDENTIAL",
            Classification::Restricted => "RESTRICTED",
        }
    }

    /// Whether reading a document at this level goes through an
    /// authorization check.
    pub fn requires_authorization(&self) -> bool {
        matches!(
            self,
            Classification::Confidential | Classification::Restricted
        )
    }

    /// Most restrictive level among `levels`; `Public` when empty.
    pub fn most_restrictive<I>(levels: I) -> Classification
    where
        I: IntoIterator<Item = Classification>,
    {
        levels.into_iter().max().unwrap_or_default()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document held by the [`DocumentStore`](crate::store::DocumentStore).
///
/// `id` is assigned once at load time and `content` never changes after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            classification: None,
            category: None,
        }
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True iff the document is CONFIDENTIAL or RESTRICTED.
    pub fn requires_authorization(&self) -> bool {
        self.classification
            .map(|c| c.requires_authorization())
            .unwrap_or(false)
    }

    /// Classification used for aggregation; unclassified counts as `Public`.
    pub fn effective_classification(&self) -> Classification {
        self.classification.unwrap_or_default()
    }
}

/// Human-readable title from a file stem: underscores become spaces and
/// each run of letters starts upper-case with the rest lower-cased
/// (`"fda_reporting_requirements"` → `"Fda Reporting Requirements"`).
pub fn title_from_stem(stem: &str) -> String {
    let mut title = String::with_capacity(stem.len());
    let mut prev_alpha = false;
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            title.push(c);
            prev_alpha = false;
        }
    }
    title
}

/// A document paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub document: Document,
    pub score: u64,
}

/// Cited source attached to a pipeline result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Citation {
    pub document_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    pub score: u64,
}

impl From<&ScoredDocument> for Citation {
    fn from(scored: &ScoredDocument) -> Self {
        Citation {
            document_id: scored.document.id.clone(),
            title: scored.document.title.clone(),
            category: scored.document.category.clone(),
            classification: scored.document.classification,
            score: scored.score,
        }
    }
}

/// Result record of the basic and enterprise pipelines.
#[derive(Debug, Clone, Serialize)]
pub struct RagResult {
    pub question: String,
    pub answer: String,
    pub sources: Vec<Citation>,
}
