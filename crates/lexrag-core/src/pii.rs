//! PII detection and redaction.
//!
//! A fixed table of four patterns is applied in order: email, ssn, phone,
//! credit_card. The order is authoritative when a digit run could match
//! more than one pattern: [`PiiDetector::redact`] rewrites the text one
//! pattern at a time, and [`PiiDetector::detect`] drops any match that
//! overlaps a span already claimed by an earlier pattern, so both report
//! the same spans.
//!
//! Placeholders (`[REDACTED-EMAIL]`, ...) never match any pattern, which
//! makes redaction idempotent.

use std::ops::Range;
use std::sync::Arc;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;

/// Kind of personally identifiable information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    Email,
    Ssn,
    Phone,
    CreditCard,
}

impl PiiKind {
    /// Pattern table order.
    pub const ALL: [PiiKind; 4] = [
        PiiKind::Email,
        PiiKind::Ssn,
        PiiKind::Phone,
        PiiKind::CreditCard,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            PiiKind::Email => "email",
            PiiKind::Ssn => "ssn",
            PiiKind::Phone => "phone",
            PiiKind::CreditCard => "credit_card",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PiiKind::Email => "[REDACTED-EMAIL]",
            PiiKind::Ssn => "[REDACTED-SSN]",
            PiiKind::Phone => "[REDACTED-PHONE]",
            PiiKind::CreditCard => "[REDACTED-CREDIT_CARD]",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            PiiKind::Email => r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
            PiiKind::Ssn => r"\b\d{3}-\d{2}-\d{4}\b",
            PiiKind::Phone => r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
            PiiKind::CreditCard => r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
        }
    }
}

/// One detected PII occurrence. `span` is a byte range into the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiiMatch {
    #[serde(rename = "type")]
    pub kind: PiiKind,
    pub value: String,
    pub span: Range<usize>,
}

/// Detector holding the compiled pattern table.
///
/// Cloning is cheap; the compiled table is shared.
#[derive(Debug, Clone)]
pub struct PiiDetector {
    patterns: Arc<Vec<(PiiKind, Regex)>>,
}

impl PiiDetector {
    pub fn new() -> Result<Self> {
        let patterns = PiiKind::ALL
            .iter()
            .map(|kind| Ok((*kind, Regex::new(kind.pattern())?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            patterns: Arc::new(patterns),
        })
    }

    /// All matches, in pattern-table order then left to right.
    pub fn detect(&self, text: &str) -> Vec<PiiMatch> {
        let mut claimed: Vec<Range<usize>> = Vec::new();
        let mut matches = Vec::new();

        for (kind, regex) in self.patterns.iter() {
            for m in regex.find_iter(text) {
                let span = m.range();
                if claimed
                    .iter()
                    .any(|c| c.start < span.end && span.start < c.end)
                {
                    continue;
                }
                claimed.push(span.clone());
                matches.push(PiiMatch {
                    kind: *kind,
                    value: m.as_str().to_string(),
                    span,
                });
            }
        }

        matches
    }

    pub fn contains_pii(&self, text: &str) -> bool {
        self.patterns.iter().any(|(_, regex)| regex.is_match(text))
    }

    /// Replace every match with its placeholder, one pattern at a time.
    pub fn redact(&self, text: &str) -> String {
        let mut redacted = text.to_string();
        for (kind, regex) in self.patterns.iter() {
            redacted = regex
                .replace_all(&redacted, kind.placeholder())
                .into_owned();
        }
        redacted
    }
}
