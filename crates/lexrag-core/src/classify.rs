//! Keyword-based sensitivity classification.

use crate::models::Classification;

/// Any of these (as substrings) makes content CONFIDENTIAL.
pub const CONFIDENTIAL_KEYWORDS: [&str; 5] = ["confidential", "restricted", "secret", "patient", "ssn"];

/// Any of these makes content INTERNAL, unless a confidential keyword matched.
pub const INTERNAL_KEYWORDS: [&str; 2] = ["internal", "proprietary"];

/// Classify content by keyword presence.
///
/// Confidential keywords are checked first and short-circuit, so content
/// mentioning "confidential" is CONFIDENTIAL whatever else it contains.
/// Keyword classification never yields RESTRICTED; that level is only
/// assigned explicitly.
pub fn classify(content: &str) -> Classification {
    let lower = content.to_lowercase();

    if CONFIDENTIAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Classification::Confidential
    } else if INTERNAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Classification::Internal
    } else {
        Classification::Public
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_by_default() {
        assert_eq!(classify("Office hours are 9 to 5."), Classification::Public);
        assert_eq!(classify(""), Classification::Public);
    }

    #[test]
    fn test_internal_keywords() {
        assert_eq!(classify("For INTERNAL use"), Classification::Internal);
        assert_eq!(classify("proprietary formula"), Classification::Internal);
    }

    #[test]
    fn test_confidential_wins_over_internal() {
        assert_eq!(
            classify("Internal and proprietary, but Confidential"),
            Classification::Confidential
        );
    }

    #[test]
    fn test_substring_matching() {
        // "patient" inside "outpatients", "ssn" inside "classname"
        assert_eq!(classify("outpatients"), Classification::Confidential);
        assert_eq!(classify("classname"), Classification::Confidential);
    }
}
