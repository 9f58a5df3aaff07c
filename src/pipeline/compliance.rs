//! Compliance pipeline: PII redaction, classification, and an audit trail.
//!
//! Every query is recorded in the pipeline's own [`AuditLog`]:
//!
//! 1. `PII_DETECTED_IN_QUERY` when the query contains PII (the query is
//!    redacted before it is scored).
//! 2. `SEARCH` with the (possibly redacted) query.
//! 3. `AUTHORIZATION_CHECK` for every CONFIDENTIAL or RESTRICTED document.
//! 4. `RETRIEVAL` with the ids of the returned documents.
//! 5. `ANSWER_GENERATED` with the overall classification, unless nothing
//!    was retrieved.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

use lexrag_core::answer::{AnswerGenerator, TopDocumentGenerator, NO_INFORMATION_FOUND};
use lexrag_core::audit::{AuditAction, AuditLog};
use lexrag_core::models::{Citation, Classification, Document, ScoredDocument};
use lexrag_core::pii::PiiDetector;
use lexrag_core::samples::BuiltinCorpus;
use lexrag_core::search::retrieve;
use lexrag_core::store::{DocumentSource, DocumentStore};

use super::{open_store, question_or_default, rule};
use crate::config::Config;
use crate::connector_fs::{IdStyle, TextDirectorySource};
use crate::export::export_audit_log;

pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "What are HIPAA data retention requirements?",
    "Explain GDPR data subject rights",
    "What are SOX financial control requirements?",
    "How should adverse events be reported to the FDA?",
];

/// Answer plus compliance metadata, before the question is attached.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceAnswer {
    pub answer: String,
    pub redacted_answer: String,
    pub sources: Vec<Citation>,
    pub classification: Classification,
    pub pii_detected: bool,
}

/// Result record of [`ComplianceRagPipeline::query`].
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceResult {
    pub question: String,
    pub answer: String,
    pub redacted_answer: String,
    pub sources: Vec<Citation>,
    pub classification: Classification,
    pub pii_detected: bool,
    pub pii_in_question: bool,
}

pub struct ComplianceRagPipeline {
    store: Arc<DocumentStore>,
    detector: PiiDetector,
    generator: Box<dyn AnswerGenerator>,
    audit: AuditLog,
}

impl ComplianceRagPipeline {
    pub fn new(store: Arc<DocumentStore>, user_id: &str) -> Result<Self> {
        Self::with_generator(store, user_id, Box::new(TopDocumentGenerator::compliance()))
    }

    pub fn with_generator(
        store: Arc<DocumentStore>,
        user_id: &str,
        generator: Box<dyn AnswerGenerator>,
    ) -> Result<Self> {
        let mut audit = AuditLog::new(user_id);
        audit.record(
            AuditAction::SystemInit,
            format!("Loaded {} documents", store.len()),
            json!({}),
        );
        Ok(Self {
            store,
            detector: PiiDetector::new()?,
            generator,
            audit,
        })
    }

    /// Load from `docs_dir` (falling back to the regulatory samples).
    /// Files are numbered `DOC-001`, ... and classified by keyword.
    pub fn open(docs_dir: Option<&Path>, include_globs: &[String], user_id: &str) -> Result<Self> {
        let source = docs_dir.map(|dir| {
            TextDirectorySource::new(dir, include_globs.to_vec())
                .with_id_style(IdStyle::Prefixed("DOC".to_string()))
                .with_auto_classify()
        });
        let store = open_store(
            source.as_ref().map(|s| s as &dyn DocumentSource),
            BuiltinCorpus::Compliance,
        )?;
        Self::new(store, user_id)
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn detector(&self) -> &PiiDetector {
        &self.detector
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    /// Always grants access; records a check for documents that require one.
    pub fn check_authorization(&mut self, document: &Document) -> bool {
        if let Some(level) = document.classification.filter(|c| c.requires_authorization()) {
            self.audit.record(
                AuditAction::AuthorizationCheck,
                format!("Access to {} document {}", level, document.id),
                json!({ "document_id": document.id, "classification": level }),
            );
        }
        true
    }

    pub fn search(&mut self, query: &str, top_k: i64) -> Vec<ScoredDocument> {
        let pii = self.detector.detect(query);
        let query = if pii.is_empty() {
            query.to_string()
        } else {
            let types: Vec<&str> = pii.iter().map(|m| m.kind.tag()).collect();
            self.audit.record(
                AuditAction::PiiDetectedInQuery,
                format!("Query contains {} PII instances", pii.len()),
                json!({ "pii_types": types }),
            );
            self.detector.redact(query)
        };

        self.audit.record(
            AuditAction::Search,
            format!("Query: {}", query),
            json!({ "top_k": top_k }),
        );

        let store = Arc::clone(&self.store);
        let authorized: Vec<&Document> = store
            .iter()
            .filter(|doc| self.check_authorization(doc))
            .collect();
        let retrieved = retrieve(&query, authorized, top_k);

        let ids: Vec<&str> = retrieved.iter().map(|d| d.document.id.as_str()).collect();
        self.audit.record(
            AuditAction::Retrieval,
            format!("Retrieved {} documents", retrieved.len()),
            json!({ "document_ids": ids }),
        );

        retrieved
    }

    pub fn generate_answer(&mut self, query: &str, docs: &[ScoredDocument]) -> Result<ComplianceAnswer> {
        if docs.is_empty() {
            return Ok(ComplianceAnswer {
                answer: NO_INFORMATION_FOUND.to_string(),
                redacted_answer: NO_INFORMATION_FOUND.to_string(),
                sources: Vec::new(),
                classification: Classification::Public,
                pii_detected: false,
            });
        }

        let classification =
            Classification::most_restrictive(docs.iter().map(|d| d.document.effective_classification()));
        let answer = self.generator.generate(query, docs)?;
        let sources: Vec<Citation> = docs.iter().map(Citation::from).collect();
        let pii_detected = self.detector.contains_pii(&answer);

        self.audit.record(
            AuditAction::AnswerGenerated,
            format!("Generated answer with classification: {}", classification),
            json!({
                "classification": classification,
                "citations": sources.len(),
                "pii_detected": pii_detected,
            }),
        );

        let redacted_answer = if pii_detected {
            self.detector.redact(&answer)
        } else {
            answer.clone()
        };

        Ok(ComplianceAnswer {
            answer,
            redacted_answer,
            sources,
            classification,
            pii_detected,
        })
    }

    pub fn query(&mut self, question: &str, top_k: i64) -> Result<ComplianceResult> {
        let pii_in_question = self.detector.contains_pii(question);
        let docs = self.search(question, top_k);
        let generated = self.generate_answer(question, &docs)?;

        Ok(ComplianceResult {
            question: question.to_string(),
            answer: generated.answer,
            redacted_answer: generated.redacted_answer,
            sources: generated.sources,
            classification: generated.classification,
            pii_detected: generated.pii_detected,
            pii_in_question,
        })
    }

    /// Write the full audit log as a JSON array, replacing `path`.
    pub fn export_audit_log(&self, path: &Path) -> Result<usize> {
        export_audit_log(&self.audit, path)
    }
}

/// `lexrag compliance` entry point.
pub fn run_compliance(
    config: &Config,
    user: Option<&str>,
    docs: Option<&Path>,
    top_k: Option<i64>,
    audit_out: Option<&Path>,
    words: &[String],
    json: bool,
) -> Result<()> {
    let user_id = user.unwrap_or(&config.compliance.user_id);
    let docs_dir = docs.or(config.corpus.path.as_deref());
    let mut pipeline = ComplianceRagPipeline::open(docs_dir, &config.corpus.include_globs, user_id)?;

    let question = question_or_default(words, &EXAMPLE_QUESTIONS);
    let result = pipeline.query(&question, top_k.unwrap_or(config.retrieval.top_k))?;

    let audit_path = audit_out.or(config.compliance.audit_export.as_deref());
    let exported = match audit_path {
        Some(path) => Some((path, pipeline.export_audit_log(path)?)),
        None => None,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let flag = |b: bool| if b { "Yes" } else { "No" };

    println!("Loaded {} classified documents for user {}", pipeline.store().len(), user_id);
    println!();
    println!("Question: {}", pipeline.detector().redact(&result.question));
    println!();
    println!("Compliance Analysis:");
    println!("{}", rule());
    println!("Classification: {}", result.classification);
    println!("PII Detected in Question: {}", flag(result.pii_in_question));
    println!("PII Detected in Answer: {}", flag(result.pii_detected));
    println!("{}", rule());
    println!();
    println!("Answer:");
    println!("{}", rule());
    println!("{}", result.redacted_answer);
    println!("{}", rule());
    println!();
    println!("Citations:");
    if result.sources.is_empty() {
        println!("  (none)");
    }
    for c in &result.sources {
        let level = c.classification.unwrap_or_default();
        println!("  - [{}] {} (ID: {})", level, c.title, c.document_id);
    }
    println!();

    let log = pipeline.audit_log();
    println!("Audit Trail:");
    println!("{}", rule());
    println!("Total logged actions: {}", log.len());
    println!("Recent actions:");
    for entry in log.recent(5) {
        println!(
            "  [{}] {}: {}",
            entry.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            entry.action.as_str(),
            entry.details
        );
    }
    println!("{}", rule());

    if let Some((path, count)) = exported {
        println!();
        println!("Audit log exported to {} ({} entries)", path.display(), count);
    }

    Ok(())
}
