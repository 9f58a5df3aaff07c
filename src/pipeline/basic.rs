//! Basic pipeline: retrieve, then answer with the top document.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use lexrag_core::answer::{AnswerGenerator, TopDocumentGenerator};
use lexrag_core::models::{Citation, RagResult, ScoredDocument};
use lexrag_core::samples::BuiltinCorpus;
use lexrag_core::search::retrieve;
use lexrag_core::store::{DocumentSource, DocumentStore};

use super::{open_store, question_or_default, rule};
use crate::config::Config;
use crate::connector_fs::TextDirectorySource;

pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "How many vacation days do I get?",
    "Can I work from home?",
    "What health benefits are available?",
    "How much is the professional development budget?",
];

pub struct BasicRagPipeline {
    store: Arc<DocumentStore>,
    generator: Box<dyn AnswerGenerator>,
}

impl BasicRagPipeline {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self::with_generator(store, Box::new(TopDocumentGenerator::basic()))
    }

    pub fn with_generator(store: Arc<DocumentStore>, generator: Box<dyn AnswerGenerator>) -> Self {
        Self { store, generator }
    }

    /// Load from `docs_dir` (falling back to the HR samples).
    pub fn open(docs_dir: Option<&Path>, include_globs: &[String]) -> Result<Self> {
        let source = docs_dir.map(|dir| TextDirectorySource::new(dir, include_globs.to_vec()));
        let store = open_store(
            source.as_ref().map(|s| s as &dyn DocumentSource),
            BuiltinCorpus::Hr,
        )?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn search(&self, query: &str, top_k: i64) -> Vec<ScoredDocument> {
        retrieve(query, self.store.iter(), top_k)
    }

    pub fn query(&self, question: &str, top_k: i64) -> Result<RagResult> {
        let docs = self.search(question, top_k);
        let answer = self.generator.generate(question, &docs)?;
        Ok(RagResult {
            question: question.to_string(),
            answer,
            sources: docs.iter().map(Citation::from).collect(),
        })
    }
}

/// `lexrag basic` entry point.
pub fn run_basic(
    config: &Config,
    docs: Option<&Path>,
    top_k: Option<i64>,
    words: &[String],
    json: bool,
) -> Result<()> {
    let docs_dir = docs.or(config.corpus.path.as_deref());
    let pipeline = BasicRagPipeline::open(docs_dir, &config.corpus.include_globs)?;
    let question = question_or_default(words, &EXAMPLE_QUESTIONS);
    let result = pipeline.query(&question, top_k.unwrap_or(config.retrieval.top_k))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Loaded {} documents", pipeline.store().len());
    println!();
    println!("Question: {}", result.question);
    println!();
    println!("Answer:");
    println!("{}", rule());
    println!("{}", result.answer);
    println!("{}", rule());
    println!();
    println!("Sources:");
    if result.sources.is_empty() {
        println!("  (none)");
    }
    for source in &result.sources {
        println!("  - {} (relevance score: {})", source.title, source.score);
    }
    println!();
    println!("Try other questions:");
    for q in EXAMPLE_QUESTIONS.iter().filter(|q| **q != question) {
        println!("  lexrag basic \"{}\"", q);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexrag_core::answer::NO_INFORMATION_FOUND;

    fn hr_pipeline() -> BasicRagPipeline {
        BasicRagPipeline::open(None, &["*.txt".to_string()]).unwrap()
    }

    #[test]
    fn test_vacation_question() {
        let result = hr_pipeline()
            .query("How many vacation days do I get?", 3)
            .unwrap();
        assert_eq!(result.sources[0].title, "Company Vacation Policy");
        assert!(result.sources.len() <= 3);
        assert!(result
            .answer
            .starts_with("Based on the available information:\n\nEmployees are entitled to 15 days"));
    }

    #[test]
    fn test_no_match() {
        let result = hr_pipeline().query("zzzz qqqq", 3).unwrap();
        assert!(result.sources.is_empty());
        assert_eq!(result.answer, NO_INFORMATION_FOUND);
    }

    #[test]
    fn test_empty_store() {
        let pipeline = BasicRagPipeline::new(Arc::new(DocumentStore::empty()));
        let result = pipeline.query("vacation days", 3).unwrap();
        assert!(result.sources.is_empty());
        assert_eq!(result.answer, NO_INFORMATION_FOUND);
    }

    #[test]
    fn test_missing_directory_falls_back_to_samples() {
        let pipeline =
            BasicRagPipeline::open(Some(Path::new("/no/such/docs")), &["*.txt".to_string()])
                .unwrap();
        assert_eq!(pipeline.store().len(), 5);
    }
}
