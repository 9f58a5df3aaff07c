//! Enterprise pipeline over a categorized finance/HR/pharma corpus.
//!
//! Documents come from `<data_path>/<category>/<file>.txt`; when that tree
//! is missing or empty the built-in enterprise samples are used. Answers
//! come from [`KeywordAnswerGenerator`] unless another generator is plugged
//! in.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use lexrag_core::answer::{AnswerGenerator, KeywordAnswerGenerator};
use lexrag_core::models::{Citation, RagResult, ScoredDocument};
use lexrag_core::samples::BuiltinCorpus;
use lexrag_core::search::{retrieve, snippet};
use lexrag_core::store::{DocumentSource, DocumentStore};

use super::{open_store, question_or_default, rule};
use crate::config::Config;
use crate::connector_fs::CategorizedSource;

pub const EXAMPLE_QUERIES: [&str; 3] = [
    "Summarize key HR data compliance requirements.",
    "What are the financial approval thresholds for transactions?",
    "Explain FDA safety reporting requirements for adverse events.",
];

const SNIPPET_CHARS: usize = 500;

pub struct EnterpriseRagPipeline {
    store: Arc<DocumentStore>,
    generator: Box<dyn AnswerGenerator>,
}

impl EnterpriseRagPipeline {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self::with_generator(store, Box::new(KeywordAnswerGenerator))
    }

    pub fn with_generator(store: Arc<DocumentStore>, generator: Box<dyn AnswerGenerator>) -> Self {
        Self { store, generator }
    }

    pub fn open(data_path: &Path, include_globs: &[String]) -> Result<Self> {
        let source = CategorizedSource::new(data_path, include_globs.to_vec());
        let store = open_store(Some(&source as &dyn DocumentSource), BuiltinCorpus::Enterprise)?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn retrieve(&self, query: &str, top_k: i64) -> Vec<ScoredDocument> {
        retrieve(query, self.store.iter(), top_k)
    }

    pub fn run(&self, query: &str, top_k: i64) -> Result<RagResult> {
        let docs = self.retrieve(query, top_k);
        let answer = self.generator.generate(query, &docs)?;
        Ok(RagResult {
            question: query.to_string(),
            answer,
            sources: docs.iter().map(Citation::from).collect(),
        })
    }
}

/// `lexrag enterprise` entry point.
///
/// `data_path` is already resolved from the flag or `DATA_PATH`; `None`
/// means the config value applies.
pub fn run_enterprise(
    config: &Config,
    data_path: Option<&Path>,
    top_k: Option<i64>,
    words: &[String],
    json: bool,
) -> Result<()> {
    let data_path = data_path.unwrap_or(&config.enterprise.data_path);
    let pipeline = EnterpriseRagPipeline::open(data_path, &config.corpus.include_globs)?;
    let query = question_or_default(words, &EXAMPLE_QUERIES);
    let result = pipeline.run(&query, top_k.unwrap_or(config.retrieval.top_k))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Loaded {} documents from {}", pipeline.store().len(), data_path.display());
    println!();
    println!("Query: {}", result.question);
    println!();
    println!("Answer:");
    println!("{}", rule());
    println!("{}", result.answer);
    println!("{}", rule());
    println!();
    println!("Sources:");
    if result.sources.is_empty() {
        println!("  - No sources found");
    }
    for source in &result.sources {
        println!(
            "  - {} ({}) [score: {}]",
            source.document_id,
            source.category.as_deref().unwrap_or("uncategorized"),
            source.score
        );
        if let Some(doc) = pipeline.store().get(&source.document_id) {
            for line in snippet(&doc.content, SNIPPET_CHARS).lines() {
                println!("      {}", line);
            }
        }
    }
    println!();
    println!("Try other queries:");
    for q in EXAMPLE_QUERIES.iter().filter(|q| **q != query) {
        println!("  lexrag enterprise \"{}\"", q);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexrag_core::answer::NO_INFORMATION_FOUND;
    use lexrag_core::samples::{ENTERPRISE_FILES, HR_CATEGORY, PHARMA_CATEGORY};
    use std::fs;
    use tempfile::TempDir;

    fn fallback_pipeline() -> EnterpriseRagPipeline {
        EnterpriseRagPipeline::open(Path::new("/no/such/data"), &["*.txt".to_string()]).unwrap()
    }

    #[test]
    fn test_missing_data_path_uses_samples() {
        let pipeline = fallback_pipeline();
        assert_eq!(pipeline.store().len(), ENTERPRISE_FILES.len());
    }

    #[test]
    fn test_hr_compliance_query() {
        let result = fallback_pipeline()
            .run("Summarize key HR data compliance requirements.", 3)
            .unwrap();
        assert!(!result.sources.is_empty());
        assert!(result.sources.len() <= 3);
        assert!(result.answer.starts_with("Employee data must comply with GDPR and HIPAA"));
    }

    #[test]
    fn test_pharma_safety_query() {
        let result = fallback_pipeline()
            .run("Explain FDA safety reporting requirements for adverse events.", 3)
            .unwrap();
        assert!(result.answer.starts_with("FDA drug safety reporting"));
        assert!(result
            .sources
            .iter()
            .any(|s| s.category.as_deref() == Some(PHARMA_CATEGORY)));
    }

    #[test]
    fn test_no_match() {
        let result = fallback_pipeline().run("zzzz qqqq", 3).unwrap();
        assert!(result.sources.is_empty());
        assert_eq!(result.answer, NO_INFORMATION_FOUND);
    }

    #[test]
    fn test_loads_categorized_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(HR_CATEGORY);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("remote_work.txt"), "Remote work requires manager sign-off.\n").unwrap();

        let pipeline = EnterpriseRagPipeline::open(tmp.path(), &["*.txt".to_string()]).unwrap();
        assert_eq!(pipeline.store().len(), 1);

        let result = pipeline.run("remote work policy", 3).unwrap();
        assert_eq!(result.sources[0].document_id, "hr_policies/remote_work.txt");
        assert_eq!(result.sources[0].category.as_deref(), Some(HR_CATEGORY));
    }
}
