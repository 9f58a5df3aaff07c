//! Write the synthetic enterprise corpus to disk.
//!
//! The resulting tree is `<base>/<category>/<file>.txt`, the layout
//! [`CategorizedSource`](crate::connector_fs::CategorizedSource) reads.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use lexrag_core::samples::ENTERPRISE_FILES;

use crate::pipeline::rule;

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub files: Vec<PathBuf>,
    /// Files written per category.
    pub per_category: BTreeMap<&'static str, usize>,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.files.len()
    }
}

/// Write every enterprise sample under `base`, overwriting existing files.
pub fn generate_docs(base: &Path) -> Result<GenerateReport> {
    std::fs::create_dir_all(base)
        .with_context(|| format!("Failed to create directory {}", base.display()))?;

    let mut report = GenerateReport::default();
    for file in ENTERPRISE_FILES {
        let dir = base.join(file.category);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let path = dir.join(file.file_name);
        std::fs::write(&path, file.file_text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote sample document");

        *report.per_category.entry(file.category).or_insert(0) += 1;
        report.files.push(path);
    }

    Ok(report)
}

/// `lexrag generate` entry point.
pub fn run_generate(base: &Path) -> Result<()> {
    println!("Generating synthetic enterprise documents in: {}", base.display());
    println!();

    let report = generate_docs(base)?;
    for path in &report.files {
        println!("  Created: {}", path.display());
    }
    println!();
    println!("Generated {} documents under {}", report.total(), base.display());
    for (category, count) in &report.per_category {
        println!("  - {}: {} files", category, count);
    }
    println!("{}", rule());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexrag_core::samples::{FINANCE_CATEGORY, HR_CATEGORY, PHARMA_CATEGORY};
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_all_categories() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("real_world");

        let report = generate_docs(&base).unwrap();
        assert_eq!(report.total(), ENTERPRISE_FILES.len());
        assert_eq!(report.per_category[FINANCE_CATEGORY], 3);
        assert_eq!(report.per_category[HR_CATEGORY], 3);
        assert_eq!(report.per_category[PHARMA_CATEGORY], 3);

        let text = std::fs::read_to_string(base.join(HR_CATEGORY).join("employee_policy.txt")).unwrap();
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
        assert_eq!(text, format!("{}\n", text.trim()));
    }

    #[test]
    fn test_generate_overwrites_existing_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(FINANCE_CATEGORY);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("audit_guidelines.txt"), "old").unwrap();

        generate_docs(tmp.path()).unwrap();
        let text = std::fs::read_to_string(dir.join("audit_guidelines.txt")).unwrap();
        assert!(text.starts_with("Title: Internal Audit Guidelines"));
    }

    #[test]
    fn test_generated_tree_loads_like_samples() {
        use crate::connector_fs::CategorizedSource;
        use lexrag_core::samples::BuiltinCorpus;
        use lexrag_core::store::DocumentSource;

        let tmp = TempDir::new().unwrap();
        generate_docs(tmp.path()).unwrap();

        let mut loaded = CategorizedSource::new(tmp.path(), vec!["*.txt".to_string()])
            .load()
            .unwrap();
        let mut builtin = BuiltinCorpus::Enterprise.documents();
        loaded.sort_by(|a, b| a.id.cmp(&b.id));
        builtin.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(loaded, builtin);
    }
}
