//! Filesystem document sources.
//!
//! Two layouts are supported:
//!
//! - [`TextDirectorySource`]: one document per matching file directly
//!   inside a directory (`docs/vacation_policy.txt`).
//! - [`CategorizedSource`]: one sub-directory per category
//!   (`real_world/hr_policies/benefits_overview.txt`).
//!
//! Files are ordered by relative path so identifiers are deterministic.
//! A missing root is reported as an error, which
//! [`DocumentStore::load`](lexrag_core::store::DocumentStore::load) turns
//! into a fallback to the built-in corpus.

use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use lexrag_core::classify::classify;
use lexrag_core::models::{title_from_stem, Document};
use lexrag_core::store::DocumentSource;

/// How [`TextDirectorySource`] numbers its documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdStyle {
    /// `1`, `2`, `3`, ...
    Sequential,
    /// `<prefix>-001`, `<prefix>-002`, ...
    Prefixed(String),
}

impl IdStyle {
    fn id_for(&self, n: usize) -> String {
        match self {
            IdStyle::Sequential => n.to_string(),
            IdStyle::Prefixed(prefix) => format!("{}-{:03}", prefix, n),
        }
    }
}

/// A flat directory of text files.
#[derive(Debug, Clone)]
pub struct TextDirectorySource {
    root: PathBuf,
    include_globs: Vec<String>,
    id_style: IdStyle,
    auto_classify: bool,
}

impl TextDirectorySource {
    pub fn new(root: impl Into<PathBuf>, include_globs: Vec<String>) -> Self {
        Self {
            root: root.into(),
            include_globs,
            id_style: IdStyle::Sequential,
            auto_classify: false,
        }
    }

    pub fn with_id_style(mut self, id_style: IdStyle) -> Self {
        self.id_style = id_style;
        self
    }

    /// Assign a keyword-based classification and the `user_document`
    /// category to every loaded document.
    pub fn with_auto_classify(mut self) -> Self {
        self.auto_classify = true;
        self
    }

    fn scan(&self) -> Result<Vec<Document>> {
        let include_set = build_globset(&self.include_globs)?;
        let files = collect_files(&self.root, 1, &include_set)?;

        let docs = files
            .into_iter()
            .enumerate()
            .map(|(i, (path, body))| {
                let mut doc = Document::new(self.id_style.id_for(i + 1), file_title(&path), body);
                if self.auto_classify {
                    doc.classification = Some(classify(&doc.content));
                    doc.category = Some("user_document".to_string());
                }
                doc
            })
            .collect();

        Ok(docs)
    }
}

impl DocumentSource for TextDirectorySource {
    fn name(&self) -> &str {
        "filesystem"
    }

    fn load(&self) -> lexrag_core::Result<Vec<Document>> {
        self.scan()
            .map_err(|e| lexrag_core::Error::from_source(self.name(), format!("{:#}", e)))
    }
}

/// A directory of category sub-directories, each holding text files.
#[derive(Debug, Clone)]
pub struct CategorizedSource {
    root: PathBuf,
    include_globs: Vec<String>,
}

impl CategorizedSource {
    pub fn new(root: impl Into<PathBuf>, include_globs: Vec<String>) -> Self {
        Self {
            root: root.into(),
            include_globs,
        }
    }

    fn scan(&self) -> Result<Vec<Document>> {
        let include_set = build_globset(&self.include_globs)?;
        let files = collect_files(&self.root, 2, &include_set)?;

        let mut docs = Vec::with_capacity(files.len());
        for (path, body) in files {
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            let category = relative
                .parent()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default();
            let file_name = relative
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            let classification = classify(&body);
            docs.push(
                Document::new(format!("{}/{}", category, file_name), file_title(&path), body)
                    .with_classification(classification)
                    .with_category(category),
            );
        }

        Ok(docs)
    }
}

impl DocumentSource for CategorizedSource {
    fn name(&self) -> &str {
        "filesystem:categorized"
    }

    fn load(&self) -> lexrag_core::Result<Vec<Document>> {
        self.scan()
            .map_err(|e| lexrag_core::Error::from_source(self.name(), format!("{:#}", e)))
    }
}

/// Read every file exactly `depth` levels below `root` whose file name
/// matches `include_set`. Unreadable files are skipped with a warning.
fn collect_files(root: &Path, depth: usize, include_set: &GlobSet) -> Result<Vec<(PathBuf, String)>> {
    if !root.is_dir() {
        bail!("Document directory does not exist: {}", root.display());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(depth)
        .max_depth(depth)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !include_set.is_match(entry.file_name()) {
            continue;
        }

        match std::fs::read_to_string(path) {
            Ok(body) => files.push((path.to_path_buf(), body)),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }

    Ok(files)
}

fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| title_from_stem(&s.to_string_lossy()))
        .unwrap_or_default()
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
