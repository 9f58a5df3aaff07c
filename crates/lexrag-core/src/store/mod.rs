//! Document storage for lexrag.
//!
//! The [`DocumentSource`] trait is the seam through which documents enter
//! the system (built-in corpora, directories of text files, custom
//! sources). A [`DocumentStore`] is built once from a source and is
//! read-only afterwards, so it can be shared between pipelines behind an
//! `Arc`.
//!
//! # Fallback
//!
//! [`DocumentStore::load`] fails open: if the primary source errors or
//! yields no documents, the fallback source is used instead and a warning
//! is logged.

pub mod memory;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::Document;

/// Anything that can produce an ordered list of documents.
///
/// Implementations must be `Send + Sync` so stores and sources can be
/// shared across threads.
pub trait DocumentSource: Send + Sync {
    /// Short label used in logs (e.g. `"builtin:hr"`, `"filesystem"`).
    fn name(&self) -> &str;

    /// Produce the documents in their canonical order.
    fn load(&self) -> Result<Vec<Document>>;
}

/// Immutable, ordered collection of documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    /// An empty store. Every query against it returns no results.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from documents, rejecting duplicate ids.
    pub fn from_documents(docs: Vec<Document>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(docs.len());
        for doc in &docs {
            if !seen.insert(doc.id.as_str()) {
                return Err(Error::DuplicateId(doc.id.clone()));
            }
        }
        Ok(Self { docs })
    }

    /// Load from `primary`, falling back to `fallback` when `primary` is
    /// absent, fails, or is empty.
    pub fn load(
        primary: Option<&dyn DocumentSource>,
        fallback: &dyn DocumentSource,
    ) -> Result<Self> {
        if let Some(source) = primary {
            match source.load() {
                Ok(docs) if !docs.is_empty() => {
                    debug!(source = source.name(), count = docs.len(), "loaded documents");
                    return Self::from_documents(docs);
                }
                Ok(_) => {
                    warn!(
                        source = source.name(),
                        fallback = fallback.name(),
                        "source yielded no documents, using fallback corpus"
                    );
                }
                Err(e) => {
                    warn!(
                        source = source.name(),
                        fallback = fallback.name(),
                        error = %e,
                        "source unavailable, using fallback corpus"
                    );
                }
            }
        }

        let docs = fallback.load()?;
        debug!(source = fallback.name(), count = docs.len(), "loaded documents");
        Self::from_documents(docs)
    }

    /// All documents in load order. May be iterated any number of times.
    pub fn all(&self) -> &[Document] {
        &self.docs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.iter().find(|d| d.id == id)
    }
}

impl<'a> IntoIterator for &'a DocumentStore {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
