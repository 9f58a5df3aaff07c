//! In-memory [`DocumentSource`] for tests and embedding callers.

use crate::error::Result;
use crate::models::Document;

use super::DocumentSource;

/// A source that hands out a fixed list of documents.
pub struct MemorySource {
    name: String,
    docs: Vec<Document>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, docs: Vec<Document>) -> Self {
        Self {
            name: name.into(),
            docs,
        }
    }
}

impl DocumentSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Document>> {
        Ok(self.docs.clone())
    }
}
