//! # lexrag core
//!
//! Shared logic for lexrag: data models, the in-memory document store,
//! the lexical scorer, the sensitive-data classifier, the audit log, and
//! the answer generation trait.
//!
//! This crate performs no filesystem I/O and installs no logging
//! subscriber. Loading documents from disk, exporting audit logs, and
//! printing reports live in the `lexrag` application crate.

pub mod answer;
pub mod audit;
pub mod classify;
pub mod error;
pub mod models;
pub mod pii;
pub mod samples;
pub mod search;
pub mod store;

pub use error::{Error, Result};
