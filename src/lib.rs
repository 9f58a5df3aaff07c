//! # lexrag
//!
//! Lexical retrieval and answer assembly over small in-memory corpora,
//! with a compliance variant that classifies sources, redacts PII, and
//! keeps an audit trail.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌──────────────┐
//! │  Sources     │──▶│ DocumentStore │──▶│   Scorer     │
//! │ dir/builtin  │   │  (Arc, r/o)   │   │ term counts  │
//! └──────────────┘   └───────────────┘   └──────┬───────┘
//!                                               │
//!                       ┌───────────────────────┤
//!                       ▼                       ▼
//!                ┌─────────────┐        ┌───────────────┐
//!                │ Answer      │        │ PII / classes │
//!                │ generators  │        │ + audit log   │
//!                └─────────────┘        └───────────────┘
//! ```
//!
//! The domain types, scorer, PII detector, classifier, and audit log live
//! in `lexrag-core`. This crate adds configuration, filesystem sources,
//! the three pipelines, and the `lexrag` binary.
//!
//! ## Quick Start
//!
//! ```bash
//! lexrag basic "How many vacation days do I get?"
//! lexrag compliance --audit-out audit.json "HIPAA retention"
//! lexrag generate data/real_world
//! lexrag enterprise --data data/real_world
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`connector_fs`] | Filesystem document sources |
//! | [`pipeline`] | Basic, compliance, and enterprise pipelines |
//! | [`export`] | Audit log JSON export |
//! | [`generate`] | Synthetic enterprise corpus writer |
//! | [`logging`] | Tracing subscriber setup |

pub mod config;
pub mod connector_fs;
pub mod export;
pub mod generate;
pub mod logging;
pub mod pipeline;
