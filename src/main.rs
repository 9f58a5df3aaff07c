//! # lexrag CLI
//!
//! ```bash
//! lexrag [--config lexrag.toml] <command>
//! ```
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lexrag basic [question]` | Answer from the HR handbook or `--docs` |
//! | `lexrag compliance [question]` | Classified, redacted, audited answer |
//! | `lexrag enterprise [query]` | Canned domain answers over a categorized corpus |
//! | `lexrag generate [dir]` | Write the synthetic enterprise corpus |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lexrag::config::{self, Config};
use lexrag::pipeline::{basic, compliance, enterprise};
use lexrag::{generate, logging};

/// Lexical retrieval and answer assembly over small document corpora.
#[derive(Parser)]
#[command(name = "lexrag", version)]
struct Cli {
    /// Path to configuration file (TOML). Built-in defaults apply when
    /// omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question with the top-ranked document.
    Basic {
        /// Directory of `.txt` documents (defaults to the HR samples).
        #[arg(long)]
        docs: Option<PathBuf>,

        /// Maximum number of documents to retrieve.
        #[arg(long)]
        top_k: Option<i64>,

        /// Print the result record as JSON.
        #[arg(long)]
        json: bool,

        question: Vec<String>,
    },

    /// Answer with classification, PII redaction, and an audit trail.
    Compliance {
        /// User recorded in audit entries.
        #[arg(long)]
        user: Option<String>,

        /// Directory of `.txt` documents (defaults to the regulatory samples).
        #[arg(long)]
        docs: Option<PathBuf>,

        #[arg(long)]
        top_k: Option<i64>,

        /// Export the audit log as JSON to this file.
        #[arg(long)]
        audit_out: Option<PathBuf>,

        #[arg(long)]
        json: bool,

        question: Vec<String>,
    },

    /// Query the categorized enterprise corpus.
    Enterprise {
        /// Root of `<category>/<file>.txt` documents.
        #[arg(long, env = "DATA_PATH")]
        data: Option<PathBuf>,

        #[arg(long)]
        top_k: Option<i64>,

        #[arg(long)]
        json: bool,

        query: Vec<String>,
    },

    /// Write the synthetic enterprise documents to disk.
    Generate {
        /// Output directory (defaults to `[enterprise] data_path`).
        dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::minimal(),
    };
    logging::init_logging(&cfg.logging)?;

    match cli.command {
        Commands::Basic {
            docs,
            top_k,
            json,
            question,
        } => {
            basic::run_basic(&cfg, docs.as_deref(), top_k, &question, json)?;
        }
        Commands::Compliance {
            user,
            docs,
            top_k,
            audit_out,
            json,
            question,
        } => {
            compliance::run_compliance(
                &cfg,
                user.as_deref(),
                docs.as_deref(),
                top_k,
                audit_out.as_deref(),
                &question,
                json,
            )?;
        }
        Commands::Enterprise {
            data,
            top_k,
            json,
            query,
        } => {
            enterprise::run_enterprise(&cfg, data.as_deref(), top_k, &query, json)?;
        }
        Commands::Generate { dir } => {
            let base = dir.unwrap_or_else(|| cfg.enterprise.data_path.clone());
            generate::run_generate(&base)?;
        }
    }

    Ok(())
}
