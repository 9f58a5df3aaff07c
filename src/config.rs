use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub enterprise: EnterpriseConfig,
    #[serde(default)]
    pub compliance: ComplianceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: i64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> i64 {
    lexrag_core::search::DEFAULT_TOP_K
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorpusConfig {
    /// Directory of `.txt` documents. Built-in samples are used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            include_globs: default_include_globs(),
        }
    }
}

fn default_include_globs() -> Vec<String> {
    vec!["*.txt".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct EnterpriseConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

impl Default for EnterpriseConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/real_world")
}

#[derive(Debug, Deserialize, Clone)]
pub struct ComplianceConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Write the audit log here after each compliance query.
    #[serde(default)]
    pub audit_export: Option<PathBuf>,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            audit_export: None,
        }
    }
}

fn default_user_id() -> String {
    "demo_user".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
fn default_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Defaults used when no config file is given.
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.retrieval.top_k < 1 {
            anyhow::bail!("retrieval.top_k must be >= 1");
        }

        if self.corpus.include_globs.is_empty() {
            anyhow::bail!("corpus.include_globs must not be empty");
        }
        for pattern in &self.corpus.include_globs {
            globset::Glob::new(pattern)
                .with_context(|| format!("Invalid corpus.include_globs pattern: '{}'", pattern))?;
        }

        if self.compliance.user_id.trim().is_empty() {
            anyhow::bail!("compliance.user_id must not be empty");
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => anyhow::bail!(
                "Unknown logging format: '{}'. Must be pretty or json.",
                other
            ),
        }

        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    config.validate()?;

    Ok(config)
}
