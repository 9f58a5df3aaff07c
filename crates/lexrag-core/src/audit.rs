//! Append-only audit trail for the compliance pipeline.
//!
//! Each [`AuditLog`] belongs to exactly one pipeline instance. Appends
//! never fail; every entry is also emitted as a `tracing` event under the
//! `lexrag::audit` target.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::Result;

/// Action recorded by an [`AuditEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    SystemInit,
    Search,
    PiiDetectedInQuery,
    AuthorizationCheck,
    Retrieval,
    AnswerGenerated,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::SystemInit => "SYSTEM_INIT",
            AuditAction::Search => "SEARCH",
            AuditAction::PiiDetectedInQuery => "PII_DETECTED_IN_QUERY",
            AuditAction::AuthorizationCheck => "AUTHORIZATION_CHECK",
            AuditAction::Retrieval => "RETRIEVAL",
            AuditAction::AnswerGenerated => "ANSWER_GENERATED",
        }
    }
}

/// One immutable record of a pipeline action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub action: AuditAction,
    pub details: String,
    pub metadata: Map<String, Value>,
}

/// Ordered audit entries for one user session.
#[derive(Debug, Clone)]
pub struct AuditLog {
    user_id: String,
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Append an entry stamped with the current time.
    ///
    /// `metadata` is stored as-is when it is a JSON object; any other
    /// value is stored under a `"value"` key, and `null` becomes `{}`.
    pub fn record(&mut self, action: AuditAction, details: impl Into<String>, metadata: Value) {
        let metadata = match metadata {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        let entry = AuditEntry {
            timestamp: Utc::now(),
            user_id: self.user_id.clone(),
            action,
            details: details.into(),
            metadata,
        };
        info!(
            target: "lexrag::audit",
            user_id = %entry.user_id,
            action = entry.action.as_str(),
            details = %entry.details,
            "audit entry recorded"
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The last `n` entries (fewer if the log is shorter).
    pub fn recent(&self, n: usize) -> &[AuditEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of entries with the given action.
    pub fn count(&self, action: AuditAction) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }

    /// Pretty-printed JSON array of all entries, in append order.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
