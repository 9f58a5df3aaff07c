//! Export an audit log as pretty-printed JSON.
//!
//! The file holds a single array of entries in recording order, each with
//! an RFC 3339 `timestamp`, `user_id`, `action`, `details`, and `metadata`.
//! An existing file is overwritten.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use lexrag_core::audit::AuditLog;

/// Write `log` to `path`, creating parent directories. Returns the number
/// of entries written.
pub fn export_audit_log(log: &AuditLog, path: &Path) -> Result<usize> {
    let json = log.to_json_pretty()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, &json)
        .with_context(|| format!("Failed to write audit log to {}", path.display()))?;

    info!(path = %path.display(), entries = log.len(), "audit log exported");
    Ok(log.len())
}
