//! Result cache for the filtered free-model list.
//!
//! A single JSON file under `~/.openclaw/` holding a timestamp and the
//! unranked free models. Snapshots stay fresh for a fixed window; anything
//! invalid, corrupt, or stale reads as a cache miss, never an error.
//! Writes are not locked against concurrent processes -- acceptable for a
//! single-user interactive tool.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::constants::CACHE_MAX_AGE_HOURS;
use crate::model::ModelRecord;
use crate::openclaw;

/// On-disk cache document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// RFC 3339 timestamp of when the snapshot was written.
    pub cached_at: String,
    pub models: Vec<ModelRecord>,
}

/// Loads the cached free-model list if the snapshot is still fresh.
pub fn load() -> Option<Vec<ModelRecord>> {
    let snapshot = read_snapshot()?;
    is_fresh(&snapshot.cached_at).then_some(snapshot.models)
}

/// Saves a new snapshot, stamping it with the current time.
pub fn save(models: &[ModelRecord]) -> Result<()> {
    let path = openclaw::cache_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory {:?}", parent))?;
    }
    let snapshot = CacheSnapshot {
        cached_at: Utc::now().to_rfc3339(),
        models: models.to_vec(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&path, json).with_context(|| format!("Failed to write cache to {:?}", path))?;
    Ok(())
}

/// Model count and age of the current snapshot, fresh or not.
/// Used by `tada status`; `None` when no readable cache exists.
pub fn inspect() -> Option<(usize, Duration)> {
    let snapshot = read_snapshot()?;
    let cached_at = DateTime::parse_from_rfc3339(&snapshot.cached_at).ok()?;
    let age = Utc::now().signed_duration_since(cached_at);
    Some((snapshot.models.len(), age))
}

/// Whether a snapshot timestamp is within the freshness window.
pub(crate) fn is_fresh(cached_at: &str) -> bool {
    DateTime::parse_from_rfc3339(cached_at).is_ok_and(|t| {
        Utc::now().signed_duration_since(t) < Duration::hours(CACHE_MAX_AGE_HOURS)
    })
}

fn read_snapshot() -> Option<CacheSnapshot> {
    let path = openclaw::cache_path().ok()?;
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}
