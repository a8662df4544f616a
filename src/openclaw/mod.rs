//! OpenClaw configuration access for tada.
//!
//! OpenClaw keeps its settings as JSON at `~/.openclaw/openclaw.json`; tada
//! reads and updates the model-selection slice of that document and parks
//! its own model cache in the same directory. The config is handled as a
//! raw [`serde_json::Value`] so keys tada doesn't know about survive every
//! round-trip untouched.

pub mod format;
pub mod update;


use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::constants::{API_KEY_ENV, CACHE_FILENAME, OPENCLAW_CONFIG_FILENAME, OPENCLAW_DIR};

/// Returns the OpenClaw state directory (`~/.openclaw/`).
pub fn openclaw_dir() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        .join(OPENCLAW_DIR);
    Ok(dir)
}

/// Returns the OpenClaw configuration file path.
pub fn config_path() -> Result<PathBuf> {
    Ok(openclaw_dir()?.join(OPENCLAW_CONFIG_FILENAME))
}

/// Returns the model-cache file path.
pub fn cache_path() -> Result<PathBuf> {
    Ok(openclaw_dir()?.join(CACHE_FILENAME))
}

/// Loads the OpenClaw config, treating a missing or corrupt file as empty.
pub fn load_config() -> Value {
    let Ok(path) = config_path() else {
        return Value::Object(Default::default());
    };
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str(&contents).ok())
        .unwrap_or_else(|| Value::Object(Default::default()))
}

/// Writes the OpenClaw config, creating the directory if needed.
pub fn save_config(config: &Value) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json).with_context(|| format!("Failed to write config to {:?}", path))?;
    Ok(())
}

/// Resolves the OpenRouter API key: environment first, then the `env`
/// section of the OpenClaw config.
pub fn api_key() -> Option<String> {
    if let Ok(val) = std::env::var(API_KEY_ENV) {
        if !val.is_empty() {
            return Some(val);
        }
    }

    load_config()
        .pointer(&format!("/env/{API_KEY_ENV}"))
        .and_then(Value::as_str)
        .map(String::from)
}

/// Currently configured primary model, if any.
pub fn current_primary(config: &Value) -> Option<String> {
    config
        .pointer("/agents/defaults/model/primary")
        .and_then(Value::as_str)
        .map(String::from)
}

/// Currently configured fallback models, in try-order.
pub fn current_fallbacks(config: &Value) -> Vec<String> {
    config
        .pointer("/agents/defaults/model/fallbacks")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Whether the OpenRouter auth profile is present.
pub fn has_auth_profile(config: &Value) -> bool {
    config
        .pointer(&format!(
            "/auth/profiles/{}",
            crate::constants::AUTH_PROFILE_KEY
        ))
        .is_some()
}
