//! Catalog record types for tada.
//!
//! Mirrors the shape of the OpenRouter models-listing response. Records are
//! read-only inputs: fetched once per invocation (or loaded from cache),
//! never mutated. Unknown catalog keys are preserved through cache
//! round-trips via `#[serde(flatten)]`.

use serde::{Deserialize, Serialize};

/// One model entry from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Catalog identifier, e.g. `"qwen/qwen3-coder:free"`.
    pub id: String,
    /// Human-readable display name.
    #[serde(default)]
    pub name: String,
    /// Per-token pricing. Fields may be absent or non-numeric.
    #[serde(default)]
    pub pricing: Pricing,
    /// Context window size in tokens.
    #[serde(default)]
    pub context_length: u64,
    /// Declared input/output modalities.
    #[serde(default)]
    pub architecture: Architecture,
    /// Request-parameter names the model accepts (`"tools"`, etc.).
    /// The catalog sometimes reports `null` here.
    #[serde(default)]
    pub supported_parameters: Option<Vec<String>>,
    /// Everything else the catalog sent, kept for cache fidelity.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ModelRecord {
    /// Supported request parameters, empty when the catalog reported none.
    pub fn supported_parameters(&self) -> &[String] {
        self.supported_parameters.as_deref().unwrap_or_default()
    }
}

/// Pricing block of a catalog record.
///
/// The catalog reports costs as decimal strings (`"0.0000007"`), but the
/// field is kept as a raw JSON value so numeric or malformed entries
/// don't fail deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pricing {
    /// Cost per prompt token.
    #[serde(default)]
    pub prompt: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Pricing {
    /// Parses the prompt cost as a float, `None` when absent or non-numeric.
    pub fn prompt_cost(&self) -> Option<f64> {
        match self.prompt.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Architecture block of a catalog record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Architecture {
    /// Accepted input modalities, e.g. `["text", "image"]`.
    #[serde(default)]
    pub input_modalities: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
