//! Derived model metadata for scoring.
//!
//! Extracts structured features from one raw catalog record: an estimated
//! parameter count parsed out of the identifier text, normalized size and
//! context scores, and capability flags. Recomputed fresh on every scoring
//! pass, never cached.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{CONTEXT_CEILING_TOKENS, DEFAULT_SIZE_SCORE, SIZE_CEILING_BILLIONS};
use crate::model::ModelRecord;

/// Identifier substrings signaling chain-of-thought/reasoning branding.
const REASONING_MARKERS: [&str; 3] = ["thinking", "r1", "reasoning"];

/// Identifier substrings signaling coding-focused models.
const CODING_MARKERS: [&str; 2] = ["coder", "code"];

/// A number immediately followed by "b", e.g. the "70b" in "llama-3.3-70b".
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)b").expect("size pattern is valid"));

/// Features derived from a single catalog record.
#[derive(Debug, Clone)]
pub struct ModelMetadata {
    /// Estimated parameter count in billions, 0 when undetectable.
    pub size_billions: u32,
    /// Normalized size score. Undetectable sizes score a middling
    /// [`DEFAULT_SIZE_SCORE`] rather than zero.
    pub size_score: f64,
    /// Context length normalized against [`CONTEXT_CEILING_TOKENS`].
    pub context_score: f64,
    pub is_vision_capable: bool,
    pub is_reasoning_model: bool,
    pub is_coding_model: bool,
    pub has_tools: bool,
    /// Unweighted mean of five capability booleans.
    pub capability_score: f64,
}

impl ModelMetadata {
    /// Derives metadata from one catalog record. Deterministic.
    pub fn extract(model: &ModelRecord) -> Self {
        let id = model.id.to_lowercase();

        // First "<digits>b" across identifier + display name.
        let haystack = format!("{}{}", id, model.name.to_lowercase());
        let size_billions = SIZE_RE
            .captures(&haystack)
            .and_then(|c| c[1].parse().ok())
            .unwrap_or(0);

        let size_score = if size_billions > 0 {
            (f64::from(size_billions) / SIZE_CEILING_BILLIONS).min(1.0)
        } else {
            DEFAULT_SIZE_SCORE
        };

        let context_score = (model.context_length as f64 / CONTEXT_CEILING_TOKENS).min(1.0);

        let is_vision_capable = model
            .architecture
            .input_modalities
            .iter()
            .any(|m| m == "image");

        let is_reasoning_model = REASONING_MARKERS.iter().any(|m| id.contains(m));
        let is_coding_model = CODING_MARKERS.iter().any(|m| id.contains(m));

        let params = model.supported_parameters();
        let supports = |name: &str| params.iter().any(|p| p == name);
        let has_tools = supports("tools") || supports("tool_choice");

        let capability_features = [
            has_tools,
            supports("response_format"),
            supports("structured_outputs"),
            is_reasoning_model,
            is_vision_capable,
        ];
        let capability_score = capability_features.iter().filter(|&&f| f).count() as f64
            / capability_features.len() as f64;

        Self {
            size_billions,
            size_score,
            context_score,
            is_vision_capable,
            is_reasoning_model,
            is_coding_model,
            has_tools,
            capability_score,
        }
    }
}
