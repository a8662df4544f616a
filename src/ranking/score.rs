//! The scoring function.
//!
//! Combines tier classification and derived metadata into a single scalar,
//! weighted by a profile, then applies the boost/penalty policies in a fixed
//! order. The order matters: boosts and penalties compound multiplicatively,
//! so reordering them changes the numbers. Scores are meaningful only
//! relative to each other; they are not clamped to any range.

use crate::constants::{LOW_CONTEXT_PENALTY, MISSING_VISION_PENALTY, TOOL_BONUS};
use crate::model::ModelRecord;
use crate::ranking::metadata::ModelMetadata;
use crate::ranking::profile::Profile;
use crate::ranking::rules::RuleSet;

/// Scores one model under a profile.
///
/// Pure: identical inputs yield bit-identical output.
pub fn score(model: &ModelRecord, profile: &Profile, rules: &RuleSet) -> f64 {
    let metadata = ModelMetadata::extract(model);
    let w = &profile.weights;

    let benchmark_score = rules.tier_of(&model.id).score();

    let mut score = benchmark_score * w.benchmark
        + metadata.size_score * w.size
        + metadata.context_score * w.context
        + metadata.capability_score * w.capability;

    // Category boost. The three named categories have purpose-built flags
    // checked before the generic pattern match; a model missing the flag can
    // still qualify through the category's patterns.
    if let Some(category) = profile.category_boost {
        let flag = match category {
            "coding" => metadata.is_coding_model,
            "reasoning" => metadata.is_reasoning_model,
            "vision" => metadata.is_vision_capable,
            _ => false,
        };
        if flag || rules.matches_boost(&model.id, category) {
            score *= rules.boost_factor(category);
        }
    }

    if profile.prefer_tools && metadata.has_tools {
        score *= TOOL_BONUS;
    }

    if profile.require_vision && !metadata.is_vision_capable {
        score *= MISSING_VISION_PENALTY;
    }

    if model.context_length < profile.min_context {
        score *= LOW_CONTEXT_PENALTY;
    }

    score
}
