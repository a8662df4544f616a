//! Model scoring and ranking for tada.
//!
//! Turns a list of catalog records into an ordered preference list for a
//! use-case profile: each model is classified against the pattern rules,
//! has metadata derived, and is scored; the batch is then sorted by
//! descending score.

pub mod metadata;
pub mod profile;
pub mod rules;
pub mod score;

#[cfg(test)]
mod tests;

use crate::model::ModelRecord;
use metadata::ModelMetadata;
use rules::{RuleSet, Tier};

/// A catalog record annotated with its ranking results.
#[derive(Debug, Clone)]
pub struct RankedModel {
    pub model: ModelRecord,
    pub score: f64,
    pub tier: Tier,
    /// Name of the profile the score was computed under.
    pub profile: &'static str,
    /// Routers are annotated, never excluded -- callers decide to skip them.
    pub is_router: bool,
    pub metadata: ModelMetadata,
}

/// Ranks models under a profile using the embedded rule set.
///
/// Every input model appears in the output (filtering for "free" happens
/// upstream), sorted by descending score. The sort is stable, so equal
/// scores keep their catalog order.
pub fn rank(models: Vec<ModelRecord>, profile_name: &str) -> Vec<RankedModel> {
    rank_with(models, profile_name, RuleSet::builtin())
}

/// [`rank`] against an explicit rule set. Split out for testability.
pub fn rank_with(models: Vec<ModelRecord>, profile_name: &str, rules: &RuleSet) -> Vec<RankedModel> {
    let profile = profile::resolve(profile_name);

    let mut ranked: Vec<RankedModel> = models
        .into_iter()
        .map(|model| {
            let score = score::score(&model, profile, rules);
            let tier = rules.tier_of(&model.id);
            let is_router = rules.is_router(&model.id);
            let metadata = ModelMetadata::extract(&model);
            RankedModel {
                model,
                score,
                tier,
                profile: profile.name,
                is_router,
                metadata,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Picks the model to auto-select as primary: the top-ranked non-router
/// entry, or the top entry regardless when everything is a router.
pub fn auto_pick(ranked: &[RankedModel]) -> Option<&RankedModel> {
    ranked
        .iter()
        .find(|m| !m.is_router)
        .or_else(|| ranked.first())
}
