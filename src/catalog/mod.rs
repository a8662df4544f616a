//! Catalog retrieval pipeline for tada.
//!
//! Fetches the OpenRouter model catalog (or reuses a fresh cache snapshot),
//! reduces it to the zero-cost subset, and hands the result to the ranking
//! engine. The cache always stores the *unranked* free list so the same
//! snapshot can be re-ranked under any profile.

pub mod cache;
pub mod fetch;
pub mod filter;

#[cfg(test)]
mod tests;

use colored::Colorize;

use crate::ranking::{self, RankedModel};

/// Returns the free models ranked for a profile, from cache or the API.
///
/// A fresh cache snapshot short-circuits the fetch unless `force_refresh`
/// is set. Fetch failures degrade to an empty list upstream, so this always
/// produces a ranking (possibly empty), never an error.
pub async fn free_models(api_key: &str, force_refresh: bool, profile: &str) -> Vec<RankedModel> {
    if !force_refresh {
        if let Some(models) = cache::load() {
            return ranking::rank(models, profile);
        }
    }

    let all = fetch::fetch_catalog(api_key).await;
    let free = filter::filter_free(all);

    if let Err(err) = cache::save(&free) {
        eprintln!("{} could not write model cache: {err:#}", "warning:".yellow());
    }

    ranking::rank(free, profile)
}
