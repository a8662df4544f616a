//! Free-model filter.
//!
//! Reduces a full catalog to the zero-cost subset. A record qualifies when
//! its prompt cost parses to exactly zero, or when its identifier carries
//! the free-tier marker. Each record appears at most once; catalog order
//! is preserved.

use crate::constants::FREE_MARKER;
use crate::model::ModelRecord;

/// Retains the free subset of a catalog.
///
/// Non-numeric or missing prompt costs never qualify through the price
/// rule, but the marker rule can still admit the record.
pub fn filter_free(models: Vec<ModelRecord>) -> Vec<ModelRecord> {
    models
        .into_iter()
        .filter(|m| has_zero_prompt_cost(m) || m.id.contains(FREE_MARKER))
        .collect()
}

fn has_zero_prompt_cost(model: &ModelRecord) -> bool {
    model.pricing.prompt_cost() == Some(0.0)
}
