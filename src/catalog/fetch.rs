//! Catalog fetch over HTTP.
//!
//! One bounded GET against the OpenRouter models endpoint. Transport
//! failures and non-2xx responses degrade to an empty catalog with a
//! printed diagnostic; callers then see zero free models, not a crash.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::{FETCH_TIMEOUT_SECS, OPENROUTER_MODELS_URL};
use crate::model::ModelRecord;

/// Response envelope of the models-listing endpoint.
#[derive(Deserialize)]
struct ModelListing {
    #[serde(default)]
    data: Vec<ModelRecord>,
}

/// Fetches all catalog models, returning an empty list on any failure.
pub async fn fetch_catalog(api_key: &str) -> Vec<ModelRecord> {
    match try_fetch(api_key).await {
        Ok(models) => models,
        Err(err) => {
            eprintln!("{} error fetching models: {err:#}", "warning:".yellow());
            Vec::new()
        }
    }
}

async fn try_fetch(api_key: &str) -> Result<Vec<ModelRecord>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .context("Failed to build HTTP client")?;

    let listing: ModelListing = client
        .get(OPENROUTER_MODELS_URL)
        .bearer_auth(api_key)
        .send()
        .await
        .context("Request to OpenRouter failed")?
        .error_for_status()
        .context("OpenRouter returned an error status")?
        .json()
        .await
        .context("Failed to decode model listing")?;

    Ok(listing.data)
}
