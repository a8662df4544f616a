//! Subcommand handlers for tada.
//!
//! Each handler follows the same shape: resolve the API key, pull the
//! ranked free-model list from the catalog pipeline, then print or write
//! configuration. Data-quality problems never abort a command; only a
//! missing credential, an unknown model on `switch`, or a failed config
//! write exits non-zero.

use anyhow::Result;
use colored::Colorize;

use crate::catalog;
use crate::constants::{APP_NAME, CACHE_MAX_AGE_HOURS, DEFAULT_FALLBACK_COUNT};
use crate::openclaw::{
    self,
    update::{self, UpdateOptions},
};
use crate::output;
use crate::ranking::{self, profile, rules::RuleSet, rules::TIER_ORDER};

/// Resolves the API key or fails with setup instructions.
fn require_api_key() -> Result<String> {
    openclaw::api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "OPENROUTER_API_KEY not set.\n\
             Set it via: export OPENROUTER_API_KEY='sk-or-...'\n\
             Or add it under \"env\" in ~/.openclaw/openclaw.json\n\
             Get a free key at: https://openrouter.ai/keys"
        )
    })
}

/// `tada list` -- available free models ranked by quality.
pub(crate) async fn list(limit: usize, refresh: bool, profile_name: &str) -> Result<()> {
    let api_key = require_api_key()?;
    let profile = profile::resolve(profile_name);

    println!("Fetching free models from OpenRouter...");
    println!(
        "Profile: {} - {}",
        profile.name.cyan().bold(),
        profile.description
    );

    let models = catalog::free_models(&api_key, refresh, profile.name).await;

    if models.is_empty() {
        println!("No free models available.");
        return Ok(());
    }

    let config = openclaw::load_config();
    let current = openclaw::current_primary(&config);
    let fallbacks = openclaw::current_fallbacks(&config);

    println!();
    println!(
        "Top {} Free AI Models (ranked for '{}'):",
        limit.min(models.len()),
        profile.name
    );
    println!();
    output::print_model_table(&models, limit, current.as_deref(), &fallbacks);

    if models.len() > limit {
        println!();
        println!(
            "{}",
            format!("... and {} more. Use --limit to see more.", models.len() - limit).dimmed()
        );
    }

    println!();
    println!("Total free models available: {}", models.len());
    println!();
    println!("Profiles: {}", profile::valid_names().join(", "));
    println!();
    println!("Commands:");
    println!(
        "  {}   Rank for a specific use case",
        format!("{APP_NAME} list --profile <profile>").cyan()
    );
    println!(
        "  {}             Set as primary model",
        format!("{APP_NAME} switch <model>").cyan()
    );
    println!(
        "  {}      Auto-select best for {}",
        format!("{APP_NAME} auto --profile {}", profile.name).cyan(),
        profile.name
    );

    Ok(())
}

/// `tada switch` -- set a specific free model as primary (or fallback).
pub(crate) async fn switch(
    model: &str,
    fallback_only: bool,
    no_fallbacks: bool,
    setup_auth: bool,
    profile_name: &str,
) -> Result<()> {
    let api_key = require_api_key()?;

    // Validate the model exists in the free list; partial matches resolve
    // to the highest-ranked hit.
    let models = catalog::free_models(&api_key, false, profile_name).await;
    let needle = model.to_lowercase();
    let matched = models
        .iter()
        .find(|m| m.model.id == model)
        .or_else(|| {
            models
                .iter()
                .find(|m| m.model.id.to_lowercase().contains(&needle))
        })
        .map(|m| m.model.id.clone());

    let Some(matched) = matched else {
        anyhow::bail!(
            "Model '{model}' not found in the free model list.\n\
             Use '{APP_NAME} list' to see available models."
        );
    };

    if fallback_only {
        println!("Adding to fallbacks: {}", matched.cyan());
    } else {
        println!("Setting as primary: {}", matched.cyan());
    }

    update::apply(
        &matched,
        &UpdateOptions {
            as_primary: !fallback_only,
            add_fallbacks: !no_fallbacks,
            fallback_count: DEFAULT_FALLBACK_COUNT,
            setup_auth,
        },
    )
    .await?;

    let config = openclaw::load_config();
    let primary = openclaw::current_primary(&config).unwrap_or_else(|| "none".to_string());

    if fallback_only {
        println!("{} Added to fallbacks.", "Success!".green().bold());
        println!("Primary model (unchanged): {primary}");
    } else {
        println!("{} OpenClaw config updated.", "Success!".green().bold());
        println!("Primary model: {primary}");
    }

    let fallbacks = openclaw::current_fallbacks(&config);
    if !fallbacks.is_empty() {
        println!("Fallback models ({}):", fallbacks.len());
        for fb in fallbacks.iter().take(5) {
            println!("  - {fb}");
        }
        if fallbacks.len() > 5 {
            println!("  ... and {} more", fallbacks.len() - 5);
        }
    }

    println!();
    println!("Restart OpenClaw for changes to take effect.");
    Ok(())
}

/// `tada auto` -- select the best free model for a profile.
pub(crate) async fn auto(
    fallback_count: usize,
    fallback_only: bool,
    setup_auth: bool,
    profile_name: &str,
) -> Result<()> {
    let api_key = require_api_key()?;
    let profile = profile::resolve(profile_name);

    let config = openclaw::load_config();
    let current_primary = openclaw::current_primary(&config);

    println!("Finding best free model for '{}' profile...", profile.name);
    println!("  {}", profile.description.dimmed());

    let models = catalog::free_models(&api_key, true, profile.name).await;

    let Some(best) = ranking::auto_pick(&models) else {
        anyhow::bail!("No free models available.");
    };

    let model_id = best.model.id.clone();

    if fallback_only {
        println!();
        println!("Keeping current primary, adding fallbacks only.");
        println!(
            "Best available: {} (Tier {}, score: {:.3})",
            model_id.cyan(),
            best.tier.label(),
            best.score
        );
    } else {
        if let Some(ref current) = current_primary {
            println!();
            println!("Replacing current primary: {current}");
        }
        println!();
        println!(
            "Best free model for '{}': {}",
            profile.name,
            model_id.cyan().bold()
        );
        println!("  Tier: {}", best.tier.label());
        println!(
            "  Context: {} tokens",
            output::format_count(best.model.context_length)
        );
        println!("  Score: {:.3}", best.score);
        if best.metadata.size_billions > 0 {
            println!("  Size: {}B parameters", best.metadata.size_billions);
        }
    }

    update::apply(
        &model_id,
        &UpdateOptions {
            as_primary: !fallback_only,
            add_fallbacks: true,
            fallback_count,
            setup_auth,
        },
    )
    .await?;

    let config = openclaw::load_config();
    let primary = openclaw::current_primary(&config).unwrap_or_else(|| "none".to_string());

    println!();
    if fallback_only {
        println!("{}", "Fallbacks configured!".green().bold());
        println!("Primary (unchanged): {primary}");
        println!("First fallback: openrouter/free (smart router - auto-selects best available)");
    } else {
        println!("{}", "OpenClaw config updated!".green().bold());
        println!("Primary: {primary}");
    }

    let fallbacks = openclaw::current_fallbacks(&config);
    if !fallbacks.is_empty() {
        println!("Fallbacks ({}):", fallbacks.len());
        for fb in &fallbacks {
            println!("  - {fb}");
        }
    }

    println!();
    println!("Restart OpenClaw for changes to take effect.");
    Ok(())
}

/// `tada status` -- current configuration report.
pub(crate) fn status() -> Result<()> {
    let api_key = openclaw::api_key();
    let config = openclaw::load_config();
    let current = openclaw::current_primary(&config);
    let fallbacks = openclaw::current_fallbacks(&config);

    println!("{}", format!("{APP_NAME} status").bold());
    println!("{}", "=".repeat(50));

    match api_key {
        Some(key) => println!("OpenRouter API key: {}", output::mask_key(&key)),
        None => {
            println!("OpenRouter API key: {}", "NOT SET".red().bold());
            println!("  Set with: export OPENROUTER_API_KEY='sk-or-...'");
        }
    }

    if openclaw::has_auth_profile(&config) {
        println!("OpenRouter auth profile: {}", "Configured".green());
    } else {
        println!("OpenRouter auth profile: Not set (use --setup-auth to add)");
    }

    println!();
    println!(
        "Primary model: {}",
        current.as_deref().unwrap_or("Not configured")
    );

    if fallbacks.is_empty() {
        println!("Fallback models: None configured");
    } else {
        println!("Fallback models ({}):", fallbacks.len());
        for fb in &fallbacks {
            println!("  - {fb}");
        }
    }

    println!();
    match catalog::cache::inspect() {
        Some((count, age)) => {
            let hours = age.num_hours();
            let mins = (age.num_minutes() - hours * 60).max(0);
            println!("Model cache: {count} models (updated {hours}h {mins}m ago)");
        }
        None => println!("Model cache: Not created yet"),
    }

    if let Ok(path) = openclaw::config_path() {
        println!();
        println!("OpenClaw config: {}", path.display());
        println!("  Exists: {}", if path.exists() { "Yes" } else { "No" });
    }

    Ok(())
}

/// `tada refresh` -- force-refresh the model cache.
pub(crate) async fn refresh() -> Result<()> {
    let api_key = require_api_key()?;

    println!("Refreshing free models cache...");
    let models = catalog::free_models(&api_key, true, profile::DEFAULT_PROFILE).await;
    println!("Cached {} free models.", models.len());
    println!("Cache expires in {CACHE_MAX_AGE_HOURS} hours.");
    Ok(())
}

/// `tada fallbacks` -- rebuild the fallback list around the current primary.
pub(crate) async fn fallbacks(count: usize, profile_name: &str) -> Result<()> {
    let api_key = require_api_key()?;
    let profile = profile::resolve(profile_name);

    let mut config = openclaw::load_config();
    let current = openclaw::current_primary(&config);

    if current.is_none() {
        println!("{} No primary model configured.", "warning:".yellow());
        println!("Fallbacks will still be added.");
    }

    println!("Current primary: {}", current.as_deref().unwrap_or("None"));
    println!(
        "Setting up {} fallback models (ranked for '{}')...",
        count, profile.name
    );

    let models = catalog::free_models(&api_key, false, profile.name).await;
    update::ensure_structure(&mut config);

    let fallbacks = update::build_standalone_fallbacks(&models, current.as_deref(), count);
    for fb in &fallbacks {
        update::register_model(&mut config, fb);
    }
    update::set_fallbacks(&mut config, &fallbacks);
    openclaw::save_config(&config)?;

    println!();
    println!("Configured {} fallback models:", fallbacks.len());
    for (i, fb) in fallbacks.iter().enumerate() {
        println!("  {}. {fb}", i + 1);
    }

    println!();
    println!("When rate limited, OpenClaw will automatically try these models.");
    println!("Restart OpenClaw for changes to take effect.");
    Ok(())
}

/// `tada benchmarks` -- show the embedded classification rules.
pub(crate) fn benchmarks() -> Result<()> {
    let rules = RuleSet::builtin();

    if rules.tiers.is_empty() && rules.category_boosts.is_empty() {
        anyhow::bail!("Classification rules missing or invalid.");
    }

    println!("{}", format!("{APP_NAME} benchmark data").bold());
    println!("{}", "=".repeat(60));
    println!("Version: {}", rules.version);
    println!("Last updated: {}", rules.last_updated);
    println!("Description: {}", rules.description);

    println!();
    println!("Quality tiers:");
    for tier in TIER_ORDER {
        let Some(rules_for_tier) = rules.tiers.get(tier.label()) else {
            continue;
        };
        println!();
        println!(
            "  Tier {} (score: {}):",
            tier.label().bold(),
            rules_for_tier.score
        );
        println!("    {}", rules_for_tier.description);
        if !rules_for_tier.patterns.is_empty() {
            let shown: Vec<&str> = rules_for_tier
                .patterns
                .iter()
                .take(5)
                .map(String::as_str)
                .collect();
            println!("    Patterns: {}", shown.join(", "));
            if rules_for_tier.patterns.len() > 5 {
                println!(
                    "              ... and {} more",
                    rules_for_tier.patterns.len() - 5
                );
            }
        }
    }

    println!();
    println!("Category boosts:");
    for (name, boost) in &rules.category_boosts {
        let shown: Vec<&str> = boost.patterns.iter().take(3).map(String::as_str).collect();
        println!("  {}: {}x boost", name, boost.boost);
        println!("    Patterns: {}", shown.join(", "));
    }

    println!();
    println!("Routers (skipped when auto-selecting a primary):");
    for pattern in &rules.routers.patterns {
        println!("  - {pattern}");
    }

    Ok(())
}
