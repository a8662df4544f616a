//! Non-destructive updates to the OpenClaw configuration.
//!
//! Translates a ranked model selection into mutations of the config
//! document: the primary slot, the ordered fallback list, the model
//! allowlist, and optionally the auth profile. Missing intermediate
//! objects are created; everything else in the document is left alone.

use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::catalog;
use crate::constants::{AUTH_PROFILE_KEY, DEFAULT_FALLBACK_COUNT, SMART_ROUTER_ID};
use crate::openclaw::{self, format::format_model_id};
use crate::ranking::profile::DEFAULT_PROFILE;
use crate::ranking::RankedModel;

/// How [`apply`] should treat the selected model.
pub struct UpdateOptions {
    /// Set the model as primary (otherwise it only joins the fallbacks).
    pub as_primary: bool,
    /// Rebuild the fallback list alongside the change.
    pub add_fallbacks: bool,
    /// Number of fallback models to configure.
    pub fallback_count: usize,
    /// Also set up the OpenRouter auth profile.
    pub setup_auth: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            as_primary: true,
            add_fallbacks: true,
            fallback_count: DEFAULT_FALLBACK_COUNT,
            setup_auth: false,
        }
    }
}

/// Updates the OpenClaw config with the given model.
///
/// When fallbacks are requested, the free list is ranked under the default
/// profile and the smart router is seeded as the first fallback unless it
/// is the primary itself.
pub async fn apply(model_id: &str, opts: &UpdateOptions) -> Result<()> {
    let mut config = openclaw::load_config();
    ensure_structure(&mut config);

    if opts.setup_auth {
        setup_auth(&mut config);
    }

    let formatted = format_model_id(model_id);

    if opts.as_primary {
        set_primary(&mut config, &formatted);
        register_model(&mut config, &formatted);
    }

    if opts.add_fallbacks {
        if let Some(api_key) = openclaw::api_key() {
            let free = catalog::free_models(&api_key, false, DEFAULT_PROFILE).await;
            let current = openclaw::current_primary(&config);
            let fallbacks = build_fallbacks(
                &free,
                &formatted,
                opts.as_primary,
                current.as_deref(),
                opts.fallback_count,
            );
            for fb in &fallbacks {
                register_model(&mut config, fb);
            }
            set_fallbacks(&mut config, &fallbacks);
        }
    }

    openclaw::save_config(&config)
}

/// Builds the fallback list for a primary/fallback change.
///
/// The smart router leads unless it is the primary. Entries skip the smart
/// router's catalog record, the model being set, and (in fallback-only
/// mode) the current primary; in fallback-only mode the new model is
/// inserted right after the router.
pub(crate) fn build_fallbacks(
    free: &[RankedModel],
    formatted_model: &str,
    as_primary: bool,
    current_primary: Option<&str>,
    fallback_count: usize,
) -> Vec<String> {
    let router = format_model_id(SMART_ROUTER_ID);
    let mut fallbacks = Vec::new();

    if formatted_model != router {
        fallbacks.push(router.clone());
    }

    for m in free {
        if fallbacks.len() >= fallback_count {
            break;
        }

        let formatted = format_model_id(&m.model.id);

        if m.model.id.contains(SMART_ROUTER_ID) {
            continue;
        }
        if as_primary && formatted == formatted_model {
            continue;
        }
        if !as_primary && Some(formatted.as_str()) == current_primary {
            continue;
        }

        fallbacks.push(formatted);
    }

    if !as_primary && !fallbacks.iter().any(|f| f == formatted_model) {
        let pos = if fallbacks.iter().any(|f| *f == router) {
            1
        } else {
            0
        };
        fallbacks.insert(pos, formatted_model.to_string());
    }

    fallbacks
}

/// Builds a fresh fallback list around the current primary, for the
/// `fallbacks` command. The smart router leads unless it already is the
/// primary.
pub(crate) fn build_standalone_fallbacks(
    free: &[RankedModel],
    current_primary: Option<&str>,
    count: usize,
) -> Vec<String> {
    let router = format_model_id(SMART_ROUTER_ID);
    let mut fallbacks = Vec::new();

    if current_primary != Some(router.as_str()) {
        fallbacks.push(router.clone());
    }

    for m in free {
        let formatted = format_model_id(&m.model.id);

        if Some(formatted.as_str()) == current_primary {
            continue;
        }
        if m.model.id.contains(SMART_ROUTER_ID) {
            continue;
        }
        if fallbacks.len() >= count {
            break;
        }

        fallbacks.push(formatted);
    }

    fallbacks
}

/// Creates the nested `agents.defaults.{model,models}` structure without
/// overwriting existing values.
pub fn ensure_structure(config: &mut Value) {
    let root = as_object(config);
    let agents = ensure_object(root, "agents");
    let defaults = ensure_object(agents, "defaults");
    ensure_object(defaults, "model");
    ensure_object(defaults, "models");
}

/// Inserts the OpenRouter auth profile if it is missing.
pub fn setup_auth(config: &mut Value) {
    let root = as_object(config);
    let auth = ensure_object(root, "auth");
    let profiles = ensure_object(auth, "profiles");

    if !profiles.contains_key(AUTH_PROFILE_KEY) {
        profiles.insert(
            AUTH_PROFILE_KEY.to_string(),
            json!({"provider": "openrouter", "mode": "api_key"}),
        );
        println!("Added OpenRouter auth profile.");
    }
}

/// Registers a formatted model id in the allowlist.
pub fn register_model(config: &mut Value, formatted_id: &str) {
    let root = as_object(config);
    let defaults = ensure_object(ensure_object(root, "agents"), "defaults");
    let models = ensure_object(defaults, "models");
    models.insert(formatted_id.to_string(), json!({}));
}

fn set_primary(config: &mut Value, formatted_id: &str) {
    let root = as_object(config);
    let defaults = ensure_object(ensure_object(root, "agents"), "defaults");
    let model = ensure_object(defaults, "model");
    model.insert("primary".to_string(), json!(formatted_id));
}

pub(crate) fn set_fallbacks(config: &mut Value, fallbacks: &[String]) {
    let root = as_object(config);
    let defaults = ensure_object(ensure_object(root, "agents"), "defaults");
    let model = ensure_object(defaults, "model");
    model.insert("fallbacks".to_string(), json!(fallbacks));
}

/// Views a value as an object, replacing malformed content with an empty one.
fn as_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut().expect("value was just made an object")
}

/// Gets or creates the object at `key` inside `parent`.
fn ensure_object<'a>(parent: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let entry = parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    entry.as_object_mut().expect("entry was just made an object")
}
