//! Centralized constants for tada.
//!
//! All magic numbers, default strings, and scoring constants live here
//! so they can be changed in one place.

/// Application name used in CLI output.
pub const APP_NAME: &str = "tada";

/// OpenRouter models-listing endpoint.
pub const OPENROUTER_MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

/// Environment variable holding the OpenRouter API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Timeout for the catalog fetch, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// --- OpenClaw paths ---

/// Directory under the user's home that holds OpenClaw state.
pub const OPENCLAW_DIR: &str = ".openclaw";

/// OpenClaw configuration filename inside [`OPENCLAW_DIR`].
pub const OPENCLAW_CONFIG_FILENAME: &str = "openclaw.json";

/// Model-cache filename inside [`OPENCLAW_DIR`].
pub const CACHE_FILENAME: &str = ".tada-cache.json";

/// Hours a cache snapshot stays fresh.
pub const CACHE_MAX_AGE_HOURS: i64 = 6;

// --- Model identifiers ---

/// Routing prefix OpenClaw expects in front of every catalog identifier.
pub const ROUTING_PREFIX: &str = "openrouter/";

/// The smart-router meta-model as the catalog reports it.
pub const SMART_ROUTER_ID: &str = "openrouter/free";

/// Identifier marker for free-tier model variants.
pub const FREE_MARKER: &str = ":free";

/// Auth profile key written by `--setup-auth`.
pub const AUTH_PROFILE_KEY: &str = "openrouter:default";

// --- CLI defaults ---

/// Default number of rows shown by `tada list`.
pub const DEFAULT_LIST_LIMIT: usize = 15;

/// Default number of fallback models configured.
pub const DEFAULT_FALLBACK_COUNT: usize = 5;

// --- Scoring ---

/// Parameter count (billions) at which the size score saturates.
pub const SIZE_CEILING_BILLIONS: f64 = 70.0;

/// Size score assigned when no parameter count is detectable.
pub const DEFAULT_SIZE_SCORE: f64 = 0.3;

/// Context length (tokens) at which the context score saturates.
pub const CONTEXT_CEILING_TOKENS: f64 = 256_000.0;

/// Tier score for models matching no tier pattern.
pub const UNKNOWN_TIER_SCORE: f64 = 0.3;

/// Multiplier applied when a profile prefers tools and the model has them.
pub const TOOL_BONUS: f64 = 1.05;

/// Multiplier applied when a profile requires vision and the model lacks it.
pub const MISSING_VISION_PENALTY: f64 = 0.1;

/// Multiplier applied when a model's context is below the profile minimum.
pub const LOW_CONTEXT_PENALTY: f64 = 0.8;
