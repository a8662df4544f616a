//! Classification rules for model identifiers.
//!
//! A versioned pattern document (tiers, category boosts, router markers) is
//! embedded at compile time and parsed once on first use. The matching engine
//! is pure substring search, so it stays testable independently of the
//! shipped patterns: every query takes `&self`, and tests construct their own
//! rule sets from JSON strings.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::constants::UNKNOWN_TIER_SCORE;

/// Quality tier assigned to a model identifier.
///
/// `S` is best, `C` worst; `Unknown` means no tier pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    S,
    A,
    B,
    C,
    Unknown,
}

/// Tier matching order. Strict priority: a model matching patterns in
/// several tiers takes the first one here.
pub const TIER_ORDER: [Tier; 4] = [Tier::S, Tier::A, Tier::B, Tier::C];

impl Tier {
    /// Short label used in tables and as the key into the rule document.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::Unknown => "unknown",
        }
    }

    /// Fixed benchmark score for this tier.
    pub fn score(&self) -> f64 {
        match self {
            Tier::S => 1.0,
            Tier::A => 0.8,
            Tier::B => 0.6,
            Tier::C => 0.4,
            Tier::Unknown => UNKNOWN_TIER_SCORE,
        }
    }
}

/// Parsed classification rule document.
///
/// Defaults to empty on any parse failure, which classifies every model as
/// [`Tier::Unknown`] with no boosts and no routers instead of failing the run.
#[derive(Debug, Default, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub description: String,
    /// Tier label ("S".."C") to its rules.
    #[serde(default)]
    pub tiers: HashMap<String, TierRules>,
    /// Category name ("coding", ...) to its boost rules. Ordered so the
    /// `benchmarks` listing is stable.
    #[serde(default)]
    pub category_boosts: BTreeMap<String, CategoryBoost>,
    #[serde(default)]
    pub routers: RouterRules,
}

/// Patterns and descriptive score for one tier.
#[derive(Debug, Default, Deserialize)]
pub struct TierRules {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Multiplicative boost and membership patterns for one category.
#[derive(Debug, Deserialize)]
pub struct CategoryBoost {
    #[serde(default = "default_boost")]
    pub boost: f64,
    #[serde(default)]
    pub patterns: Vec<String>,
}

fn default_boost() -> f64 {
    1.0
}

/// Patterns identifying router/meta-models.
#[derive(Debug, Default, Deserialize)]
pub struct RouterRules {
    #[serde(default)]
    pub patterns: Vec<String>,
}

static RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::from_json(include_str!("rules.json")));

impl RuleSet {
    /// The embedded rule document, parsed once per process.
    pub fn builtin() -> &'static RuleSet {
        &RULES
    }

    /// Parses a rule document, degrading to an empty set on malformed input.
    pub fn from_json(json: &str) -> RuleSet {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Classifies a model identifier into a tier.
    ///
    /// Case-insensitive substring search over each tier's patterns in
    /// [`TIER_ORDER`]; first tier with any match wins.
    pub fn tier_of(&self, model_id: &str) -> Tier {
        let id = model_id.to_lowercase();
        for tier in TIER_ORDER {
            if let Some(rules) = self.tiers.get(tier.label()) {
                if contains_any(&id, &rules.patterns) {
                    return tier;
                }
            }
        }
        Tier::Unknown
    }

    /// Whether a model identifier matches a category's patterns.
    /// Unknown categories never match.
    pub fn matches_boost(&self, model_id: &str, category: &str) -> bool {
        let id = model_id.to_lowercase();
        self.category_boosts
            .get(category)
            .is_some_and(|c| contains_any(&id, &c.patterns))
    }

    /// Boost multiplier for a category, `1.0` when the category is unknown.
    pub fn boost_factor(&self, category: &str) -> f64 {
        self.category_boosts
            .get(category)
            .map(|c| c.boost)
            .unwrap_or(1.0)
    }

    /// Whether a model identifier names a router/meta-model.
    pub fn is_router(&self, model_id: &str) -> bool {
        let id = model_id.to_lowercase();
        contains_any(&id, &self.routers.patterns)
    }
}

/// Case-insensitive substring test. `haystack` must already be lower-cased.
fn contains_any(haystack: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|p| haystack.contains(&p.to_lowercase()))
}
