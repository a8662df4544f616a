//! Use-case profiles for model ranking.
//!
//! Each profile is an immutable weighting/policy configuration representing a
//! use case. Profiles are compile-time data; lookups by unknown name silently
//! resolve to the default profile rather than erroring, so a ranking is always
//! produced.

/// Linear-combination coefficients for the four scoring factors.
/// They need not sum to 1 -- scores are comparative, not normalized.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub benchmark: f64,
    pub size: f64,
    pub context: f64,
    pub capability: f64,
}

/// A named ranking configuration for one use case.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub description: &'static str,
    pub weights: Weights,
    /// Category boost to apply, keyed into the rule document.
    pub category_boost: Option<&'static str>,
    /// Apply the tool bonus to models with tool support.
    pub prefer_tools: bool,
    /// Heavily penalize models without image input.
    pub require_vision: bool,
    /// Context lengths below this are penalized.
    pub min_context: u64,
}

/// Profile used when no name is given or the name is unknown.
pub const DEFAULT_PROFILE: &str = "general";

/// All predefined profiles, in presentation order.
pub const PROFILES: &[Profile] = &[
    Profile {
        name: "coding",
        description: "Optimized for code generation, completion, and understanding",
        weights: Weights {
            benchmark: 0.35,
            size: 0.25,
            context: 0.25,
            capability: 0.15,
        },
        category_boost: Some("coding"),
        prefer_tools: true,
        require_vision: false,
        min_context: 32_000,
    },
    Profile {
        name: "reasoning",
        description: "Optimized for complex reasoning, analysis, and problem-solving",
        weights: Weights {
            benchmark: 0.40,
            size: 0.30,
            context: 0.20,
            capability: 0.10,
        },
        category_boost: Some("reasoning"),
        prefer_tools: false,
        require_vision: false,
        min_context: 16_000,
    },
    Profile {
        name: "general",
        description: "Balanced profile for general-purpose chat and assistance",
        weights: Weights {
            benchmark: 0.45,
            size: 0.25,
            context: 0.20,
            capability: 0.10,
        },
        category_boost: None,
        prefer_tools: true,
        require_vision: false,
        min_context: 8_000,
    },
    Profile {
        name: "vision",
        description: "Optimized for image understanding and multimodal tasks",
        weights: Weights {
            benchmark: 0.30,
            size: 0.20,
            context: 0.20,
            capability: 0.30,
        },
        category_boost: Some("vision"),
        prefer_tools: false,
        require_vision: true,
        min_context: 8_000,
    },
];

/// Looks up a profile by name, falling back to the default. Never fails.
pub fn resolve(name: &str) -> &'static Profile {
    PROFILES
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| {
            PROFILES
                .iter()
                .find(|p| p.name == DEFAULT_PROFILE)
                .expect("default profile is defined")
        })
}

/// All profile names, in presentation order.
pub fn valid_names() -> Vec<&'static str> {
    PROFILES.iter().map(|p| p.name).collect()
}
