use super::*;
use crate::model::ModelRecord;
use serde_json::json;

fn record(v: serde_json::Value) -> ModelRecord {
    serde_json::from_value(v).expect("valid test record")
}

fn free_model(id: &str, context_length: u64) -> ModelRecord {
    record(json!({
        "id": id,
        "context_length": context_length,
        "pricing": {"prompt": "0"},
    }))
}

#[test]
fn tier_priority_s_wins_over_c() {
    let rules = RuleSet::from_json(
        r#"{
            "tiers": {
                "S": {"patterns": ["shared-name"]},
                "C": {"patterns": ["shared-name"]}
            }
        }"#,
    );
    assert_eq!(rules.tier_of("vendor/shared-name-9b:free"), Tier::S);
}

#[test]
fn tier_unknown_when_nothing_matches() {
    let rules = RuleSet::from_json(r#"{"tiers": {"S": {"patterns": ["alpha"]}}}"#);
    assert_eq!(rules.tier_of("vendor/beta"), Tier::Unknown);
    assert_eq!(rules.tier_of("vendor/beta").score(), 0.3);
}

#[test]
fn malformed_rules_degrade_to_empty() {
    let rules = RuleSet::from_json("{ this is not json");
    assert_eq!(rules.tier_of("deepseek/deepseek-r1:free"), Tier::Unknown);
    assert!(!rules.matches_boost("qwen/qwen3-coder:free", "coding"));
    assert_eq!(rules.boost_factor("coding"), 1.0);
    assert!(!rules.is_router("openrouter/auto"));
}

#[test]
fn tier_scores_are_fixed() {
    assert_eq!(Tier::S.score(), 1.0);
    assert_eq!(Tier::A.score(), 0.8);
    assert_eq!(Tier::B.score(), 0.6);
    assert_eq!(Tier::C.score(), 0.4);
    assert_eq!(Tier::Unknown.score(), 0.3);
}

#[test]
fn size_parsed_from_identifier_and_name() {
    let meta = ModelMetadata::extract(&record(json!({
        "id": "meta-llama/llama-3.3-70b-instruct:free",
    })));
    assert_eq!(meta.size_billions, 70);
    assert_eq!(meta.size_score, 1.0);

    // Size only present in the display name.
    let meta = ModelMetadata::extract(&record(json!({
        "id": "vendor/mystery-model",
        "name": "Mystery 14B Instruct",
    })));
    assert_eq!(meta.size_billions, 14);

    // No detectable size is middling, not zero.
    let meta = ModelMetadata::extract(&record(json!({"id": "vendor/mystery-model"})));
    assert_eq!(meta.size_billions, 0);
    assert_eq!(meta.size_score, 0.3);
}

#[test]
fn context_score_is_monotonic_and_capped() {
    let score_at = |len: u64| {
        ModelMetadata::extract(&record(json!({
            "id": "vendor/m",
            "context_length": len,
        })))
        .context_score
    };
    assert!(score_at(8_000) < score_at(128_000));
    assert_eq!(score_at(256_000), 1.0);
    assert_eq!(score_at(2_000_000), 1.0);
}

#[test]
fn capability_score_counts_features() {
    let meta = ModelMetadata::extract(&record(json!({
        "id": "vendor/m",
        "supported_parameters": ["tools", "response_format", "structured_outputs"],
    })));
    assert!(meta.has_tools);
    assert_eq!(meta.capability_score, 3.0 / 5.0);

    // Null supported_parameters is tolerated.
    let meta = ModelMetadata::extract(&record(json!({
        "id": "vendor/m",
        "supported_parameters": null,
    })));
    assert!(!meta.has_tools);
    assert_eq!(meta.capability_score, 0.0);
}

#[test]
fn score_is_deterministic() {
    let model = record(json!({
        "id": "qwen/qwen3-coder:free",
        "context_length": 128_000,
        "supported_parameters": ["tools"],
    }));
    let profile = profile::resolve("coding");
    let rules = RuleSet::builtin();
    let a = score::score(&model, profile, rules);
    let b = score::score(&model, profile, rules);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn coding_model_scores_higher_under_coding_than_vision() {
    let model = free_model("qwen/qwen3-coder:free", 128_000);
    let rules = RuleSet::builtin();
    let coding = score::score(&model, profile::resolve("coding"), rules);
    let vision = score::score(&model, profile::resolve("vision"), rules);
    assert!(coding > vision);
}

#[test]
fn low_context_is_penalized() {
    let rules = RuleSet::from_json("{}");
    let profile = profile::resolve("coding");
    let short = score::score(&free_model("vendor/m", 16_000), profile, &rules);

    // Expected value mirrors the scoring pipeline: weighted base, then the
    // below-minimum-context multiplier. No boost or bonus applies here.
    let expected = (0.3 * 0.35 + 0.3 * 0.25 + (16_000.0 / 256_000.0) * 0.25 + 0.0 * 0.15) * 0.8;
    assert_eq!(short, expected);

    let long = score::score(&free_model("vendor/m", 64_000), profile, &rules);
    assert!(short < long);
}

#[test]
fn tool_support_helps_when_preferred() {
    let with_tools = record(json!({
        "id": "vendor/m",
        "context_length": 32_000,
        "supported_parameters": ["tools"],
    }));
    let without = record(json!({
        "id": "vendor/m",
        "context_length": 32_000,
        "supported_parameters": [],
    }));
    let rules = RuleSet::from_json("{}");
    let profile = profile::resolve("general");
    assert!(score::score(&with_tools, profile, &rules) > score::score(&without, profile, &rules));
}

#[test]
fn boost_falls_back_to_patterns_when_flag_is_false() {
    // "devstral" carries no coding flag marker, only a boost pattern.
    let rules = RuleSet::from_json(
        r#"{"category_boosts": {"coding": {"boost": 2.0, "patterns": ["devstral"]}}}"#,
    );
    let bare = RuleSet::from_json("{}");
    let model = free_model("mistralai/devstral-small:free", 128_000);
    let profile = profile::resolve("coding");
    assert!(score::score(&model, profile, &rules) > score::score(&model, profile, &bare));
}

#[test]
fn rank_is_sorted_descending() {
    let models = vec![
        free_model("vendor/tiny-1b", 8_000),
        free_model("deepseek/deepseek-r1:free", 164_000),
        free_model("meta-llama/llama-3.3-70b-instruct:free", 131_000),
    ];
    let ranked = rank(models, "general");
    assert_eq!(ranked.len(), 3);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn equal_scores_keep_catalog_order() {
    let models = vec![
        free_model("vendor/twin-one", 32_000),
        free_model("vendor/twin-two", 32_000),
    ];
    let ranked = rank_with(models, "general", &RuleSet::from_json("{}"));
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].model.id, "vendor/twin-one");
    assert_eq!(ranked[1].model.id, "vendor/twin-two");
}

#[test]
fn unknown_profile_falls_back_to_default() {
    assert_eq!(profile::resolve("nonexistent").name, "general");
    assert_eq!(profile::resolve("").name, "general");
}

#[test]
fn profile_names_are_ordered() {
    assert_eq!(
        profile::valid_names(),
        vec!["coding", "reasoning", "general", "vision"]
    );
}

#[test]
fn auto_pick_skips_routers() {
    let models = vec![
        free_model("openrouter/free", 2_000_000),
        free_model("deepseek/deepseek-r1:free", 164_000),
    ];
    let ranked = rank(models, "general");
    let pick = auto_pick(&ranked).expect("non-empty ranking");
    assert!(!pick.is_router);
    assert_eq!(pick.model.id, "deepseek/deepseek-r1:free");

    // All routers: fall back to the top entry.
    let routers = rank(vec![free_model("openrouter/free", 2_000_000)], "general");
    assert!(auto_pick(&routers).expect("non-empty").is_router);
}

#[test]
fn vision_requirement_penalizes_text_models() {
    let text_only = free_model("vendor/plain-32b", 64_000);
    let multimodal = record(json!({
        "id": "vendor/plain-vl-32b",
        "context_length": 64_000,
        "pricing": {"prompt": "0"},
        "architecture": {"input_modalities": ["text", "image"]},
    }));
    let rules = RuleSet::from_json("{}");
    let profile = profile::resolve("vision");
    let penalized = score::score(&text_only, profile, &rules);
    let kept = score::score(&multimodal, profile, &rules);
    assert!(penalized < kept);
}
