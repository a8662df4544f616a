use super::*;
use crate::model::ModelRecord;
use chrono::{Duration, Utc};
use serde_json::json;

fn record(v: serde_json::Value) -> ModelRecord {
    serde_json::from_value(v).expect("valid test record")
}

#[test]
fn filter_keeps_zero_price_and_free_marker() {
    let models = vec![
        record(json!({"id": "a", "pricing": {"prompt": "0"}})),
        record(json!({"id": "b:free", "pricing": {"prompt": "0.002"}})),
    ];
    let free = filter::filter_free(models);
    assert_eq!(free.len(), 2);
    assert_eq!(free[0].id, "a");
    assert_eq!(free[1].id, "b:free");
}

#[test]
fn filter_drops_paid_models() {
    let models = vec![
        record(json!({"id": "vendor/paid", "pricing": {"prompt": "0.000001"}})),
        record(json!({"id": "vendor/also-paid", "pricing": {"prompt": 0.5}})),
    ];
    assert!(filter::filter_free(models).is_empty());
}

#[test]
fn filter_tolerates_missing_or_malformed_pricing() {
    let models = vec![
        // No pricing at all: only the marker rule can admit it.
        record(json!({"id": "vendor/unpriced"})),
        record(json!({"id": "vendor/unpriced:free"})),
        // Garbage price string never qualifies via the price rule.
        record(json!({"id": "vendor/garbage", "pricing": {"prompt": "n/a"}})),
        // Numeric zero qualifies.
        record(json!({"id": "vendor/zero", "pricing": {"prompt": 0}})),
    ];
    let free = filter::filter_free(models);
    let ids: Vec<&str> = free.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["vendor/unpriced:free", "vendor/zero"]);
}

#[test]
fn snapshot_round_trips_unknown_catalog_keys() {
    let snapshot = cache::CacheSnapshot {
        cached_at: Utc::now().to_rfc3339(),
        models: vec![record(json!({
            "id": "vendor/m:free",
            "context_length": 32_000,
            "pricing": {"prompt": "0", "completion": "0"},
            "per_request_limits": {"prompt_tokens": "unlimited"},
        }))],
    };
    let json = serde_json::to_string(&snapshot).expect("serializable");
    let restored: cache::CacheSnapshot = serde_json::from_str(&json).expect("parseable");
    assert_eq!(restored.models[0].id, "vendor/m:free");
    assert_eq!(restored.models[0].pricing.extra["completion"], json!("0"));
    assert_eq!(
        restored.models[0].extra["per_request_limits"]["prompt_tokens"],
        json!("unlimited")
    );
}

#[test]
fn freshness_window_is_six_hours() {
    let recent = (Utc::now() - Duration::hours(1)).to_rfc3339();
    assert!(cache::is_fresh(&recent));

    let stale = (Utc::now() - Duration::hours(7)).to_rfc3339();
    assert!(!cache::is_fresh(&stale));

    assert!(!cache::is_fresh("not a timestamp"));
    assert!(!cache::is_fresh(""));
}
