//! Unit tests for analytics types

use super::*;

// ===== Surge Tests =====

#[test]
fn test_surge_default() {
    assert_eq!(Surge::default(), Surge::Percent(0));
}

#[test]
fn test_surge_display() {
    assert_eq!(Surge::Percent(42).to_string(), "42%");
    assert_eq!(Surge::Percent(-17).to_string(), "-17%");
    assert_eq!(Surge::Unbounded.to_string(), "New");
}

#[test]
fn test_surge_legacy_value() {
    assert_eq!(Surge::Percent(-3).legacy_value(), -3);
    assert_eq!(Surge::Unbounded.legacy_value(), SURGE_UNBOUNDED_SENTINEL);
}

#[test]
fn test_surge_exceeds() {
    assert!(Surge::Unbounded.exceeds(50));
    assert!(Surge::Percent(51).exceeds(50));
    assert!(!Surge::Percent(50).exceeds(50));
}

#[test]
fn test_surge_serialization() {
    let json = serde_json::to_string(&Surge::Unbounded).unwrap();
    assert_eq!(json, r#""unbounded""#);

    let json = serde_json::to_string(&Surge::Percent(25)).unwrap();
    assert_eq!(json, r#"{"percent":25}"#);

    let back: Surge = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Surge::Percent(25));
}

// ===== Config Tests =====

#[test]
fn test_stats_config_default() {
    let config = StatsConfig::default();
    assert_eq!(config.window_minutes, 30);
    assert_eq!(config.bucket_count, 30);
    assert_eq!(config.surge_recent_buckets, 5);
    assert_eq!(config.rarity_threshold, 2);
    assert_eq!(config.confidence_bucket_count, 5);
    assert_eq!(config.confidence_sample_limit, 200);
}

#[test]
fn test_stats_config_partial_deserialization() {
    let config: StatsConfig = serde_json::from_str(r#"{"window_minutes": 60}"#).unwrap();
    assert_eq!(config.window_minutes, 60);
    assert_eq!(config.bucket_count, 30);
}

#[test]
fn test_dashboard_config_default() {
    let config = DashboardConfig::default();
    assert_eq!(config.rate_window_minutes, 5);
    assert_eq!(config.sparkline_buckets, 12);
    assert_eq!(config.confidence_trend_sample, 10);
    assert_eq!(config.top_sounds_limit, 3);
}

// ===== Aggregate Tests =====

#[test]
fn test_advanced_stats_default() {
    let stats = AdvancedStats::default();
    assert!(stats.rate_series.is_empty());
    assert_eq!(stats.entropy, 0.0);
    assert_eq!(stats.rare_count, 0);
    assert!(stats.confidence_buckets.is_empty());
    assert_eq!(stats.surge, Surge::Percent(0));
}

#[test]
fn test_history_stats_serialization() {
    let stats = HistoryStats {
        total_detections: 3,
        avg_confidence: 0.5,
        most_common: Some("doorbell_speech".to_string()),
    };
    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains(r#""total_detections":3"#));
    assert!(json.contains(r#""most_common":"doorbell_speech""#));
}
