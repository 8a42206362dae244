//! Export formatter tests

use super::*;
use crate::analytics::calculator::compute_history_stats;
use crate::analytics::HistoryStats;
use crate::models::DetectionRecord;
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

fn record(sound_type: &str, confidence: f64, duration: f64, minutes_ago: i64) -> DetectionRecord {
    DetectionRecord::new(sound_type, confidence, duration, now() - Duration::minutes(minutes_ago))
}

// ===== CSV Tests =====

#[test]
fn test_csv_header_only_when_empty() {
    let csv = to_csv(&[], &ExportFormat::default(), utc()).unwrap();
    assert_eq!(csv, "Date,Time,Sound Type,Confidence (%),Duration (seconds)\n");
}

#[test]
fn test_csv_row_format() {
    let records = vec![
        record("dog_barking_speech", 0.876, 2.0, 0),
        record("doorbell_speech", 0.3, 1.5, 90),
    ];
    let csv = to_csv(&records, &ExportFormat::default(), utc()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], r#""2024-01-15","12:00:00","dog_barking_speech",88,2"#);
    assert_eq!(lines[2], r#""2024-01-15","10:30:00","doorbell_speech",30,1.5"#);
}

#[test]
fn test_csv_keeps_input_order_and_applies_offset() {
    let records = vec![record("slam_speech", 0.5, 1.0, 60), record("drill_speech", 0.5, 1.0, 0)];
    let offset = FixedOffset::east_opt(12 * 3600).unwrap();
    let csv = to_csv(&records, &ExportFormat::default(), offset).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert!(lines[1].starts_with(r#""2024-01-15","23:00:00","slam_speech""#));
    assert!(lines[2].starts_with(r#""2024-01-16","00:00:00","drill_speech""#));
}

#[test]
fn test_csv_escapes_quotes_and_clamps_values() {
    let negative = record(r#"weird "label""#, 1.7, -3.0, 0);
    let mut not_a_number = record("slam_speech", -0.2, 1.0, 0);
    not_a_number.duration = f64::NAN;
    let csv = to_csv(&[negative, not_a_number], &ExportFormat::default(), utc()).unwrap();
    let rows: Vec<&str> = csv.lines().skip(1).collect();

    assert!(rows[0].contains(r#""weird ""label""""#));
    assert!(rows[0].ends_with(",100,0"));
    assert!(rows[1].ends_with(",0,0"));
}

#[test]
fn test_csv_quotes_digit_only_columns() {
    let format = ExportFormat {
        date_format: "%Y%m%d".to_string(),
        time_format: "%H%M".to_string(),
        ..ExportFormat::default()
    };
    let records = vec![record("dog_barking_speech", 0.876, 2.0, 0), record("123", 0.5, 1.0, 0)];
    let csv = to_csv(&records, &format, utc()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[1], r#""20240115","1200","dog_barking_speech",88,2"#);
    assert_eq!(lines[2], r#""20240115","1200","123",50,1"#);
}

#[test]
fn test_csv_rejects_malformed_pattern() {
    let format = ExportFormat {
        date_format: "%Q".to_string(),
        ..ExportFormat::default()
    };
    let err = to_csv(&[record("slam_speech", 0.5, 1.0, 0)], &format, utc()).unwrap_err();
    assert_eq!(err.code(), "INVALID_CONFIG");
    assert!(err.to_string().contains("export.date_format"));
}

#[test]
fn test_export_format_validate() {
    assert!(ExportFormat::default().validate().is_ok());

    let format = ExportFormat {
        datetime_format: "%Y-%m-%d %".to_string(),
        ..ExportFormat::default()
    };
    assert!(format.validate().is_err());
}

#[test]
fn test_csv_round_trip() {
    let records: Vec<DetectionRecord> = (0..25)
        .map(|i| record("cough_speech", i as f64 / 24.0, 1.0, i))
        .collect();
    let csv = to_csv(&records, &ExportFormat::default(), utc()).unwrap();

    let mut reader = ::csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

    let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), records.len());
    for row in &rows {
        let confidence: u32 = row[3].parse().unwrap();
        assert!(confidence <= 100);
        assert_eq!(&row[2], "cough_speech");
    }
}

#[test]
fn test_csv_file_name() {
    assert_eq!(csv_file_name(now()), "SoundAware_Detections_2024-01-15.csv");
}

// ===== Summary Tests =====

#[test]
fn test_summary_text() {
    let records = vec![
        record("doorbell_speech", 0.3, 1.0, 30),
        record("dog_barking_speech", 0.9, 1.0, 5),
        record("dog_barking_speech", 0.5, 1.0, 10),
    ];
    let stats = compute_history_stats(&records);
    let text = to_summary_text(&records, &stats, now(), &ExportFormat::default(), utc());

    let expected = "🔊 SoundAware Detection Summary - 2024-01-15\n\
\n\
📊 Statistics:\n\
• Total Detections: 3\n\
• Average Confidence: 57%\n\
• Most Common Sound: dog_barking_speech\n\
\n\
📋 Recent Detections:\n\
• dog_barking_speech (90%) - 2024-01-15 11:55:00\n\
• dog_barking_speech (50%) - 2024-01-15 11:50:00\n\
• doorbell_speech (30%) - 2024-01-15 11:30:00\n\
\n\
Generated by SoundAware - AI-Powered Sound Detection App";
    assert_eq!(text, expected);
}

#[test]
fn test_summary_lists_at_most_five() {
    let records: Vec<DetectionRecord> = (0..8)
        .map(|i| record("slam_speech", 0.5, 1.0, i))
        .collect();
    let stats = compute_history_stats(&records);
    let text = to_summary_text(&records, &stats, now(), &ExportFormat::default(), utc());

    let listed = text.lines().filter(|l| l.starts_with("• slam_speech (")).count();
    assert_eq!(listed, 5);
}

#[test]
fn test_summary_falls_back_on_malformed_pattern() {
    let records = vec![record("cough_speech", 0.8, 1.0, 5)];
    let stats = compute_history_stats(&records);
    let format = ExportFormat {
        date_format: "%Q".to_string(),
        datetime_format: "%Q %H".to_string(),
        recent_limit: 1,
        ..ExportFormat::default()
    };
    let text = to_summary_text(&records, &stats, now(), &format, utc());

    assert!(text.starts_with("🔊 SoundAware Detection Summary - 2024-01-15\n"));
    assert!(text.contains("• cough_speech (80%) - 2024-01-15 11:55:00\n"));
}

#[test]
fn test_summary_empty() {
    let text = to_summary_text(&[], &HistoryStats::default(), now(), &ExportFormat::default(), utc());

    assert!(text.contains("• Total Detections: 0"));
    assert!(text.contains("• Average Confidence: 0%"));
    assert!(text.contains("• Most Common Sound: None"));
    assert!(text.ends_with("Generated by SoundAware - AI-Powered Sound Detection App"));
}

#[test]
fn test_summary_file_name() {
    assert_eq!(summary_file_name(now()), "SoundAware_Summary_2024-01-15.txt");
}
