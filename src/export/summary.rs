//! Plain-text detection summary for sharing

use chrono::{DateTime, FixedOffset, Utc};

use crate::analytics::calculator::most_recent;
use crate::analytics::HistoryStats;
use crate::models::{confidence_to_percent, DetectionRecord};

use super::ExportFormat;

const FOOTER: &str = "Generated by SoundAware - AI-Powered Sound Detection App";

/// Builds the share summary: date header, statistics block and the most
/// recent detections
///
/// Malformed date patterns fall back to the default ones.
pub fn to_summary_text(
    records: &[DetectionRecord],
    stats: &HistoryStats,
    now: DateTime<Utc>,
    format: &ExportFormat,
    offset: FixedOffset,
) -> String {
    let fallback;
    let format = match format.validate() {
        Ok(()) => format,
        Err(e) => {
            tracing::warn!("[export] using default timestamp patterns: {}", e);
            fallback = ExportFormat {
                recent_limit: format.recent_limit,
                ..ExportFormat::default()
            };
            &fallback
        }
    };

    let date = now.with_timezone(&offset).format(&format.date_format);
    let most_common = stats.most_common.as_deref().unwrap_or("None");

    let mut lines = vec![
        format!("🔊 SoundAware Detection Summary - {}", date),
        String::new(),
        "📊 Statistics:".to_string(),
        format!("• Total Detections: {}", stats.total_detections),
        format!(
            "• Average Confidence: {}%",
            confidence_to_percent(stats.avg_confidence)
        ),
        format!("• Most Common Sound: {}", most_common),
        String::new(),
        "📋 Recent Detections:".to_string(),
    ];

    for record in most_recent(records, format.recent_limit) {
        lines.push(format!(
            "• {} ({}%) - {}",
            record.sound_type,
            record.confidence_percent(),
            record
                .timestamp
                .with_timezone(&offset)
                .format(&format.datetime_format)
        ));
    }

    lines.push(String::new());
    lines.push(FOOTER.to_string());
    lines.join("\n")
}

/// `SoundAware_Summary_YYYY-MM-DD.txt`
pub fn summary_file_name(now: DateTime<Utc>) -> String {
    format!("SoundAware_Summary_{}.txt", now.format("%Y-%m-%d"))
}
