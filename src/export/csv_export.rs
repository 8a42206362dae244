//! CSV export of detection history

use chrono::{DateTime, FixedOffset, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::InsightsError;
use crate::models::DetectionRecord;

use super::ExportFormat;

/// Column headers, in column order
pub const CSV_HEADER: [&str; 5] = [
    "Date",
    "Time",
    "Sound Type",
    "Confidence (%)",
    "Duration (seconds)",
];

fn duration_field(duration: f64) -> String {
    if duration.is_finite() && duration >= 0.0 {
        duration.to_string()
    } else {
        "0".to_string()
    }
}

/// Text column, always quoted with embedded quotes doubled
fn quoted_field(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Renders records as CSV, one row per record in input order
///
/// Date, time and sound type are always quoted, even when a configured
/// pattern renders digits only; confidence is a rounded integer percent and
/// duration a bare number. With no records only the header line is
/// produced. Fails with `InvalidConfig` on a malformed date or time pattern.
pub fn to_csv(
    records: &[DetectionRecord],
    format: &ExportFormat,
    offset: FixedOffset,
) -> Result<String, InsightsError> {
    format.validate()?;

    // Text columns arrive pre-quoted, the writer only joins fields
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for record in records {
        let local = record.timestamp.with_timezone(&offset);
        writer.write_record([
            quoted_field(&local.format(&format.date_format).to_string()),
            quoted_field(&local.format(&format.time_format).to_string()),
            quoted_field(&record.sound_type),
            record.confidence_percent().to_string(),
            duration_field(record.duration),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| InsightsError::internal(e.to_string()))?;
    let csv = String::from_utf8(bytes).map_err(|e| InsightsError::internal(e.to_string()))?;

    tracing::debug!("[export] CSV built with {} rows", records.len());
    Ok(csv)
}

/// `SoundAware_Detections_YYYY-MM-DD.csv`
pub fn csv_file_name(now: DateTime<Utc>) -> String {
    format!("SoundAware_Detections_{}.csv", now.format("%Y-%m-%d"))
}
