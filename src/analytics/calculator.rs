//! Analytics calculation logic
//!
//! Pure functions over a borrowed snapshot of detection records. Windowed
//! functions take the caller's `now` so that every figure derived in one
//! refresh refers to the same instant.

use std::collections::HashMap;

use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::models::{confidence_to_percent, DetectionRecord, SoundType};
use crate::utils::{round_half_up, round_one_decimal};

use super::{
    AdvancedStats, CategoryCount, DashboardStats, HistoryStats, Sparkline, StatsConfig, Surge,
};

const MS_PER_MINUTE: i64 = 60 * 1000;

/// Tallest sparkline bar in points
const SPARK_BAR_MAX: f64 = 36.0;

/// True if the record's age lies in `[0, window_ms]`
fn in_window(record: &DetectionRecord, now: DateTime<Utc>, window_ms: i64) -> bool {
    let age = record.age_ms(now);
    age >= 0 && age <= window_ms
}

/// Counts records per category in first-seen order
///
/// The order is deterministic, which the tie-breaking rules of
/// [`ranked_categories`] and [`most_common_sound_type`] rely on.
pub fn tally_categories<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut tally: Vec<CategoryCount> = Vec::new();

    for record in records {
        match index.get(record.sound_type.as_str()) {
            Some(&i) => tally[i].count += 1,
            None => {
                index.insert(record.sound_type.as_str(), tally.len());
                tally.push(CategoryCount {
                    sound_type: record.sound_type.clone(),
                    count: 1,
                });
            }
        }
    }

    tally
}

/// Categories sorted by descending count; equal counts keep first-seen order
pub fn ranked_categories(records: &[DetectionRecord]) -> Vec<CategoryCount> {
    let mut tally = tally_categories(records);
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

/// Up to `limit` records, newest first. Equal timestamps keep input order.
pub fn most_recent(records: &[DetectionRecord], limit: usize) -> Vec<&DetectionRecord> {
    let mut sorted: Vec<&DetectionRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

/// Counts detections per time bucket over a trailing window
///
/// # Arguments
/// * `records` - Detection snapshot
/// * `now` - Reference instant
/// * `window_minutes` - Trailing window length
/// * `bucket_count` - Equal-width buckets across the window
///
/// # Returns
/// `bucket_count` counts, index 0 = oldest bucket. Records older than the
/// window or stamped in the future are skipped.
pub fn compute_rate_series(
    records: &[DetectionRecord],
    now: DateTime<Utc>,
    window_minutes: u32,
    bucket_count: usize,
) -> Vec<u32> {
    let mut series = vec![0u32; bucket_count];
    if bucket_count == 0 || window_minutes == 0 {
        return series;
    }

    let window_ms = i64::from(window_minutes) * MS_PER_MINUTE;
    let bucket_width_ms = window_ms as f64 / bucket_count as f64;

    for record in records {
        let age = record.age_ms(now);
        if age < 0 || age > window_ms {
            continue;
        }
        let idx = ((window_ms - age) as f64 / bucket_width_ms).floor() as usize;
        series[idx.min(bucket_count - 1)] += 1;
    }

    series
}

/// Shannon entropy (base 2) of the category distribution inside the window
///
/// 0 for an empty window or a single category; `log2(k)` for k equally
/// frequent categories.
pub fn compute_entropy(records: &[DetectionRecord], now: DateTime<Utc>, window_ms: i64) -> f64 {
    let tally = tally_categories(records.iter().filter(|r| in_window(r, now, window_ms)));
    let total = tally.iter().map(|c| c.count).sum::<u32>().max(1) as f64;

    tally.iter().fold(0.0, |entropy, c| {
        let p = c.count as f64 / total;
        entropy - p * p.log2()
    })
}

/// Number of distinct categories seen at most `threshold` times overall
pub fn compute_rarity(records: &[DetectionRecord], threshold: u32) -> u32 {
    tally_categories(records)
        .iter()
        .filter(|c| c.count <= threshold)
        .count() as u32
}

/// Bucket index for a confidence value
///
/// NaN and non-positive values land in bucket 0, values of 1 and above in
/// the last bucket.
pub fn confidence_bucket_index(confidence: f64, bucket_count: usize) -> usize {
    if bucket_count == 0 || !(confidence > 0.0) {
        return 0;
    }
    ((confidence * bucket_count as f64).floor() as usize).min(bucket_count - 1)
}

/// Histogram of confidences over the `sample_limit` most recent records
///
/// The counts always sum to `min(sample_limit, records.len())`.
pub fn compute_confidence_buckets(
    records: &[DetectionRecord],
    bucket_count: usize,
    sample_limit: usize,
) -> Vec<u32> {
    let mut buckets = vec![0u32; bucket_count];
    if bucket_count == 0 {
        return buckets;
    }

    for record in most_recent(records, sample_limit) {
        buckets[confidence_bucket_index(record.confidence, bucket_count)] += 1;
    }

    buckets
}

/// Range labels for confidence buckets (`0-20%`, `20-40%`, ...)
pub fn confidence_bucket_labels(bucket_count: usize) -> Vec<String> {
    let width = 100.0 / bucket_count.max(1) as f64;
    (0..bucket_count)
        .map(|i| {
            let lo = round_half_up(i as f64 * width);
            let hi = round_half_up((i + 1) as f64 * width);
            format!("{}-{}%", lo, hi)
        })
        .collect()
}

/// Compares the average of the last `recent_bucket_count` buckets against
/// the average of the buckets before them
pub fn compute_surge(rate_series: &[u32], recent_bucket_count: usize) -> Surge {
    let split = rate_series.len().saturating_sub(recent_bucket_count);
    let recent_sum: u32 = rate_series[split..].iter().sum();
    let prev_sum: u32 = rate_series[..split].iter().sum();

    let recent_avg = recent_sum as f64 / recent_bucket_count.max(1) as f64;
    let prev_avg = prev_sum as f64 / split.max(1) as f64;

    if prev_avg == 0.0 {
        return if recent_avg > 0.0 {
            Surge::Unbounded
        } else {
            Surge::Percent(0)
        };
    }

    Surge::Percent(round_half_up((recent_avg - prev_avg) / prev_avg * 100.0) as i64)
}

/// Computes every advanced-panel aggregate from one snapshot and one `now`
pub fn compute_advanced_stats(
    records: &[DetectionRecord],
    now: DateTime<Utc>,
    config: &StatsConfig,
) -> AdvancedStats {
    let window_ms = i64::from(config.window_minutes) * MS_PER_MINUTE;

    let rate_series = compute_rate_series(records, now, config.window_minutes, config.bucket_count);
    let surge = compute_surge(&rate_series, config.surge_recent_buckets);
    let window_detections = records
        .iter()
        .filter(|r| in_window(r, now, window_ms))
        .count() as u32;

    let stats = AdvancedStats {
        entropy: compute_entropy(records, now, window_ms),
        rare_count: compute_rarity(records, config.rarity_threshold),
        confidence_buckets: compute_confidence_buckets(
            records,
            config.confidence_bucket_count,
            config.confidence_sample_limit,
        ),
        rate_series,
        surge,
        window_detections,
    };

    tracing::debug!(
        "[analytics] advanced stats over {} records: window={} entropy={:.3} rare={} surge={}",
        records.len(),
        stats.window_detections,
        stats.entropy,
        stats.rare_count,
        stats.surge
    );

    stats
}

/// Most frequent category; ties go to the category seen first
pub fn most_common_sound_type(records: &[DetectionRecord]) -> Option<SoundType> {
    tally_categories(records)
        .into_iter()
        .fold(None, |best: Option<CategoryCount>, candidate| match best {
            Some(b) if b.count >= candidate.count => Some(b),
            _ => Some(candidate),
        })
        .map(|c| c.sound_type)
}

fn mean_confidence<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let (sum, n) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), r| (sum + r.confidence, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Headline numbers for the history screen
pub fn compute_history_stats(records: &[DetectionRecord]) -> HistoryStats {
    HistoryStats {
        total_detections: records.len() as u32,
        avg_confidence: mean_confidence(records).unwrap_or(0.0),
        most_common: most_common_sound_type(records),
    }
}

/// Distinct categories in first-seen order (history filter chips)
pub fn unique_sound_types(records: &[DetectionRecord]) -> Vec<SoundType> {
    tally_categories(records)
        .into_iter()
        .map(|c| c.sound_type)
        .collect()
}

/// Records of one category, or all records when `sound_type` is None
pub fn filter_by_sound_type<'a>(
    records: &'a [DetectionRecord],
    sound_type: Option<&str>,
) -> Vec<&'a DetectionRecord> {
    records
        .iter()
        .filter(|r| sound_type.map_or(true, |t| r.sound_type == t))
        .collect()
}

/// Home dashboard summary
///
/// `offset` decides which calendar day counts as "today".
pub fn compute_dashboard_stats(
    records: &[DetectionRecord],
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> DashboardStats {
    let today = now.with_timezone(&offset).date_naive();
    let week_ago = now - Duration::days(7);

    DashboardStats {
        today_detections: records
            .iter()
            .filter(|r| r.timestamp.with_timezone(&offset).date_naive() == today)
            .count() as u32,
        weekly_detections: records.iter().filter(|r| r.timestamp >= week_ago).count() as u32,
        most_common: most_common_sound_type(records),
        accuracy_percent: mean_confidence(records).map_or(0, confidence_to_percent),
    }
}

/// Detections per minute over the trailing window, one decimal
pub fn detection_rate_per_minute(
    records: &[DetectionRecord],
    now: DateTime<Utc>,
    window_minutes: u32,
) -> f64 {
    if window_minutes == 0 {
        return 0.0;
    }
    let window_ms = i64::from(window_minutes) * MS_PER_MINUTE;
    let recent = records.iter().filter(|r| in_window(r, now, window_ms)).count();
    round_one_decimal(recent as f64 / f64::from(window_minutes))
}

/// Activity sparkline over the trailing window
///
/// Buckets are half-open `[start, start + size)` and end at `now`.
pub fn compute_sparkline(
    records: &[DetectionRecord],
    now: DateTime<Utc>,
    window_minutes: u32,
    bucket_count: usize,
) -> Sparkline {
    let now_ms = now.timestamp_millis() as f64;
    let size = (i64::from(window_minutes) * MS_PER_MINUTE) as f64 / bucket_count.max(1) as f64;

    let counts: Vec<u32> = (0..bucket_count)
        .map(|i| {
            let start = now_ms - (bucket_count - i) as f64 * size;
            let end = start + size;
            records
                .iter()
                .filter(|r| {
                    let ts = r.timestamp.timestamp_millis() as f64;
                    ts >= start && ts < end
                })
                .count() as u32
        })
        .collect();

    let bar_heights = counts
        .iter()
        .map(|&c| (4.0 + f64::from(c) * 8.0).min(SPARK_BAR_MAX))
        .collect();

    Sparkline {
        counts,
        bar_heights,
    }
}

/// Rounded mean confidence percent of the `sample` most recent records
///
/// None when there are no records; the dashboard then shows its overall
/// accuracy instead.
pub fn confidence_trend_percent(records: &[DetectionRecord], sample: usize) -> Option<u32> {
    mean_confidence(most_recent(records, sample)).map(confidence_to_percent)
}

/// The `limit` most frequent categories
pub fn top_sound_types(records: &[DetectionRecord], limit: usize) -> Vec<CategoryCount> {
    let mut ranked = ranked_categories(records);
    ranked.truncate(limit);
    ranked
}

/// Relative time label (`Just now`, `5m ago`, `3h ago`, `2d ago`)
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    format!("{}d ago", hours / 24)
}
