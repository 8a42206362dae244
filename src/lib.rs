// SoundAware Insights Library
// Statistics, chart geometry and export for the detection history

pub mod analytics;
pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod simulation;
pub mod utils;

pub use analytics::{AdvancedStats, DashboardStats, HistoryStats, StatsConfig, Surge};
pub use config::InsightsConfig;
pub use error::{ErrorResponse, InsightsError};
pub use models::{load_history_json, DetectionRecord, SoundType};
