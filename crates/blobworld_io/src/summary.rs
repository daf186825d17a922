use blobworld_core::config::AppConfig;
use blobworld_core::history::StatsLog;
use blobworld_data::{RunningTotals, TickStats};
use serde::{Deserialize, Serialize};

/// End-of-run record written next to the exported statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub config_fingerprint: String,
    pub seed: Option<u64>,
    pub ticks: u64,
    pub extinct: bool,
    pub final_blobs: usize,
    pub final_food: usize,
    pub peak_blobs: usize,
    pub totals: RunningTotals,
    pub last: Option<TickStats>,
    pub finished_at: String,
}

impl RunSummary {
    #[must_use]
    pub fn new(config: &AppConfig, seed: Option<u64>, log: &StatsLog, totals: RunningTotals) -> Self {
        let last = log.latest().cloned();
        Self {
            config_fingerprint: config.fingerprint(),
            seed,
            ticks: last.as_ref().map_or(0, |s| s.tick),
            extinct: last.as_ref().is_some_and(|s| s.blob_count == 0),
            final_blobs: last.as_ref().map_or(0, |s| s.blob_count),
            final_food: last.as_ref().map_or(0, |s| s.food_count),
            peak_blobs: log.iter().map(|s| s.blob_count).max().unwrap_or(0),
            totals,
            last,
            finished_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
