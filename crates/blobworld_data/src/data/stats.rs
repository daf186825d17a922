use serde::{Deserialize, Serialize};

/// Mean and extrema of one trait across the live blobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl TraitSummary {
    /// Summarizes `values`; `None` when there is nothing to summarize.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return None;
        }
        Some(Self {
            mean: sum / count as f64,
            min,
            max,
        })
    }
}

/// Run-wide accumulators threaded through the tick engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotals {
    /// Offspring produced since the run started.
    pub total_offspring: u64,
    /// Trait re-rolls triggered by mutation since the run started.
    pub total_mutations: u64,
}

/// Per-tick summary of the population. Immutable once logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickStats {
    pub tick: u64,
    pub blob_count: usize,
    pub food_count: usize,
    /// `None` when no blob is alive.
    pub speed: Option<TraitSummary>,
    pub size: Option<TraitSummary>,
    pub energy: Option<TraitSummary>,
    pub births: u64,
    pub deaths: u64,
    pub food_eaten: u64,
    pub total_offspring: u64,
    pub total_mutations: u64,
}

impl TickStats {
    /// Column order used by tabular exports, one column per scalar field.
    pub const COLUMNS: &'static [&'static str] = &[
        "tick",
        "blob_count",
        "food_count",
        "speed_mean",
        "speed_min",
        "speed_max",
        "size_mean",
        "size_min",
        "size_max",
        "energy_mean",
        "energy_min",
        "energy_max",
        "births",
        "deaths",
        "food_eaten",
        "total_offspring",
        "total_mutations",
    ];
}
