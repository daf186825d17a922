use blobworld_data::{Blob, RunningTotals, TickStats, TraitSummary};

/// Events counted while a tick is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounts {
    pub births: u64,
    pub deaths: u64,
    pub food_eaten: u64,
}

pub struct StatsContext<'a> {
    pub tick: u64,
    pub blobs: &'a [Blob],
    pub food_count: usize,
    pub counts: TickCounts,
    pub totals: RunningTotals,
}

/// Summarizes the live population. Pure: same input, same output.
#[must_use]
pub fn aggregate(ctx: StatsContext<'_>) -> TickStats {
    TickStats {
        tick: ctx.tick,
        blob_count: ctx.blobs.len(),
        food_count: ctx.food_count,
        speed: TraitSummary::from_values(ctx.blobs.iter().map(|b| f64::from(b.speed))),
        size: TraitSummary::from_values(ctx.blobs.iter().map(|b| f64::from(b.size))),
        energy: TraitSummary::from_values(ctx.blobs.iter().map(|b| b.energy as f64)),
        births: ctx.counts.births,
        deaths: ctx.counts.deaths,
        food_eaten: ctx.counts.food_eaten,
        total_offspring: ctx.totals.total_offspring,
        total_mutations: ctx.totals.total_mutations,
    }
}
