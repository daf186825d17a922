use crate::model::config::AppConfig;
use crate::model::history::StatsLog;
use crate::model::metrics::Metrics;
use crate::model::registry::Population;
use crate::model::snapshot::WorldSnapshot;
use blobworld_data::{Blob, EntityId, Food, RunningTotals, TickStats};
use rand_chacha::ChaCha8Rng;

pub mod init;
pub mod update;

/// The simulated world: configuration, live population and run history.
///
/// Built by [`World::new`] and advanced one tick at a time by
/// [`World::update`]. Everything else only reads it between ticks.
pub struct World {
    pub config: AppConfig,
    pub tick: u64,
    seed: u64,
    population: Population,
    totals: RunningTotals,
    history: StatsLog,
    rng: ChaCha8Rng,
    metrics: Metrics,
    /// Set while blobs forage against at most one uneaten food.
    food_scarce: bool,
}

impl World {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.config.world.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.config.world.height
    }

    /// Seed the random source was built from. Replaying it reproduces the run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[must_use]
    pub fn blobs(&self) -> &[Blob] {
        self.population.blobs()
    }

    #[must_use]
    pub fn food(&self) -> &[Food] {
        self.population.food()
    }

    #[must_use]
    pub fn get_blob(&self, id: EntityId) -> Option<&Blob> {
        self.population.find_blob(id)
    }

    #[must_use]
    pub fn totals(&self) -> RunningTotals {
        self.totals
    }

    #[must_use]
    pub fn history(&self) -> &StatsLog {
        &self.history
    }

    #[must_use]
    pub fn latest_stats(&self) -> Option<&TickStats> {
        self.history.latest()
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Whether the last tick had a blob forage against at most one food.
    #[must_use]
    pub fn is_food_scarce(&self) -> bool {
        self.food_scarce
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.population.blob_count() == 0
    }

    /// Read-only copy of the current state for renderers.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(
            self.tick,
            self.width(),
            self.height(),
            &self.population,
            self.history.latest(),
        )
    }

    /// Places a hand-built blob, issuing it a fresh identifier.
    pub fn adopt_blob(&mut self, blob: Blob) -> EntityId {
        self.population.adopt_blob(blob)
    }

    /// Places a hand-built food item, issuing it a fresh identifier.
    pub fn adopt_food(&mut self, food: Food) -> EntityId {
        self.population.adopt_food(food)
    }
}
