use crate::model::systems::foraging::{self, Forage};
use crate::model::systems::reproduction;
use crate::model::systems::stats::{self, StatsContext, TickCounts};
use crate::model::world::World;
use blobworld_data::{BlobAction, TickStats};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

impl World {
    /// Advances the simulation by one tick and returns its statistics.
    ///
    /// Order within a tick:
    /// 1. Food spawn with the configured probability
    /// 2. Shuffle of the live blobs
    /// 3. Per blob: upkeep, foraging, death check, reproduction
    /// 4. Compaction of eaten food and dead blobs, newborns appended
    /// 5. Aggregation into the statistics log
    ///
    /// Newborns join the population at step 4 and first act next tick.
    /// A food item or child whose traits cannot be sampled is skipped with a
    /// warning, so every call that returns completes and logs its tick.
    pub fn update(&mut self) -> anyhow::Result<TickStats> {
        let start = Instant::now();
        self.tick += 1;

        if self.rng.gen_bool(self.config.food.spawn_chance) {
            if let Err(e) = self.population.spawn_food(&self.config, &mut self.rng) {
                tracing::warn!(tick = self.tick, error = %e, "Skipping food spawn");
                self.metrics.add_to_counter("food_spawn_skipped", 1);
            }
        }

        let mut order: Vec<usize> = (0..self.population.blob_count()).collect();
        order.shuffle(&mut self.rng);

        let food_len = self.population.food_count();
        let mut eaten = vec![false; food_len];
        let mut dead = vec![false; order.len()];
        let mut newborn = Vec::new();
        let mut counts = TickCounts::default();
        let mut skipped_offspring = 0u64;
        let mut remaining_food = food_len;
        let mut scarce = false;

        {
            let parts = self.population.parts_mut();
            for &idx in &order {
                let blob = &mut parts.blobs[idx];
                blob.actions.clear();

                foraging::pay_upkeep(blob, &self.config.metabolism);
                scarce |= remaining_food <= 1;
                let outcome = foraging::forage(blob, parts.food, &mut eaten, &self.config.metabolism);
                if let Forage::Ate { .. } = outcome {
                    counts.food_eaten += 1;
                    remaining_food -= 1;
                }

                if blob.energy <= 0 {
                    blob.actions.push(BlobAction::Starved);
                    dead[idx] = true;
                    counts.deaths += 1;
                    tracing::debug!(tick = self.tick, blob = %blob.id, "Blob starved");
                    continue;
                }

                if let Some(amount) = reproduction::pay_reproduction(blob, &self.config) {
                    let brood = reproduction::spawn_offspring(
                        blob,
                        amount,
                        &mut *parts.ids,
                        &self.config,
                        &mut self.rng,
                        &mut self.totals,
                    );
                    if let Some(e) = brood.skipped.first() {
                        tracing::warn!(
                            tick = self.tick,
                            parent = %blob.id,
                            skipped = brood.skipped.len(),
                            error = %e,
                            "Skipping offspring that could not be sampled"
                        );
                    }
                    skipped_offspring += brood.skipped.len() as u64;
                    counts.births += brood.born.len() as u64;
                    newborn.extend(brood.born);
                }
            }
        }

        if scarce && !self.food_scarce {
            tracing::warn!(
                tick = self.tick,
                food = food_len,
                blobs = order.len(),
                "Foraging against a degenerate food set"
            );
            self.metrics.add_to_counter("food_scarcity_warnings", 1);
        }
        self.food_scarce = scarce;

        self.population.retire(&eaten, &dead, newborn);

        let tick_stats = stats::aggregate(StatsContext {
            tick: self.tick,
            blobs: self.population.blobs(),
            food_count: self.population.food_count(),
            counts,
            totals: self.totals,
        });
        self.history.record(tick_stats.clone());

        self.metrics.add_to_counter("births", counts.births);
        self.metrics.add_to_counter("deaths", counts.deaths);
        self.metrics.add_to_counter("food_eaten", counts.food_eaten);
        self.metrics.add_to_counter("offspring_skipped", skipped_offspring);
        self.metrics.record_tick(
            self.tick,
            start.elapsed(),
            tick_stats.blob_count,
            tick_stats.food_count,
        );

        Ok(tick_stats)
    }
}
