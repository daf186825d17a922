use crate::model::config::AppConfig;
use crate::model::history::StatsLog;
use crate::model::metrics::Metrics;
use crate::model::registry::Population;
use crate::model::world::World;
use anyhow::Context;
use blobworld_data::RunningTotals;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl World {
    /// Validates `config` and builds the starting food and blob populations.
    ///
    /// Food is generated before blobs, so with a fixed seed the initial
    /// identifiers run `1..=initial_food` for food and continue for blobs.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid simulation configuration")?;

        let seed = config.world.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut population = Population::new();
        let mut totals = RunningTotals::default();

        for _ in 0..config.world.initial_food {
            population
                .spawn_food(&config, &mut rng)
                .context("generating initial food")?;
        }
        for _ in 0..config.world.initial_blobs {
            population
                .spawn_blob(&config, &mut rng, &mut totals)
                .context("generating initial blobs")?;
        }

        tracing::info!(
            seed = seed,
            width = config.world.width,
            height = config.world.height,
            blobs = population.blob_count(),
            food = population.food_count(),
            "World initialized"
        );

        let metrics = Metrics::new(config.world.log_interval);
        Ok(Self {
            config,
            tick: 0,
            seed,
            population,
            totals,
            history: StatsLog::new(),
            rng,
            metrics,
            food_scarce: false,
        })
    }
}
