//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures mapping to `config.toml`. Every section has
//! defaults, so a file only needs the keys it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 800
//! height = 800
//! initial_blobs = 10
//! initial_food = 50
//! seed = 42
//!
//! [food]
//! spawn_chance = 0.5
//! size = { mean = 5.0, std_dev = 2.0, min = 2.0, max = 10.0 }
//!
//! [reproduction]
//! mutation_rate = 0.1
//! required_surplus = 300
//! ```

use crate::sampler::{window_mass, BoundedSampler, DEFAULT_MAX_ATTEMPTS};
use blobworld_data::{Color, TraitDistribution};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Expected number of in-window draws per sampling budget that validation
/// requires. Windows below it would exhaust the sampler in practice.
pub const MIN_EXPECTED_HITS: f64 = 20.0;

/// World dimensions, starting populations and run limits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub initial_blobs: usize,
    pub initial_food: usize,
    pub seed: Option<u64>,
    pub max_ticks: Option<u64>,
    pub stop_on_extinction: bool,
    /// Ticks between periodic progress log lines.
    pub log_interval: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            initial_blobs: 10,
            initial_food: 50,
            seed: None,
            max_ticks: None,
            stop_on_extinction: true,
            log_interval: 100,
        }
    }
}

/// Food generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FoodConfig {
    pub size: TraitDistribution,
    /// Probability that one food item spawns during a tick.
    pub spawn_chance: f64,
    /// Multiplier turning a food's area into its energy value.
    pub energy_per_area: f64,
    pub palette: Vec<Color>,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            size: TraitDistribution::new(5.0, 2.0, 2.0, 10.0),
            spawn_chance: 0.5,
            energy_per_area: 6.0,
            palette: vec![
                Color::rgb(46, 204, 113),
                Color::rgb(39, 174, 96),
                Color::rgb(241, 196, 15),
            ],
        }
    }
}

/// Heritable blob traits and starting energy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BlobConfig {
    pub size: TraitDistribution,
    pub speed: TraitDistribution,
    /// Starting energy of root blobs. Offspring start at its mean.
    pub energy: TraitDistribution,
    pub reproduction_threshold: TraitDistribution,
    pub offspring_amount: TraitDistribution,
    pub palette: Vec<Color>,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            size: TraitDistribution::new(20.0, 5.0, 5.0, 40.0),
            speed: TraitDistribution::new(3.0, 1.0, 1.0, 8.0),
            energy: TraitDistribution::new(1000.0, 200.0, 200.0, 2000.0),
            reproduction_threshold: TraitDistribution::new(5000.0, 1000.0, 2000.0, 10000.0),
            offspring_amount: TraitDistribution::new(2.0, 1.0, 1.0, 5.0),
            palette: vec![
                Color::rgb(52, 152, 219),
                Color::rgb(155, 89, 182),
                Color::rgb(231, 76, 60),
                Color::rgb(230, 126, 34),
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReproductionConfig {
    /// Probability that an inherited trait is re-rolled instead of copied.
    pub mutation_rate: f64,
    /// Energy a blob must hold above its threshold before it reproduces.
    pub required_surplus: i64,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.1,
            required_surplus: 300,
        }
    }
}

/// Energy cost scaling. Upkeep is `round(area / upkeep_divisor)`, movement is
/// `round(area * speed / movement_divisor)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetabolismConfig {
    pub upkeep_divisor: f64,
    pub movement_divisor: f64,
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            upkeep_divisor: 200.0,
            movement_divisor: 200.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    /// Rejected draws allowed before a sample is reported as impossible.
    pub max_attempts: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub food: FoodConfig,
    pub blob: BlobConfig,
    pub reproduction: ReproductionConfig,
    pub metabolism: MetabolismConfig,
    pub sampling: SamplingConfig,
}

/// Checks that a distribution can actually produce values within
/// `max_attempts` draws.
pub fn validate_distribution(
    name: &str,
    dist: &TraitDistribution,
    max_attempts: u32,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        dist.mean.is_finite()
            && dist.std_dev.is_finite()
            && dist.min.is_finite()
            && dist.max.is_finite(),
        "{name}: all distribution fields must be finite"
    );
    anyhow::ensure!(
        dist.std_dev >= 0.0,
        "{name}: std_dev must be non-negative"
    );
    anyhow::ensure!(
        dist.min <= dist.max,
        "{name}: min {} exceeds max {}",
        dist.min,
        dist.max
    );
    if dist.std_dev == 0.0 {
        anyhow::ensure!(
            dist.contains(dist.mean),
            "{name}: with zero std_dev the mean {} must lie in [{}, {}]",
            dist.mean,
            dist.min,
            dist.max
        );
        return Ok(());
    }

    anyhow::ensure!(
        dist.min < dist.max,
        "{name}: a window of width zero needs std_dev 0, got {}",
        dist.std_dev
    );
    let mass = window_mass(dist);
    anyhow::ensure!(
        mass * f64::from(max_attempts) >= MIN_EXPECTED_HITS,
        "{name}: bounds [{}, {}] are unreachable from mean {} with std_dev {} \
         (window mass {mass:.3e} over {max_attempts} attempts)",
        dist.min,
        dist.max,
        dist.mean,
        dist.std_dev
    );
    Ok(())
}

fn validate_whole_trait(
    name: &str,
    dist: &TraitDistribution,
    min_allowed: f64,
    max_attempts: u32,
) -> anyhow::Result<()> {
    validate_distribution(name, dist, max_attempts)?;
    anyhow::ensure!(
        dist.has_whole_bounds(),
        "{name}: bounds must be whole numbers"
    );
    anyhow::ensure!(
        dist.min >= min_allowed,
        "{name}: min must be at least {min_allowed}"
    );
    Ok(())
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Runs before a world is built; any failure aborts startup.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(self.world.log_interval > 0, "Log interval must be positive");

        anyhow::ensure!(
            self.sampling.max_attempts > 0,
            "Sampling max attempts must be positive"
        );
        let attempts = self.sampling.max_attempts;
        validate_whole_trait("food.size", &self.food.size, 1.0, attempts)?;
        validate_whole_trait("blob.size", &self.blob.size, 1.0, attempts)?;
        validate_whole_trait("blob.speed", &self.blob.speed, 0.0, attempts)?;
        validate_whole_trait("blob.energy", &self.blob.energy, 1.0, attempts)?;
        validate_whole_trait(
            "blob.reproduction_threshold",
            &self.blob.reproduction_threshold,
            0.0,
            attempts,
        )?;
        validate_whole_trait(
            "blob.offspring_amount",
            &self.blob.offspring_amount,
            0.0,
            attempts,
        )?;

        let short_side = f64::from(self.world.width.min(self.world.height));
        anyhow::ensure!(
            2.0 * self.food.size.max <= short_side,
            "Largest food does not fit in the world"
        );
        anyhow::ensure!(
            2.0 * self.blob.size.max <= short_side,
            "Largest blob does not fit in the world"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.food.spawn_chance),
            "Food spawn chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.food.energy_per_area.is_finite() && self.food.energy_per_area >= 0.0,
            "Food energy per area must be non-negative"
        );
        anyhow::ensure!(!self.food.palette.is_empty(), "Food palette must not be empty");
        anyhow::ensure!(!self.blob.palette.is_empty(), "Blob palette must not be empty");

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.reproduction.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.reproduction.required_surplus >= 0,
            "Required surplus must be non-negative"
        );

        anyhow::ensure!(
            self.metabolism.upkeep_divisor > 0.0,
            "Upkeep divisor must be positive"
        );
        anyhow::ensure!(
            self.metabolism.movement_divisor > 0.0,
            "Movement divisor must be positive"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads `path`, falling back to defaults when the file is missing.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    #[must_use]
    pub fn sampler(&self) -> BoundedSampler {
        BoundedSampler::new(self.sampling.max_attempts)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.food).as_bytes());
        hasher.update(format!("{:?}", self.blob).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hasher.update(format!("{:?}", self.metabolism).as_bytes());
        hasher.update(format!("{:?}", self.sampling).as_bytes());
        hex::encode(hasher.finalize())
    }
}
