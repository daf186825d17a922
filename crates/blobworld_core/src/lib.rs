//! # Blobworld Core
//!
//! Engine components for a closed 2D foraging ecosystem: blobs chase the
//! nearest food, pay energy for living and moving, reproduce with mutation
//! and starve.
//!
//! This crate contains:
//! - Configuration and validation
//! - Bounded-normal trait sampling and mutation
//! - The entity factory and the population registry
//! - Per-tick foraging and reproduction systems
//! - Statistics aggregation, the statistics log and render snapshots
//!
//! ## Example
//!
//! ```
//! use blobworld_core::config::AppConfig;
//! use blobworld_core::registry::Population;
//! use blobworld_data::RunningTotals;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = AppConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut totals = RunningTotals::default();
//! let mut population = Population::new();
//! population.spawn_food(&config, &mut rng).unwrap();
//! population.spawn_blob(&config, &mut rng, &mut totals).unwrap();
//! assert_eq!(population.food_count() + population.blob_count(), 2);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Distance, direction, overlap and nearest-target search
pub mod geometry;
/// Append-only statistics log
pub mod history;
/// Entity factory for food and blobs
pub mod lifecycle;
/// Tick metrics and structured logging
pub mod metrics;
/// Trait inheritance with mutation
pub mod mutation;
/// Identifier tracking and ownership of live entities
pub mod registry;
/// Bounded-normal rejection sampling
pub mod sampler;
/// Read-only world views for renderers
pub mod snapshot;
/// Per-tick systems (foraging, reproduction, statistics)
pub mod systems;

pub use metrics::{init_logging, Metrics};
pub use sampler::{BoundedSampler, SampleError};
