//! # Blobworld Data
//!
//! Plain data types shared by the simulation engine and its collaborators.
//! Behavior lives in `blobworld_core`; this crate only holds state,
//! identity rules and a few derived quantities.

pub mod data;

pub use data::entity::{Blob, BlobAction, Color, EntityId, Food, Position};
pub use data::stats::{RunningTotals, TickStats, TraitSummary};
pub use data::traits::TraitDistribution;
