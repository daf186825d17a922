//! Per-tick systems: foraging, reproduction and statistics.

pub mod foraging;
pub mod reproduction;
pub mod stats;
