use serde::{Deserialize, Serialize};

/// Bounded-normal generator parameters for one trait.
///
/// Draws come from `N(mean, std_dev)` and are rejected until they land in
/// `[min, max]` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl TraitDistribution {
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64, min: f64, max: f64) -> Self {
        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// A distribution that always yields `value`.
    #[must_use]
    pub const fn fixed(value: f64) -> Self {
        Self::new(value, 0.0, value, value)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether both bounds are whole numbers, so truncated draws stay in range.
    #[must_use]
    pub fn has_whole_bounds(&self) -> bool {
        self.min.fract() == 0.0 && self.max.fract() == 0.0
    }
}
