//! Bounded-normal trait sampling.
//!
//! Values are drawn from a normal distribution and redrawn until they land
//! inside the configured window. The retry loop is capped so a window the
//! distribution practically never reaches surfaces as an error instead of
//! spinning forever.

use blobworld_data::TraitDistribution;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Default cap on rejected draws per sample.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error(
        "No draw landed in [{min}, {max}] after {attempts} attempts (mean {mean}, std_dev {std_dev})"
    )]
    Exhausted {
        attempts: u32,
        mean: f64,
        std_dev: f64,
        min: f64,
        max: f64,
    },
}

/// Rejection sampler for [`TraitDistribution`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedSampler {
    max_attempts: u32,
}

impl Default for BoundedSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl BoundedSampler {
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draws a value in `[dist.min, dist.max]`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        dist: &TraitDistribution,
        rng: &mut R,
    ) -> Result<f64, SampleError> {
        if dist.min > dist.max {
            return Err(SampleError::InvalidDistribution(format!(
                "min {} exceeds max {}",
                dist.min, dist.max
            )));
        }
        let normal = Normal::new(dist.mean, dist.std_dev)
            .map_err(|e| SampleError::InvalidDistribution(e.to_string()))?;

        for _ in 0..self.max_attempts {
            let value = normal.sample(rng);
            if dist.contains(value) {
                return Ok(value);
            }
        }

        Err(SampleError::Exhausted {
            attempts: self.max_attempts,
            mean: dist.mean,
            std_dev: dist.std_dev,
            min: dist.min,
            max: dist.max,
        })
    }

    /// Draws a value and truncates it toward zero.
    pub fn sample_whole<R: Rng + ?Sized>(
        &self,
        dist: &TraitDistribution,
        rng: &mut R,
    ) -> Result<i64, SampleError> {
        Ok(self.sample(dist, rng)?.trunc() as i64)
    }

    /// Truncated draw for traits that cannot be negative.
    pub fn sample_count<R: Rng + ?Sized>(
        &self,
        dist: &TraitDistribution,
        rng: &mut R,
    ) -> Result<u32, SampleError> {
        let value = self.sample_whole(dist, rng)?;
        Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }
}

/// Probability that an unbounded draw from `dist` lands inside its window.
///
/// A zero `std_dev` is a point mass at the mean.
#[must_use]
pub fn window_mass(dist: &TraitDistribution) -> f64 {
    if dist.min > dist.max {
        return 0.0;
    }
    if dist.std_dev == 0.0 {
        return if dist.contains(dist.mean) { 1.0 } else { 0.0 };
    }
    let low = (dist.min - dist.mean) / dist.std_dev;
    let high = (dist.max - dist.mean) / dist.std_dev;
    // Tail areas are subtracted on the same side so far windows keep their
    // precision instead of cancelling against 1.0.
    let mass = if low >= 0.0 {
        upper_tail(low) - upper_tail(high)
    } else if high <= 0.0 {
        upper_tail(-high) - upper_tail(-low)
    } else {
        1.0 - upper_tail(-low) - upper_tail(high)
    };
    mass.clamp(0.0, 1.0)
}

/// `P(Z > z)` for a standard normal `Z` and `z >= 0`.
fn upper_tail(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}

/// Complementary error function for `x >= 0`, relative error below 1.2e-7.
fn erfc(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.5 * x);
    let poly = -x * x - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    t * poly.exp()
}
