//! Trait inheritance with random re-rolls.

use crate::sampler::{BoundedSampler, SampleError};
use blobworld_data::TraitDistribution;
use rand::Rng;

/// Result of passing one trait through inheritance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inherited {
    /// Copied unchanged from the parent.
    Copied(f64),
    /// Re-rolled from the trait's distribution.
    Mutated(f64),
}

impl Inherited {
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Inherited::Copied(v) | Inherited::Mutated(v) => v,
        }
    }

    #[must_use]
    pub fn is_mutation(self) -> bool {
        matches!(self, Inherited::Mutated(_))
    }
}

/// Applies the reproduction mutation rate to inherited traits.
#[derive(Debug, Clone, Copy)]
pub struct Mutator {
    rate: f64,
    sampler: BoundedSampler,
}

impl Mutator {
    #[must_use]
    pub fn new(rate: f64, sampler: BoundedSampler) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            sampler,
        }
    }

    /// With probability `rate`, replaces `value` by a fresh draw from `dist`.
    ///
    /// Every call is an independent trial.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        value: f64,
        dist: &TraitDistribution,
        rng: &mut R,
    ) -> Result<Inherited, SampleError> {
        if rng.gen_bool(self.rate) {
            Ok(Inherited::Mutated(self.sampler.sample(dist, rng)?))
        } else {
            Ok(Inherited::Copied(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_rate_always_copies() {
        let mutator = Mutator::new(0.0, BoundedSampler::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let dist = TraitDistribution::new(5.0, 1.0, 1.0, 9.0);
        for _ in 0..200 {
            assert_eq!(mutator.mutate(4.0, &dist, &mut rng).unwrap(), Inherited::Copied(4.0));
        }
    }

    #[test]
    fn test_full_rate_always_rerolls_within_bounds() {
        let mutator = Mutator::new(1.0, BoundedSampler::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let dist = TraitDistribution::new(5.0, 1.0, 1.0, 9.0);
        for _ in 0..200 {
            let result = mutator.mutate(100.0, &dist, &mut rng).unwrap();
            assert!(result.is_mutation());
            assert!(dist.contains(result.value()));
        }
    }

    #[test]
    fn test_rate_is_roughly_respected() {
        let mutator = Mutator::new(0.25, BoundedSampler::default());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let dist = TraitDistribution::new(5.0, 1.0, 1.0, 9.0);
        let mutations = (0..4000)
            .filter(|_| mutator.mutate(5.0, &dist, &mut rng).unwrap().is_mutation())
            .count();
        assert!((800..1200).contains(&mutations), "got {mutations}");
    }
}
