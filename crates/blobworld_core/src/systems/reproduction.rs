//! Reproduction: threshold check, energy debit and offspring creation.

use crate::config::AppConfig;
use crate::lifecycle;
use crate::registry::IdTracker;
use crate::sampler::SampleError;
use blobworld_data::{Blob, BlobAction, RunningTotals};
use rand::Rng;

#[must_use]
pub fn can_reproduce(blob: &Blob, config: &AppConfig) -> bool {
    blob.energy >= blob.reproduction_threshold + config.reproduction.required_surplus
}

/// Debits the reproduction cost when the blob can afford it.
///
/// Returns how many offspring the blob produces.
pub fn pay_reproduction(blob: &mut Blob, config: &AppConfig) -> Option<u32> {
    if !can_reproduce(blob, config) {
        return None;
    }
    let cost = blob.reproduction_threshold;
    blob.energy -= cost;
    blob.actions.push(BlobAction::Reproduced {
        cost,
        offspring: blob.offspring_amount,
    });
    Some(blob.offspring_amount)
}

/// Offspring produced by one reproduction event.
#[derive(Debug, Default)]
pub struct Brood {
    pub born: Vec<Blob>,
    /// One entry per child whose traits could not be sampled.
    pub skipped: Vec<SampleError>,
}

/// Builds `count` offspring of `parent`, each under a fresh identifier.
///
/// A child whose traits fail to sample is left out and reported in
/// [`Brood::skipped`]; its identifier stays consumed.
pub fn spawn_offspring<R: Rng + ?Sized>(
    parent: &Blob,
    count: u32,
    ids: &mut IdTracker,
    config: &AppConfig,
    rng: &mut R,
    totals: &mut RunningTotals,
) -> Brood {
    let mut brood = Brood {
        born: Vec::with_capacity(count as usize),
        skipped: Vec::new(),
    };
    for _ in 0..count {
        match lifecycle::create_blob_with_rng(ids.issue(), Some(parent), config, rng, totals) {
            Ok(child) => {
                totals.total_offspring += 1;
                brood.born.push(child);
            }
            Err(e) => brood.skipped.push(e),
        }
    }
    brood
}
