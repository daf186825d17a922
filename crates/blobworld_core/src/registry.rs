//! Population registry: sole owner of live food and blobs.
//!
//! Entities enter only through the registry, which stamps each one with a
//! fresh identifier, and leave only through [`Population::retire`], which
//! compacts the sets after a tick has marked what to remove.

use crate::config::AppConfig;
use crate::lifecycle;
use crate::sampler::SampleError;
use blobworld_data::{Blob, EntityId, Food, RunningTotals};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Issues monotonically increasing identifiers, starting at 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdTracker {
    next: u64,
}

impl Default for IdTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IdTracker {
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn issue(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// The identifier the next call to [`IdTracker::issue`] will return.
    #[must_use]
    pub fn peek(&self) -> EntityId {
        EntityId(self.next)
    }

    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

/// Mutable view handed to the tick engine while it resolves blobs.
pub struct PopulationParts<'a> {
    pub ids: &'a mut IdTracker,
    pub food: &'a [Food],
    pub blobs: &'a mut [Blob],
}

/// What a call to [`Population::retire`] removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Retired {
    pub food: usize,
    pub blobs: usize,
}

/// Live food and blob sets, each ordered by identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    ids: IdTracker,
    food: Vec<Food>,
    blobs: Vec<Blob>,
}

impl Population {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    #[must_use]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    #[must_use]
    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    #[must_use]
    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }

    #[must_use]
    pub fn ids(&self) -> &IdTracker {
        &self.ids
    }

    #[must_use]
    pub fn find_blob(&self, id: EntityId) -> Option<&Blob> {
        self.blobs
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|idx| &self.blobs[idx])
    }

    #[must_use]
    pub fn find_food(&self, id: EntityId) -> Option<&Food> {
        self.food
            .binary_search_by_key(&id, |f| f.id)
            .ok()
            .map(|idx| &self.food[idx])
    }

    /// Generates a food item and adds it.
    pub fn spawn_food<R: Rng + ?Sized>(
        &mut self,
        config: &AppConfig,
        rng: &mut R,
    ) -> Result<EntityId, SampleError> {
        let id = self.ids.issue();
        let food = lifecycle::create_food_with_rng(id, config, rng)?;
        self.food.push(food);
        Ok(id)
    }

    /// Generates a root blob and adds it.
    pub fn spawn_blob<R: Rng + ?Sized>(
        &mut self,
        config: &AppConfig,
        rng: &mut R,
        totals: &mut RunningTotals,
    ) -> Result<EntityId, SampleError> {
        let id = self.ids.issue();
        let blob = lifecycle::create_blob_with_rng(id, None, config, rng, totals)?;
        self.blobs.push(blob);
        Ok(id)
    }

    /// Adds a hand-built food item under a fresh identifier.
    pub fn adopt_food(&mut self, mut food: Food) -> EntityId {
        food.id = self.ids.issue();
        let id = food.id;
        self.food.push(food);
        id
    }

    /// Adds a hand-built blob under a fresh identifier.
    pub fn adopt_blob(&mut self, mut blob: Blob) -> EntityId {
        blob.id = self.ids.issue();
        let id = blob.id;
        self.blobs.push(blob);
        id
    }

    /// Splits the registry for per-blob resolution.
    pub fn parts_mut(&mut self) -> PopulationParts<'_> {
        PopulationParts {
            ids: &mut self.ids,
            food: &self.food,
            blobs: &mut self.blobs,
        }
    }

    /// Drops marked entries and appends blobs born during the tick.
    ///
    /// `eaten` and `dead` are index masks over the food and blob sets as they
    /// were when [`Population::parts_mut`] was taken. Newborns must carry
    /// identifiers issued by this registry.
    pub fn retire(&mut self, eaten: &[bool], dead: &[bool], newborn: Vec<Blob>) -> Retired {
        debug_assert_eq!(eaten.len(), self.food.len());
        debug_assert_eq!(dead.len(), self.blobs.len());
        debug_assert!(newborn.iter().all(|b| b.id.is_assigned() && b.id < self.ids.peek()));

        let food_before = self.food.len();
        let mut idx = 0;
        self.food.retain(|_| {
            let keep = !eaten.get(idx).copied().unwrap_or(false);
            idx += 1;
            keep
        });

        let blobs_before = self.blobs.len();
        let mut idx = 0;
        self.blobs.retain(|_| {
            let keep = !dead.get(idx).copied().unwrap_or(false);
            idx += 1;
            keep
        });

        let retired = Retired {
            food: food_before - self.food.len(),
            blobs: blobs_before - self.blobs.len(),
        };
        self.blobs.extend(newborn);
        retired
    }
}
