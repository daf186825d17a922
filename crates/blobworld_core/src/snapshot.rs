use crate::registry::Population;
use blobworld_data::{Blob, Color, EntityId, Food, Position, TickStats};
use serde::{Deserialize, Serialize};

/// What a renderer needs to draw one entity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EntityView {
    pub id: EntityId,
    pub position: Position,
    pub radius: u32,
    pub color: Color,
}

impl From<&Food> for EntityView {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            position: food.position,
            radius: food.radius,
            color: food.color,
        }
    }
}

impl From<&Blob> for EntityView {
    fn from(blob: &Blob) -> Self {
        Self {
            id: blob.id,
            position: blob.position,
            radius: blob.size,
            color: blob.color,
        }
    }
}

/// Read-only copy of the world taken between ticks.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: u32,
    pub height: u32,
    pub food: Vec<EntityView>,
    pub blobs: Vec<EntityView>,
    pub stats: Option<TickStats>,
}

impl WorldSnapshot {
    #[must_use]
    pub fn capture(
        tick: u64,
        width: u32,
        height: u32,
        population: &Population,
        stats: Option<&TickStats>,
    ) -> Self {
        Self {
            tick,
            width,
            height,
            food: population.food().iter().map(EntityView::from).collect(),
            blobs: population.blobs().iter().map(EntityView::from).collect(),
            stats: stats.cloned(),
        }
    }
}
