//! Energy upkeep and the foraging action.

use crate::config::MetabolismConfig;
use crate::geometry;
use blobworld_data::{Blob, BlobAction, EntityId, Food};

/// What a blob did with its foraging action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forage {
    /// Touched the nearest food and consumed it.
    Ate { food: EntityId, gain: i64 },
    /// Stepped toward the nearest food.
    Moved { toward: EntityId, cost: i64 },
    /// No live food in the world.
    Idle,
}

/// Constant per-tick cost proportional to the blob's area.
#[must_use]
pub fn upkeep_cost(blob: &Blob, metabolism: &MetabolismConfig) -> i64 {
    (blob.area() / metabolism.upkeep_divisor).round() as i64
}

/// Cost of one step, proportional to area times speed.
#[must_use]
pub fn movement_cost(blob: &Blob, metabolism: &MetabolismConfig) -> i64 {
    (blob.area() * f64::from(blob.speed) / metabolism.movement_divisor).round() as i64
}

/// Debits upkeep and returns the amount paid.
pub fn pay_upkeep(blob: &mut Blob, metabolism: &MetabolismConfig) -> i64 {
    let cost = upkeep_cost(blob, metabolism);
    blob.energy -= cost;
    blob.actions.push(BlobAction::Upkeep { cost });
    cost
}

/// Finds the nearest food not yet eaten and either eats it or steps toward it.
///
/// `eaten` is an index mask over `food`; a consumed item is marked so no
/// later blob can reach it during the same tick.
pub fn forage(
    blob: &mut Blob,
    food: &[Food],
    eaten: &mut [bool],
    metabolism: &MetabolismConfig,
) -> Forage {
    let target = geometry::nearest(
        blob.position,
        food.iter().enumerate().filter(|(idx, _)| !eaten[*idx]),
    );

    let Some((idx, target)) = target else {
        blob.actions.push(BlobAction::Idle);
        return Forage::Idle;
    };

    if geometry::overlaps(&*blob, target) {
        eaten[idx] = true;
        let gain = target.energy_value();
        blob.energy += gain;
        blob.actions.push(BlobAction::Ate {
            food: target.id,
            gain,
        });
        Forage::Ate {
            food: target.id,
            gain,
        }
    } else {
        let angle = geometry::direction(blob.position, target.position);
        blob.position = geometry::step(blob.position, f64::from(blob.speed), angle);
        let cost = movement_cost(blob, metabolism);
        blob.energy -= cost;
        blob.actions.push(BlobAction::Moved {
            toward: target.id,
            cost,
        });
        Forage::Moved {
            toward: target.id,
            cost,
        }
    }
}
