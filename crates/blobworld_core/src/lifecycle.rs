//! Entity factory: builds food and blobs from the configured distributions.

use crate::config::AppConfig;
use crate::mutation::Mutator;
use crate::sampler::SampleError;
use blobworld_data::{Blob, Color, EntityId, Food, Position, RunningTotals};
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform position keeping a circle of `radius` fully inside the world.
pub fn random_position<R: Rng + ?Sized>(radius: f64, width: f64, height: f64, rng: &mut R) -> Position {
    Position {
        x: rng.gen_range(radius..=(width - radius).max(radius)),
        y: rng.gen_range(radius..=(height - radius).max(radius)),
    }
}

pub fn pick_color<R: Rng + ?Sized>(palette: &[Color], rng: &mut R) -> Color {
    palette.choose(rng).copied().unwrap_or_default()
}

fn whole(value: f64) -> i64 {
    value.trunc() as i64
}

fn count(value: f64) -> u32 {
    u32::try_from(whole(value).max(0)).unwrap_or(u32::MAX)
}

/// Creates a food item with a freshly sampled radius.
pub fn create_food_with_rng<R: Rng + ?Sized>(
    id: EntityId,
    config: &AppConfig,
    rng: &mut R,
) -> Result<Food, SampleError> {
    let sampler = config.sampler();
    let radius = sampler.sample_count(&config.food.size, rng)?;
    let color = pick_color(&config.food.palette, rng);
    let position = random_position(
        f64::from(radius),
        f64::from(config.world.width),
        f64::from(config.world.height),
        rng,
    );
    Ok(Food::new(
        id,
        position,
        radius,
        color,
        config.food.energy_per_area,
    ))
}

/// Creates a blob.
///
/// Without a parent every trait is sampled fresh. With a parent each
/// heritable trait goes through the mutator, the starting energy is the
/// configured mean and the position is drawn independently of the parent.
/// Mutation events are added to `totals`.
pub fn create_blob_with_rng<R: Rng + ?Sized>(
    id: EntityId,
    parent: Option<&Blob>,
    config: &AppConfig,
    rng: &mut R,
    totals: &mut RunningTotals,
) -> Result<Blob, SampleError> {
    let traits = &config.blob;
    let sampler = config.sampler();

    let mut blob = match parent {
        None => Blob {
            id,
            parent_id: None,
            generation: 0,
            position: Position::default(),
            size: sampler.sample_count(&traits.size, rng)?,
            speed: sampler.sample_count(&traits.speed, rng)?,
            energy: sampler.sample_whole(&traits.energy, rng)?,
            reproduction_threshold: sampler.sample_whole(&traits.reproduction_threshold, rng)?,
            offspring_amount: sampler.sample_count(&traits.offspring_amount, rng)?,
            color: pick_color(&traits.palette, rng),
            actions: Vec::new(),
        },
        Some(parent) => {
            let mutator = Mutator::new(config.reproduction.mutation_rate, sampler);
            let size = mutator.mutate(f64::from(parent.size), &traits.size, rng)?;
            let speed = mutator.mutate(f64::from(parent.speed), &traits.speed, rng)?;
            let threshold = mutator.mutate(
                parent.reproduction_threshold as f64,
                &traits.reproduction_threshold,
                rng,
            )?;
            let offspring = mutator.mutate(
                f64::from(parent.offspring_amount),
                &traits.offspring_amount,
                rng,
            )?;
            totals.total_mutations += [size, speed, threshold, offspring]
                .iter()
                .filter(|t| t.is_mutation())
                .count() as u64;

            Blob {
                id,
                parent_id: Some(parent.id),
                generation: parent.generation + 1,
                position: Position::default(),
                size: count(size.value()),
                speed: count(speed.value()),
                energy: whole(traits.energy.mean),
                reproduction_threshold: whole(threshold.value()),
                offspring_amount: count(offspring.value()),
                color: parent.color,
                actions: Vec::new(),
            }
        }
    };

    blob.position = random_position(
        f64::from(blob.size),
        f64::from(config.world.width),
        f64::from(config.world.height),
        rng,
    );
    Ok(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobworld_data::TraitDistribution;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn inside(pos: Position, radius: f64, config: &AppConfig) -> bool {
        pos.x - radius >= 0.0
            && pos.y - radius >= 0.0
            && pos.x + radius <= f64::from(config.world.width)
            && pos.y + radius <= f64::from(config.world.height)
    }

    #[test]
    fn test_food_fits_in_world() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for i in 1..=500 {
            let food = create_food_with_rng(EntityId(i), &config, &mut rng).unwrap();
            assert!(config.food.size.contains(f64::from(food.radius)));
            assert!(inside(food.position, f64::from(food.radius), &config));
            assert!(config.food.palette.contains(&food.color));
        }
    }

    #[test]
    fn test_root_blob_traits_in_bounds() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut totals = RunningTotals::default();
        for i in 1..=500 {
            let b = create_blob_with_rng(EntityId(i), None, &config, &mut rng, &mut totals).unwrap();
            assert_eq!(b.id, EntityId(i));
            assert!(config.blob.size.contains(f64::from(b.size)));
            assert!(config.blob.speed.contains(f64::from(b.speed)));
            assert!(config.blob.energy.contains(b.energy as f64));
            assert!(config.blob.offspring_amount.contains(f64::from(b.offspring_amount)));
            assert!(inside(b.position, f64::from(b.size), &config));
        }
        assert_eq!(totals, RunningTotals::default());
    }

    #[test]
    fn test_offspring_copies_traits_without_mutation() {
        let mut config = AppConfig::default();
        config.reproduction.mutation_rate = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut totals = RunningTotals::default();
        let parent = create_blob_with_rng(EntityId(1), None, &config, &mut rng, &mut totals).unwrap();
        let child =
            create_blob_with_rng(EntityId(2), Some(&parent), &config, &mut rng, &mut totals).unwrap();

        assert_eq!(child.size, parent.size);
        assert_eq!(child.speed, parent.speed);
        assert_eq!(child.reproduction_threshold, parent.reproduction_threshold);
        assert_eq!(child.offspring_amount, parent.offspring_amount);
        assert_eq!(child.energy, 1000);
        assert_eq!(child.parent_id, Some(parent.id));
        assert_eq!(child.generation, parent.generation + 1);
        assert_eq!(child.color, parent.color);
        assert_eq!(totals.total_mutations, 0);
    }

    #[test]
    fn test_offspring_full_mutation_counts_every_trait() {
        let mut config = AppConfig::default();
        config.reproduction.mutation_rate = 1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut totals = RunningTotals::default();
        let parent = create_blob_with_rng(EntityId(1), None, &config, &mut rng, &mut totals).unwrap();
        let child =
            create_blob_with_rng(EntityId(2), Some(&parent), &config, &mut rng, &mut totals).unwrap();
        assert_eq!(totals.total_mutations, 4);
        assert!(config.blob.size.contains(f64::from(child.size)));
    }

    #[test]
    fn test_offspring_energy_is_truncated_mean() {
        let mut config = AppConfig::default();
        config.blob.energy = TraitDistribution::new(750.9, 10.0, 700.0, 800.0);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut totals = RunningTotals::default();
        let parent = create_blob_with_rng(EntityId(1), None, &config, &mut rng, &mut totals).unwrap();
        let child =
            create_blob_with_rng(EntityId(2), Some(&parent), &config, &mut rng, &mut totals).unwrap();
        assert_eq!(child.energy, 750);
    }
}
