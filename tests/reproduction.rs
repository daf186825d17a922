mod common;

use blobworld_lib::model::data::{BlobAction, TraitDistribution};
use common::{BlobBuilder, WorldBuilder};

#[test]
fn test_reproduction_in_world() {
    // Size 5 has an upkeep of round(78.5 / 200) = 0, so no other debit applies.
    let mut world = WorldBuilder::new()
        .with_config(|c| c.reproduction.mutation_rate = 0.0)
        .with_blob(
            BlobBuilder::new()
                .size(5)
                .speed(3)
                .energy(5600)
                .threshold(5000)
                .offspring(3)
                .color(1, 2, 3)
                .build(),
        )
        .build();
    let parent = world.blobs()[0].id;

    let stats = world.update().unwrap();
    assert_blob_energy!(world, parent, 600);
    assert_population!(world, 4);
    assert_eq!(stats.births, 3);
    assert_eq!(stats.total_offspring, 3);
    assert_eq!(stats.blob_count, 4);
    assert_eq!(world.totals().total_offspring, 3);

    let offspring: Vec<_> = world.blobs().iter().filter(|b| b.id != parent).collect();
    assert_eq!(offspring.len(), 3);
    for child in offspring {
        assert!(child.id > parent);
        assert_eq!(child.parent_id, Some(parent));
        assert_eq!(child.generation, 1);
        assert_eq!(child.energy, 1000);
        assert_eq!(child.size, 5);
        assert_eq!(child.speed, 3);
        assert_eq!(child.reproduction_threshold, 5000);
        assert_eq!(child.offspring_amount, 3);
        assert_eq!((child.color.r, child.color.g, child.color.b), (1, 2, 3));
        assert!(child.actions.is_empty(), "newborns do not act in their birth tick");
    }
    assert_unique_ids!(world);
}

#[test]
fn test_surplus_blocks_reproduction() {
    let mut world = WorldBuilder::new()
        .with_blob(BlobBuilder::new().size(5).energy(5299).threshold(5000).build())
        .build();

    let stats = world.update().unwrap();
    assert_population!(world, 1);
    assert_eq!(stats.births, 0);
    assert!(!world.blobs()[0]
        .actions
        .iter()
        .any(|a| matches!(a, BlobAction::Reproduced { .. })));
}

#[test]
fn test_newborns_act_from_next_tick() {
    let mut world = WorldBuilder::new()
        .with_blob(BlobBuilder::new().size(5).energy(5600).threshold(5000).offspring(2).build())
        .build();
    let parent = world.blobs()[0].id;
    world.update().unwrap();

    world.update().unwrap();
    for child in world.blobs().iter().filter(|b| b.id != parent) {
        assert!(child.actions.contains(&BlobAction::Idle));
    }
}

#[test]
fn test_mutations_counted_when_always_mutating() {
    let mut world = WorldBuilder::new()
        .with_config(|c| c.reproduction.mutation_rate = 1.0)
        .with_blob(BlobBuilder::new().size(5).energy(5600).threshold(5000).offspring(2).build())
        .build();

    let stats = world.update().unwrap();
    // Four heritable traits re-rolled per offspring.
    assert_eq!(stats.total_mutations, 8);
    let config = world.config.clone();
    for child in world.blobs().iter().skip(1) {
        assert!(config.blob.size.contains(f64::from(child.size)));
        assert!(config.blob.speed.contains(f64::from(child.speed)));
        assert!(config
            .blob
            .reproduction_threshold
            .contains(child.reproduction_threshold as f64));
        assert!(config
            .blob
            .offspring_amount
            .contains(f64::from(child.offspring_amount)));
    }
}

#[test]
fn test_unsampleable_offspring_are_skipped() {
    let mut world = WorldBuilder::new()
        .with_blob(
            BlobBuilder::new()
                .size(5)
                .energy(5600)
                .threshold(5000)
                .offspring(2)
                .build(),
        )
        .build();
    // Every child re-rolls its size into a window far out of reach.
    world.config.reproduction.mutation_rate = 1.0;
    world.config.blob.size = TraitDistribution::new(20.0, 1.0, 400.0, 401.0);
    world.config.sampling.max_attempts = 50;
    let parent = world.blobs()[0].id;

    let stats = world.update().unwrap();
    assert_eq!(world.tick, 1);
    assert_eq!(world.history().len(), 1);
    assert_population!(world, 1);
    assert_blob_energy!(world, parent, 600);
    assert_eq!(stats.births, 0);
    assert_eq!(stats.total_offspring, 0);
    assert_eq!(world.metrics().counter("offspring_skipped"), 2);
    assert_eq!(world.metrics().counter("births"), 0);
}
