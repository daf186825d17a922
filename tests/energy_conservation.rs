mod common;

use blobworld_lib::model::data::BlobAction;
use blobworld_lib::model::systems::foraging::{movement_cost, upkeep_cost};
use common::WorldBuilder;
use std::collections::HashMap;

#[test]
fn test_survivor_energy_balances_its_actions() {
    let mut world = WorldBuilder::new()
        .with_seed(7)
        .with_config(|c| {
            c.world.initial_blobs = 30;
            c.world.initial_food = 80;
            c.food.spawn_chance = 1.0;
        })
        .build();

    for _ in 0..50 {
        let before: HashMap<_, _> = world.blobs().iter().map(|b| (b.id, b.clone())).collect();
        world.update().unwrap();
        let metabolism = world.config.metabolism.clone();

        for blob in world.blobs() {
            let Some(prev) = before.get(&blob.id) else {
                assert!(blob.actions.is_empty());
                continue;
            };
            let mut expected = prev.energy;
            for action in &blob.actions {
                match *action {
                    BlobAction::Upkeep { cost } => {
                        assert_eq!(cost, upkeep_cost(prev, &metabolism));
                        expected -= cost;
                    }
                    BlobAction::Moved { cost, .. } => {
                        assert_eq!(cost, movement_cost(prev, &metabolism));
                        expected -= cost;
                    }
                    BlobAction::Ate { gain, .. } => expected += gain,
                    BlobAction::Reproduced { cost, .. } => {
                        assert_eq!(cost, prev.reproduction_threshold);
                        expected -= cost;
                    }
                    BlobAction::Idle => {}
                    BlobAction::Starved => panic!("starved blob {} still alive", blob.id),
                }
            }
            assert_eq!(blob.energy, expected, "energy mismatch for {}", blob.id);
            assert!(blob.energy > 0);

            let moved = blob.actions.iter().any(|a| matches!(a, BlobAction::Moved { .. }));
            let ate = blob.actions.iter().any(|a| matches!(a, BlobAction::Ate { .. }));
            assert!(!(moved && ate), "moving and eating are exclusive");
        }
    }
}
