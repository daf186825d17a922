pub mod macros;

use blobworld_lib::model::config::AppConfig;
use blobworld_lib::model::data::{Blob, Color, EntityId, Food, Position};
use blobworld_lib::model::world::World;

type WorldMod = Box<dyn FnOnce(&mut World)>;

/// Builds a world with no random starting population, then places
/// hand-built entities in the order they were added.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    mods: Vec<WorldMod>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.initial_blobs = 0;
        config.world.initial_food = 0;
        config.world.seed = Some(42);
        config.food.spawn_chance = 0.0;
        Self {
            config,
            mods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_blob(mut self, blob: Blob) -> Self {
        self.mods.push(Box::new(move |world| {
            world.adopt_blob(blob);
        }));
        self
    }

    pub fn with_food(mut self, x: f64, y: f64, radius: u32) -> Self {
        self.mods.push(Box::new(move |world| {
            let per_area = world.config.food.energy_per_area;
            world.adopt_food(Food::new(
                EntityId::UNASSIGNED,
                Position::new(x, y),
                radius,
                Color::rgb(0, 255, 0),
                per_area,
            ));
        }));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for modifier in self.mods {
            modifier(&mut world);
        }
        world
    }
}

#[allow(dead_code)]
pub struct BlobBuilder {
    blob: Blob,
}

#[allow(dead_code)]
impl BlobBuilder {
    pub fn new() -> Self {
        Self {
            blob: Blob {
                id: EntityId::UNASSIGNED,
                parent_id: None,
                generation: 0,
                position: Position::new(100.0, 100.0),
                size: 20,
                speed: 2,
                energy: 1000,
                reproduction_threshold: 5000,
                offspring_amount: 1,
                color: Color::rgb(100, 100, 100),
                actions: Vec::new(),
            },
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.blob.position = Position::new(x, y);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.blob.size = size;
        self
    }

    pub fn speed(mut self, speed: u32) -> Self {
        self.blob.speed = speed;
        self
    }

    pub fn energy(mut self, energy: i64) -> Self {
        self.blob.energy = energy;
        self
    }

    pub fn threshold(mut self, threshold: i64) -> Self {
        self.blob.reproduction_threshold = threshold;
        self
    }

    pub fn offspring(mut self, amount: u32) -> Self {
        self.blob.offspring_amount = amount;
        self
    }

    pub fn color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.blob.color = Color::rgb(r, g, b);
        self
    }

    pub fn build(self) -> Blob {
        self.blob
    }
}
