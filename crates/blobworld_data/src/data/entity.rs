use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier issued by the population registry.
///
/// Identifiers are positive and never reused. The zero value marks an
/// entity that has not been adopted by a registry yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    pub const UNASSIGNED: EntityId = EntityId(0);

    #[must_use]
    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World position of an entity's center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display color, picked from a configured palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A stationary energy source.
///
/// Equality and hashing look at the identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: EntityId,
    pub position: Position,
    pub radius: u32,
    pub color: Color,
    energy_value: i64,
}

impl Food {
    /// Builds a food item; its energy value is fixed here and never changes.
    #[must_use]
    pub fn new(id: EntityId, position: Position, radius: u32, color: Color, energy_per_area: f64) -> Self {
        let area = PI * f64::from(radius) * f64::from(radius);
        Self {
            id,
            position,
            radius,
            color,
            energy_value: (energy_per_area * area).round() as i64,
        }
    }

    #[must_use]
    pub fn energy_value(&self) -> i64 {
        self.energy_value
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Food {}

impl Hash for Food {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One step of a blob's per-tick resolution. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlobAction {
    /// Paid the constant area-proportional upkeep.
    Upkeep { cost: i64 },
    /// Stepped toward the nearest food and paid for the move.
    Moved { toward: EntityId, cost: i64 },
    /// Consumed a food item it was touching.
    Ate { food: EntityId, gain: i64 },
    /// No food left anywhere; only upkeep was paid.
    Idle,
    /// Spent energy on offspring.
    Reproduced { cost: i64, offspring: u32 },
    /// Energy dropped to zero or below.
    Starved,
}

/// An energy-consuming forager.
///
/// Equality and hashing look at the identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    pub id: EntityId,
    pub parent_id: Option<EntityId>,
    pub generation: u32,
    pub position: Position,
    /// Radius of the blob's circle.
    pub size: u32,
    /// Distance moved per tick while chasing food.
    pub speed: u32,
    pub energy: i64,
    pub reproduction_threshold: i64,
    /// Number of offspring produced per reproduction.
    pub offspring_amount: u32,
    pub color: Color,
    #[serde(skip)]
    pub actions: Vec<BlobAction>,
}

impl Blob {
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * f64::from(self.size) * f64::from(self.size)
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Blob {}

impl Hash for Blob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
