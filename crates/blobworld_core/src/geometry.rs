//! Plane geometry used by foraging.

use blobworld_data::{Blob, Food, Position};

/// Anything occupying a circle in the world.
pub trait Circle {
    fn center(&self) -> Position;
    fn radius(&self) -> f64;
}

impl Circle for Food {
    fn center(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f64 {
        f64::from(self.radius)
    }
}

impl Circle for Blob {
    fn center(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f64 {
        f64::from(self.size)
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Position, b: Position) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Angle in radians of the ray from `a` toward `b`.
#[must_use]
pub fn direction(a: Position, b: Position) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Whether two circles touch or overlap.
#[must_use]
pub fn overlaps<A: Circle + ?Sized, B: Circle + ?Sized>(a: &A, b: &B) -> bool {
    distance(a.center(), b.center()) <= a.radius() + b.radius()
}

/// Position reached by moving `distance` along `angle` from `from`.
#[must_use]
pub fn step(from: Position, distance: f64, angle: f64) -> Position {
    Position {
        x: from.x + distance * angle.cos(),
        y: from.y + distance * angle.sin(),
    }
}

/// Linear scan for the candidate closest to `from`.
///
/// Candidates carry their index so callers can mark the match. Ties keep the
/// earliest candidate.
pub fn nearest<'a, T, I>(from: Position, candidates: I) -> Option<(usize, &'a T)>
where
    T: Circle + 'a,
    I: IntoIterator<Item = (usize, &'a T)>,
{
    let mut best: Option<(usize, &'a T, f64)> = None;
    for (idx, candidate) in candidates {
        let d = distance(from, candidate.center());
        match best {
            Some((_, _, best_d)) if d >= best_d => {}
            _ => best = Some((idx, candidate, d)),
        }
    }
    best.map(|(idx, candidate, _)| (idx, candidate))
}
