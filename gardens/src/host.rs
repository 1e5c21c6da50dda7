//! Capabilities the host simulation provides to gardening.

use crate::math::Tile;
use crate::model::{Thing, ThingId, ThingKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Danger {
    None,
    Some,
    Deadly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Tile(Tile),
    Thing(ThingId),
}

/// The pawn about to take a job.
pub trait Worker {
    fn is_forbidden(&self, target: Target) -> bool;

    fn can_reserve(&self, target: Target, forced: bool) -> bool;

    fn can_reserve_and_reach(&self, target: Target, danger: Danger, forced: bool) -> bool;

    fn can_reach(&self, tile: Tile, danger: Danger) -> bool;

    fn normal_max_danger(&self) -> Danger;

    fn is_willing_to_cut(&self, plant: &Thing) -> bool;

    /// Plants skill level, none for workers without skills.
    fn plants_skill(&self) -> Option<u8>;
}

/// The region as seen by a worker deciding on cultivation.
pub trait Surroundings {
    fn fertility_at(&self, tile: Tile) -> f32;

    fn is_growing_season(&self, tile: Tile, plant: &ThingKind) -> bool;

    fn plant_at(&self, tile: Tile) -> Option<Thing>;

    fn things_at(&self, tile: Tile) -> Vec<Thing>;

    fn building_at(&self, tile: Tile) -> Option<Thing>;

    /// Neighbor that would keep the plant from growing at the cell.
    fn adjacent_sow_blocker(&self, plant: &ThingKind, tile: Tile) -> Option<Thing>;

    fn contains_static_fire(&self, cells: &[Tile]) -> bool;
}
