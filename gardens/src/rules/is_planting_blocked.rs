use crate::host::Surroundings;
use crate::math::Tile;

/// Whether a building standing on the cell makes sowing impossible.
pub(crate) fn is_planting_blocked(world: &dyn Surroundings, tile: Tile) -> bool {
    match world.building_at(tile) {
        Some(building) => building.kind.blocks_planting,
        None => false,
    }
}
