use crate::model::Thing;
use crate::zoning::{PlantToGrow, Resolution};

/// Whether the zone holding the plant resolves to exactly its kind.
pub(crate) fn is_kept_by_zone(
    zone: &dyn PlantToGrow,
    plant: &Thing,
    resolution: &mut Resolution,
) -> bool {
    match zone.resolve_plant(plant.position, resolution) {
        Ok(wanted) => wanted.id == plant.kind.id,
        Err(_) => false,
    }
}
