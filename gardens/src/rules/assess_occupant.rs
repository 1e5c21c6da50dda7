use crate::host::{Danger, Target, Worker};
use crate::model::Thing;
use crate::zoning::PlantToGrow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Occupancy {
    /// The zone wants this plant where it stands.
    Wanted,
    Cuttable,
    /// Worker refuses to cut the plant.
    Refused,
    Untouchable,
}

/// Decides what to do with a plant standing in the way. Plants outside of
/// any zone are judged as if every toggle were enabled.
pub(crate) fn assess_occupant(
    zone: Option<&dyn PlantToGrow>,
    plant: &Thing,
    worker: &dyn Worker,
    forced: bool,
) -> Occupancy {
    if let Some(zone) = zone {
        if zone.allows(&plant.kind) {
            return Occupancy::Wanted;
        }
        if !zone.allow_cut() {
            return Occupancy::Untouchable;
        }
    }
    if !worker.is_willing_to_cut(plant) {
        return Occupancy::Refused;
    }
    if !worker.can_reserve_and_reach(Target::Thing(plant.id), Danger::Deadly, forced) {
        return Occupancy::Untouchable;
    }
    Occupancy::Cuttable
}
