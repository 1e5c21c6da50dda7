use crate::host::{Surroundings, Target, Worker};
use crate::math::Tile;
use crate::model::{RegionId, Settings, Thing};
use crate::rules::{assess_occupant, is_kept_by_zone, Occupancy};
use crate::sowing::{JobFailReason, Sowing};
use crate::zoning::{PlantToGrow, Resolution, Zone, ZoneId, ZoningDomain};
use crate::{remark, Gardens, GardensError};

impl Gardens {
    /// Picks the one job that brings the cell closer to what its zone wants.
    pub fn job_on_cell(
        &mut self,
        region: RegionId,
        zone: ZoneId,
        worker: &dyn Worker,
        world: &dyn Surroundings,
        tile: Tile,
        forced: bool,
    ) -> Result<Sowing, GardensError> {
        let Gardens {
            known,
            settings,
            regions,
            random,
            ..
        } = self;
        let region = regions
            .iter_mut()
            .find(|candidate| candidate.id == region)
            .ok_or(GardensError::RegionNotFound { id: region })?;
        let size = region.size;
        let zoning = &region.zoning;
        let zone = zoning.get_zone_cell(size, zone, tile)?;
        let mut resolution = Resolution {
            known,
            assignments: &mut region.cultivation.assignments,
            random,
            size,
        };
        let sower = Sower {
            zoning,
            settings,
            worker,
            world,
            forced,
        };
        Ok(sower.job_on_cell(zone, tile, &mut resolution))
    }
}

struct Sower<'a> {
    zoning: &'a ZoningDomain,
    settings: &'a Settings,
    worker: &'a dyn Worker,
    world: &'a dyn Surroundings,
    forced: bool,
}

impl Sower<'_> {
    fn job_on_cell(&self, zone: &Zone, tile: Tile, resolution: &mut Resolution) -> Sowing {
        let worker = self.worker;
        let world = self.world;
        let policy = zone.policy.as_plant_to_grow();

        if worker.is_forbidden(Target::Tile(tile)) || !policy.allow_sow() {
            return Sowing::Nothing;
        }

        if let Some(plant) = world.plant_at(tile) {
            return match assess_occupant(Some(policy), &plant, worker, self.forced) {
                Occupancy::Cuttable => {
                    remark!(
                        self.settings,
                        "Cutting {} at {:?} in {}, not allowed there",
                        plant.kind.name,
                        tile,
                        zone.label
                    );
                    Sowing::Cut { plant: plant.id }
                }
                _ => Sowing::Nothing,
            };
        }

        let wanted = match policy.resolve_plant(tile, resolution) {
            Ok(wanted) => wanted,
            Err(error) => {
                remark!(
                    self.settings,
                    "Nothing to sow at {:?} in {}, {:?}",
                    tile,
                    zone.label,
                    error
                );
                return Sowing::Nothing;
            }
        };
        let properties = wanted.plant.clone().unwrap_or_default();

        if world.fertility_at(tile) < properties.fertility_min {
            return Sowing::Blocked(JobFailReason::UnderRequiredFertility {
                required: properties.fertility_min,
            });
        }

        if properties.sow_min_skill > 0 {
            if let Some(level) = worker.plants_skill() {
                if level < properties.sow_min_skill {
                    return Sowing::Blocked(JobFailReason::UnderAllowedSkill {
                        required: properties.sow_min_skill,
                    });
                }
            }
        }

        if !world.is_growing_season(tile, &wanted) {
            return Sowing::Blocked(JobFailReason::NotGrowingSeason);
        }

        if let Some(blocker) = world.adjacent_sow_blocker(&wanted, tile) {
            let sowing = self.clear_blocker(policy, blocker, resolution);
            if let Sowing::Cut { plant } = &sowing {
                remark!(
                    self.settings,
                    "Cutting adjacent {:?} to make room for {} at {:?}",
                    plant,
                    wanted.name,
                    tile
                );
            }
            return sowing;
        }

        for thing in world.things_at(tile) {
            if thing.kind.is_plant() || !thing.kind.blocks_planting {
                continue;
            }
            if !worker.can_reserve(Target::Thing(thing.id), self.forced) {
                return Sowing::Nothing;
            }
            if thing.kind.haulable {
                remark!(
                    self.settings,
                    "Hauling aside {} to make room for {} at {:?}",
                    thing.kind.name,
                    wanted.name,
                    tile
                );
                return Sowing::HaulAside { thing: thing.id };
            }
            return Sowing::Blocked(JobFailReason::CannotMoveThing { thing: thing.id });
        }

        let danger = worker.normal_max_danger();
        if !worker.can_reserve_and_reach(Target::Tile(tile), danger, self.forced)
            || !policy.allow_sow()
        {
            return Sowing::Nothing;
        }

        remark!(
            self.settings,
            "Sowing {} at {:?} in {}",
            wanted.name,
            tile,
            zone.label
        );
        Sowing::Sow {
            tile,
            plant: wanted.id,
        }
    }

    /// Cuts a neighbor that keeps the wanted plant from growing, unless the
    /// neighbor's own zone wants it right there.
    fn clear_blocker(
        &self,
        policy: &dyn PlantToGrow,
        blocker: Thing,
        resolution: &mut Resolution,
    ) -> Sowing {
        if !blocker.kind.is_plant() {
            return Sowing::Nothing;
        }
        let neighbor = self
            .zoning
            .zone_at(blocker.position)
            .map(|zone| zone.policy.as_plant_to_grow());
        if let Some(neighbor) = neighbor {
            if is_kept_by_zone(neighbor, &blocker, resolution) {
                return Sowing::Nothing;
            }
        }
        if !policy.allow_cut() || self.worker.is_forbidden(Target::Thing(blocker.id)) {
            return Sowing::Nothing;
        }
        match assess_occupant(neighbor, &blocker, self.worker, self.forced) {
            Occupancy::Cuttable => Sowing::Cut { plant: blocker.id },
            Occupancy::Refused => {
                Sowing::Blocked(JobFailReason::RefusesPlantCut { plant: blocker.id })
            }
            Occupancy::Wanted | Occupancy::Untouchable => Sowing::Nothing,
        }
    }
}
