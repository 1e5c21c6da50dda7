use log::debug;

use crate::collections::Shared;
use crate::cultivation::AssignmentCache;
use crate::math::{Random, Tile, TileMath};
use crate::model::{Knowledge, ThingKind};
use crate::zoning::{FilterState, Garden, GrowingZone, ZoningError};

/// Everything a zone needs to settle the plant of one cell.
pub struct Resolution<'a> {
    pub known: &'a Knowledge,
    pub assignments: &'a mut AssignmentCache,
    pub random: &'a mut Random,
    pub size: [usize; 2],
}

pub trait PlantToGrow {
    fn resolve_plant(
        &self,
        tile: Tile,
        resolution: &mut Resolution,
    ) -> Result<Shared<ThingKind>, ZoningError>;

    /// Whether an existing plant of this kind may stay in the zone.
    fn allows(&self, kind: &ThingKind) -> bool;

    fn allow_sow(&self) -> bool;

    fn allow_cut(&self) -> bool;
}

impl PlantToGrow for Garden {
    fn resolve_plant(
        &self,
        tile: Tile,
        resolution: &mut Resolution,
    ) -> Result<Shared<ThingKind>, ZoningError> {
        let filter = match &self.filter {
            FilterState::Built(filter) => filter,
            FilterState::Uninitialized => return Err(ZoningError::NoEligibleCrop),
        };
        if !tile.inside(resolution.size) {
            return Err(ZoningError::CellOutsideRegion { tile });
        }
        let cell = tile.fit(resolution.size[0]);
        if let Some(name) = resolution.assignments.get(cell) {
            match resolution.known.things.find(name) {
                Ok(kind) if filter.allows(&kind) => return Ok(kind),
                Ok(kind) => debug!(
                    "Cached {} for {:?} no longer allowed, regenerating",
                    kind.name, tile
                ),
                Err(error) => debug!("Unable to resolve cached plant of {:?}, {:?}", tile, error),
            }
        }
        let kind = filter
            .choose(resolution.random)
            .ok_or(ZoningError::NoEligibleCrop)?;
        resolution.assignments.put(cell, &kind);
        Ok(kind)
    }

    fn allows(&self, kind: &ThingKind) -> bool {
        match &self.filter {
            FilterState::Built(filter) => filter.allows(kind),
            FilterState::Uninitialized => false,
        }
    }

    fn allow_sow(&self) -> bool {
        self.allow_sow
    }

    fn allow_cut(&self) -> bool {
        self.allow_cut
    }
}

impl PlantToGrow for GrowingZone {
    fn resolve_plant(
        &self,
        _tile: Tile,
        _resolution: &mut Resolution,
    ) -> Result<Shared<ThingKind>, ZoningError> {
        self.plant.clone().ok_or(ZoningError::NoEligibleCrop)
    }

    fn allows(&self, kind: &ThingKind) -> bool {
        match &self.plant {
            Some(plant) => plant.id == kind.id,
            None => false,
        }
    }

    fn allow_sow(&self) -> bool {
        self.allow_sow
    }

    fn allow_cut(&self) -> bool {
        self.allow_cut
    }
}
