use log::info;

pub use domains::*;

use crate::collections::Shared;
use crate::cultivation::EligibilitySet;
use crate::math::{Random, Tile, TileMath};
use crate::model::{Knowledge, Region, RegionId, Settings, ThingKind};
use crate::zoning::{
    FilterClipboard, Garden, GrowingZone, PlantFilter, Resolution, ZoneId, ZonePolicy, Zoning,
    ZoningError,
};

pub mod collections;
mod data;
mod domains;
pub mod host;
pub mod math;
pub mod model;
mod rules;
pub mod sowing;
pub mod storage;

pub use data::DataError;

/// Logs a gardening trace, promoted to `info` when debug printing is enabled.
#[macro_export]
macro_rules! remark {
    ($settings:expr, $($arg:tt)+) => {
        if $settings.debug_print {
            log::info!($($arg)+)
        } else {
            log::debug!($($arg)+)
        }
    };
}

/// Gardening session: definitions, settings, filter clipboard and every
/// loaded region with its zones and crop assignments.
pub struct Gardens {
    pub known: Knowledge,
    pub settings: Settings,
    pub clipboard: FilterClipboard,
    pub regions: Vec<Region>,
    pub regions_id: collections::Sequence,
    random: Random,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GardensError {
    RegionNotFound { id: RegionId },
    KindNotFound { name: String },
    Zoning(ZoningError),
}

impl From<ZoningError> for GardensError {
    fn from(error: ZoningError) -> Self {
        Self::Zoning(error)
    }
}

impl Gardens {
    pub fn new(known: Knowledge, settings: Settings) -> Self {
        Self {
            known,
            settings,
            clipboard: FilterClipboard::default(),
            regions: vec![],
            regions_id: Default::default(),
            random: Random::new(),
        }
    }

    pub fn with_random(mut self, random: Random) -> Self {
        self.random = random;
        self
    }

    pub fn get_region(&self, id: RegionId) -> Result<&Region, GardensError> {
        self.regions
            .iter()
            .find(|region| region.id == id)
            .ok_or(GardensError::RegionNotFound { id })
    }

    pub fn get_region_mut(&mut self, id: RegionId) -> Result<&mut Region, GardensError> {
        self.regions
            .iter_mut()
            .find(|region| region.id == id)
            .ok_or(GardensError::RegionNotFound { id })
    }

    pub fn find_kind(&self, name: &str) -> Result<Shared<ThingKind>, GardensError> {
        self.known
            .things
            .find(name)
            .map_err(|_| GardensError::KindNotFound {
                name: name.to_string(),
            })
    }

    pub fn eligible_plants(&self) -> EligibilitySet {
        EligibilitySet::compute(&self.known, self.settings.allow_all_plants)
    }

    pub fn create_region(
        &mut self,
        size: [usize; 2],
        ambient_flora: Vec<Shared<ThingKind>>,
    ) -> RegionId {
        let id = self.regions_id.one(RegionId);
        let eligible = self.eligible_plants();
        info!(
            "Region {:?} initialized with {} eligible plants, fingerprint {}",
            id,
            eligible.len(),
            eligible.fingerprint
        );
        self.regions
            .push(Region::new(id, size, ambient_flora, eligible));
        id
    }

    pub fn create_garden(
        &mut self,
        region: RegionId,
        cells: Vec<Tile>,
    ) -> Result<(ZoneId, Vec<Zoning>), GardensError> {
        let region = self.get_region_mut(region)?;
        let filter = PlantFilter::from_flora(&region.ambient_flora);
        let policy = ZonePolicy::Garden(Garden::new(filter));
        let (zone, create_zone) = region.zoning.create_zone(region.size, cells, policy)?;
        Ok((zone, create_zone()))
    }

    pub fn create_growing_zone(
        &mut self,
        region: RegionId,
        cells: Vec<Tile>,
        plant: Option<Shared<ThingKind>>,
    ) -> Result<(ZoneId, Vec<Zoning>), GardensError> {
        let region = self.get_region_mut(region)?;
        let policy = ZonePolicy::Growing(GrowingZone::new(plant));
        let (zone, create_zone) = region.zoning.create_zone(region.size, cells, policy)?;
        Ok((zone, create_zone()))
    }

    pub fn toggle_sow(
        &mut self,
        region: RegionId,
        zone: ZoneId,
    ) -> Result<Vec<Zoning>, GardensError> {
        let toggle_sow = self.get_region_mut(region)?.zoning.toggle_sow(zone)?;
        Ok(toggle_sow())
    }

    pub fn toggle_cut(
        &mut self,
        region: RegionId,
        zone: ZoneId,
    ) -> Result<Vec<Zoning>, GardensError> {
        let toggle_cut = self.get_region_mut(region)?.zoning.toggle_cut(zone)?;
        Ok(toggle_cut())
    }

    pub fn set_plant_allowed(
        &mut self,
        region: RegionId,
        zone: ZoneId,
        plant: &str,
        allow: bool,
    ) -> Result<Vec<Zoning>, GardensError> {
        let kind = self.find_kind(plant)?;
        let region = self.get_region_mut(region)?;
        let set_plant_allowed = region.zoning.set_plant_allowed(
            zone,
            &kind,
            allow,
            &region.cultivation.eligible,
        )?;
        Ok(set_plant_allowed())
    }

    pub fn set_plant_to_grow(
        &mut self,
        region: RegionId,
        zone: ZoneId,
        plant: Option<&str>,
    ) -> Result<Vec<Zoning>, GardensError> {
        let plant = match plant {
            Some(name) => Some(self.find_kind(name)?),
            None => None,
        };
        let set_plant_to_grow = self
            .get_region_mut(region)?
            .zoning
            .set_plant_to_grow(zone, plant)?;
        Ok(set_plant_to_grow())
    }

    pub fn copy_filter(&mut self, region: RegionId, zone: ZoneId) -> Result<(), GardensError> {
        let Gardens {
            regions, clipboard, ..
        } = self;
        let region = regions
            .iter()
            .find(|candidate| candidate.id == region)
            .ok_or(GardensError::RegionNotFound { id: region })?;
        region.zoning.copy_filter(zone, clipboard)?;
        Ok(())
    }

    pub fn paste_filter(
        &mut self,
        region: RegionId,
        zone: ZoneId,
    ) -> Result<Vec<Zoning>, GardensError> {
        let Gardens {
            regions, clipboard, ..
        } = self;
        let region = regions
            .iter_mut()
            .find(|candidate| candidate.id == region)
            .ok_or(GardensError::RegionNotFound { id: region })?;
        let paste_filter = region.zoning.paste_filter(zone, clipboard)?;
        Ok(paste_filter())
    }

    pub fn remove_zone(
        &mut self,
        region: RegionId,
        zone: ZoneId,
    ) -> Result<Vec<Zoning>, GardensError> {
        let region = self.get_region_mut(region)?;
        let remove_zone = region.zoning.remove_zone(zone)?;
        let events = remove_zone();
        forget_unzoned(region, &events);
        Ok(events)
    }

    pub fn remove_cells(
        &mut self,
        region: RegionId,
        zone: ZoneId,
        cells: Vec<Tile>,
    ) -> Result<Vec<Zoning>, GardensError> {
        let region = self.get_region_mut(region)?;
        let remove_cells = region.zoning.remove_cells(zone, cells)?;
        let events = remove_cells();
        forget_unzoned(region, &events);
        Ok(events)
    }

    /// Settles the plant a zone wants at the cell, remembering garden picks.
    pub fn resolve_plant(
        &mut self,
        region: RegionId,
        zone: ZoneId,
        tile: Tile,
    ) -> Result<Shared<ThingKind>, GardensError> {
        let Gardens {
            known,
            regions,
            random,
            ..
        } = self;
        let region = regions
            .iter_mut()
            .find(|candidate| candidate.id == region)
            .ok_or(GardensError::RegionNotFound { id: region })?;
        let size = region.size;
        let zone = region.zoning.get_zone_cell(size, zone, tile)?;
        let mut resolution = Resolution {
            known,
            assignments: &mut region.cultivation.assignments,
            random,
            size,
        };
        let plant = zone.policy.as_plant_to_grow().resolve_plant(tile, &mut resolution)?;
        Ok(plant)
    }

    /// Plant wanted at any cell covered by a garden, none elsewhere.
    pub fn wanted_plant_at(&mut self, region: RegionId, tile: Tile) -> Option<Shared<ThingKind>> {
        let zone = self
            .get_region(region)
            .ok()?
            .zoning
            .zone_at(tile)
            .filter(|zone| zone.is_garden())?
            .id;
        self.resolve_plant(region, zone, tile).ok()
    }

    /// A player ordered the plant at the cell cut: the garden forgets its
    /// pick there so the next resolution chooses again.
    pub fn notify_player_cut(&mut self, region: RegionId, tile: Tile) -> Result<(), GardensError> {
        let settings = &self.settings;
        let region = self
            .regions
            .iter_mut()
            .find(|candidate| candidate.id == region)
            .ok_or(GardensError::RegionNotFound { id: region })?;
        let in_garden = region
            .zoning
            .zone_at(tile)
            .map(|zone| zone.is_garden())
            .unwrap_or(false);
        if in_garden {
            let cell = tile.fit(region.width());
            if let Some(name) = region.cultivation.assignments.evict(cell) {
                remark!(
                    settings,
                    "Clearing cached {} for {:?} due to player designated cut",
                    name,
                    tile
                );
            }
        }
        Ok(())
    }
}

/// Unzoned cells lose their crop picks, a later zone there chooses afresh.
fn forget_unzoned(region: &mut Region, events: &[Zoning]) {
    let width = region.width();
    for event in events {
        let cells = match event {
            Zoning::ZoneRemoved { cells, .. } | Zoning::CellsRemoved { cells, .. } => cells,
            _ => continue,
        };
        for tile in cells {
            region.cultivation.assignments.evict(tile.fit(width));
        }
    }
}
