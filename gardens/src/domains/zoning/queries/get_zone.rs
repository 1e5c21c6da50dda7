use crate::math::{Tile, TileMath};
use crate::zoning::{Zone, ZoneId, ZoningDomain, ZoningError};

impl ZoningDomain {
    pub fn get_zone(&self, id: ZoneId) -> Result<&Zone, ZoningError> {
        self.zones
            .iter()
            .find(|zone| zone.id == id)
            .ok_or(ZoningError::ZoneNotFound { id })
    }

    pub fn get_zone_mut(&mut self, id: ZoneId) -> Result<&mut Zone, ZoningError> {
        self.zones
            .iter_mut()
            .find(|zone| zone.id == id)
            .ok_or(ZoningError::ZoneNotFound { id })
    }

    /// Zone of a cell that lies inside the region and belongs to the zone.
    pub fn get_zone_cell(
        &self,
        size: [usize; 2],
        id: ZoneId,
        tile: Tile,
    ) -> Result<&Zone, ZoningError> {
        let zone = self.get_zone(id)?;
        if !tile.inside(size) {
            return Err(ZoningError::CellOutsideRegion { tile });
        }
        if self.cells.get(&tile) != Some(&id) {
            return Err(ZoningError::CellNotInZone { tile, zone: id });
        }
        Ok(zone)
    }

    pub fn zone_at(&self, tile: Tile) -> Option<&Zone> {
        let id = *self.cells.get(&tile)?;
        self.zones.iter().find(|zone| zone.id == id)
    }
}
