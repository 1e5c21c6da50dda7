use crate::zoning::{ZoneId, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    pub fn remove_zone(
        &mut self,
        id: ZoneId,
    ) -> Result<impl FnOnce() -> Vec<Zoning> + '_, ZoningError> {
        let index = self
            .zones
            .iter()
            .position(|zone| zone.id == id)
            .ok_or(ZoningError::ZoneNotFound { id })?;
        let command = move || {
            let zone = self.zones.remove(index);
            for tile in &zone.cells {
                self.cells.remove(tile);
            }
            vec![Zoning::ZoneRemoved {
                id,
                cells: zone.cells,
            }]
        };
        Ok(command)
    }
}
