use crate::math::Tile;
use crate::zoning::{ZoneId, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    /// Unzones the given cells, a zone may end up with no cells at all.
    pub fn remove_cells(
        &mut self,
        id: ZoneId,
        tiles: Vec<Tile>,
    ) -> Result<impl FnOnce() -> Vec<Zoning> + '_, ZoningError> {
        let zone = self
            .zones
            .iter_mut()
            .find(|zone| zone.id == id)
            .ok_or(ZoningError::ZoneNotFound { id })?;
        let index = &mut self.cells;
        let command = move || {
            let mut removed = vec![];
            zone.cells.retain(|tile| {
                if tiles.contains(tile) {
                    removed.push(*tile);
                    false
                } else {
                    true
                }
            });
            for tile in &removed {
                index.remove(tile);
            }
            if removed.is_empty() {
                vec![]
            } else {
                vec![Zoning::CellsRemoved { id, cells: removed }]
            }
        };
        Ok(command)
    }
}
