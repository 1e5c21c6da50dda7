use std::collections::HashSet;

use crate::math::{Tile, TileMath};
use crate::zoning::{Zone, ZoneId, ZonePolicy, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    pub fn create_zone<'operation>(
        &'operation mut self,
        size: [usize; 2],
        cells: Vec<Tile>,
        policy: ZonePolicy,
    ) -> Result<(ZoneId, impl FnOnce() -> Vec<Zoning> + 'operation), ZoningError> {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(cells.len());
        for tile in cells {
            if !tile.inside(size) {
                return Err(ZoningError::CellOutsideRegion { tile });
            }
            if let Some(zone) = self.cells.get(&tile) {
                return Err(ZoningError::CellAlreadyZoned { tile, zone: *zone });
            }
            if seen.insert(tile) {
                unique.push(tile);
            }
        }
        let id = ZoneId(self.zones_id.value() + 1);
        let label = match &policy {
            ZonePolicy::Garden(_) => format!("Garden {}", id.0),
            ZonePolicy::Growing(_) => format!("Growing zone {}", id.0),
        };
        let operation = move || {
            self.zones_id.register(id.0);
            for tile in &unique {
                self.cells.insert(*tile, id);
            }
            let events = vec![Zoning::ZoneCreated {
                id,
                label: label.clone(),
                cells: unique.clone(),
            }];
            self.zones.push(Zone::new(id, label, unique, policy));
            events
        };
        Ok((id, operation))
    }
}
