use log::error;

use crate::host::{Surroundings, Worker};
use crate::math::Tile;
use crate::model::RegionId;
use crate::rules::is_planting_blocked;
use crate::zoning::Zone;
use crate::{Gardens, GardensError};

impl Gardens {
    /// Extends cells a worker considers for cultivation with every garden
    /// cell it can work on. Lazy and restartable, nothing is mutated.
    pub fn potential_work_cells<'a, I>(
        &'a self,
        region: RegionId,
        base: I,
        worker: &'a dyn Worker,
        world: &'a dyn Surroundings,
    ) -> Result<impl Iterator<Item = Tile> + 'a, GardensError>
    where
        I: IntoIterator<Item = Tile>,
        I::IntoIter: 'a,
    {
        let region = self.get_region(region)?;
        let gardens = region
            .zoning
            .zones
            .iter()
            .filter(|zone| zone.is_garden())
            .filter(move |zone| is_workable(zone, worker, world))
            .flat_map(move |zone| {
                zone.cells
                    .iter()
                    .copied()
                    .filter(move |tile| !is_planting_blocked(world, *tile))
            });
        Ok(base.into_iter().chain(gardens))
    }
}

fn is_workable(zone: &Zone, worker: &dyn Worker, world: &dyn Surroundings) -> bool {
    let first = match zone.cells.first() {
        Some(tile) => *tile,
        None => {
            if !zone.empty_reported.replace(true) {
                error!("{} {:?} has no cells, skipped", zone.label, zone.id);
            }
            return false;
        }
    };
    if world.contains_static_fire(&zone.cells) {
        return false;
    }
    worker.can_reach(first, worker.normal_max_danger())
}
