use crate::collections::Shared;
use crate::model::ThingKind;
use crate::zoning::{FilterState, PlantFilter, ZonePolicy, Zoning, ZoningDomain};

impl ZoningDomain {
    /// Builds default filters of gardens that were never configured.
    pub fn activate_gardens(&mut self, flora: &[Shared<ThingKind>]) -> Vec<Zoning> {
        let mut events = vec![];
        for zone in self.zones.iter_mut() {
            if let ZonePolicy::Garden(garden) = &mut zone.policy {
                if let FilterState::Uninitialized = garden.filter {
                    let filter = PlantFilter::from_flora(flora);
                    events.push(Zoning::FilterChanged {
                        id: zone.id,
                        allowed: filter.names(),
                    });
                    garden.filter = FilterState::Built(filter);
                }
            }
        }
        events
    }
}
