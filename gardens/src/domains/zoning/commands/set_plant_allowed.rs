use crate::collections::Shared;
use crate::cultivation::EligibilitySet;
use crate::model::ThingKind;
use crate::zoning::{ZoneId, ZonePolicy, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    /// Edits a garden filter. Only plants eligible in the region may be
    /// allowed, any plant may be disallowed.
    pub fn set_plant_allowed<'operation>(
        &'operation mut self,
        id: ZoneId,
        kind: &Shared<ThingKind>,
        allow: bool,
        eligible: &EligibilitySet,
    ) -> Result<impl FnOnce() -> Vec<Zoning> + 'operation, ZoningError> {
        if allow && !eligible.contains(kind) {
            return Err(ZoningError::PlantNotEligible {
                name: kind.name.clone(),
            });
        }
        let garden = match &mut self.get_zone_mut(id)?.policy {
            ZonePolicy::Garden(garden) => garden,
            ZonePolicy::Growing(_) => return Err(ZoningError::NotGarden { id }),
        };
        let kind = kind.clone();
        let command = move || {
            let allowed = garden.edit_filter(|filter| {
                filter.set_allow(&kind, allow);
                filter.names()
            });
            vec![Zoning::FilterChanged { id, allowed }]
        };
        Ok(command)
    }
}
