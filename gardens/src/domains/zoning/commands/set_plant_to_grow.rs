use crate::collections::Shared;
use crate::model::ThingKind;
use crate::zoning::{ZoneId, ZonePolicy, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    pub fn set_plant_to_grow<'operation>(
        &'operation mut self,
        id: ZoneId,
        plant: Option<Shared<ThingKind>>,
    ) -> Result<impl FnOnce() -> Vec<Zoning> + 'operation, ZoningError> {
        let growing = match &mut self.get_zone_mut(id)?.policy {
            ZonePolicy::Growing(growing) => growing,
            ZonePolicy::Garden(_) => return Err(ZoningError::NotGrowingZone { id }),
        };
        let command = move || {
            let name = plant.as_ref().map(|plant| plant.name.clone());
            growing.plant = plant;
            vec![Zoning::PlantToGrowChanged { id, plant: name }]
        };
        Ok(command)
    }
}
