use crate::zoning::{ZoneId, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    pub fn toggle_sow(
        &mut self,
        id: ZoneId,
    ) -> Result<impl FnOnce() -> Vec<Zoning> + '_, ZoningError> {
        let zone = self.get_zone_mut(id)?;
        let command = move || {
            let allow = !zone.policy.as_plant_to_grow().allow_sow();
            zone.policy.set_allow_sow(allow);
            vec![Zoning::SowToggled { id, allow }]
        };
        Ok(command)
    }
}
