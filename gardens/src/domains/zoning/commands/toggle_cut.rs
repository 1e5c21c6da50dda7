use crate::zoning::{ZoneId, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    pub fn toggle_cut(
        &mut self,
        id: ZoneId,
    ) -> Result<impl FnOnce() -> Vec<Zoning> + '_, ZoningError> {
        let zone = self.get_zone_mut(id)?;
        let command = move || {
            let allow = !zone.policy.as_plant_to_grow().allow_cut();
            zone.policy.set_allow_cut(allow);
            vec![Zoning::CutToggled { id, allow }]
        };
        Ok(command)
    }
}
