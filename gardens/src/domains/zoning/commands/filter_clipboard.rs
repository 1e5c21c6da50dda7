use crate::zoning::{FilterClipboard, ZoneId, ZonePolicy, Zoning, ZoningDomain, ZoningError};

impl ZoningDomain {
    pub fn copy_filter(
        &self,
        id: ZoneId,
        clipboard: &mut FilterClipboard,
    ) -> Result<(), ZoningError> {
        let garden = match &self.get_zone(id)?.policy {
            ZonePolicy::Garden(garden) => garden,
            ZonePolicy::Growing(_) => return Err(ZoningError::NotGarden { id }),
        };
        match garden.filter() {
            Some(filter) => clipboard.copy(filter),
            None => clipboard.copy(&Default::default()),
        }
        Ok(())
    }

    pub fn paste_filter<'operation>(
        &'operation mut self,
        id: ZoneId,
        clipboard: &FilterClipboard,
    ) -> Result<impl FnOnce() -> Vec<Zoning> + 'operation, ZoningError> {
        let copied = clipboard.get()?.clone();
        let garden = match &mut self.get_zone_mut(id)?.policy {
            ZonePolicy::Garden(garden) => garden,
            ZonePolicy::Growing(_) => return Err(ZoningError::NotGarden { id }),
        };
        let command = move || {
            let allowed = garden.edit_filter(|filter| {
                filter.copy_allowances_from(&copied);
                filter.names()
            });
            vec![Zoning::FilterChanged { id, allowed }]
        };
        Ok(command)
    }
}
