use crate::cultivation::{AssignmentCache, CultivationError};
use crate::math::CellId;
use crate::model::ThingKind;

impl AssignmentCache {
    pub fn put(&mut self, cell: CellId, kind: &ThingKind) {
        match self.entries.get_mut(&cell) {
            Some(name) => {
                name.clear();
                name.push_str(&kind.name);
            }
            None => {
                self.entries.insert(cell, kind.name.clone());
            }
        }
    }

    pub fn get(&self, cell: CellId) -> Option<&str> {
        self.entries.get(&cell).map(String::as_str)
    }

    pub fn evict(&mut self, cell: CellId) -> Option<String> {
        self.entries.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>, CultivationError> {
        let mut entries: Vec<(CellId, String)> = self
            .entries
            .iter()
            .map(|(cell, name)| (*cell, name.clone()))
            .collect();
        entries.sort_by_key(|(cell, _)| *cell);
        let config = bincode::config::standard();
        let data = bincode::encode_to_vec(entries, config)?;
        Ok(data)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, CultivationError> {
        let config = bincode::config::standard();
        let (entries, _): (Vec<(CellId, String)>, usize) =
            bincode::decode_from_slice(data, config)?;
        Ok(Self {
            entries: entries.into_iter().collect(),
        })
    }
}
