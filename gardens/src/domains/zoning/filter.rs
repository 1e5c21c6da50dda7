use std::collections::BTreeMap;

use crate::collections::Shared;
use crate::math::Random;
use crate::model::{ThingKey, ThingKind};
use crate::zoning::ZoningError;

/// Allow list over plant kinds.
#[derive(Debug, Clone, Default)]
pub struct PlantFilter {
    allowed: BTreeMap<ThingKey, Shared<ThingKind>>,
}

impl PlantFilter {
    /// Default garden filter: every sowable plant of the region's wild flora.
    pub fn from_flora(flora: &[Shared<ThingKind>]) -> Self {
        let mut filter = PlantFilter::default();
        for kind in flora {
            if kind.is_sowable() {
                filter.set_allow(kind, true);
            }
        }
        filter
    }

    #[inline]
    pub fn allows(&self, kind: &ThingKind) -> bool {
        self.allowed.contains_key(&kind.id)
    }

    pub fn set_allow(&mut self, kind: &Shared<ThingKind>, allow: bool) {
        if allow {
            self.allowed.insert(kind.id, kind.clone());
        } else {
            self.allowed.remove(&kind.id);
        }
    }

    pub fn allowed(&self) -> impl Iterator<Item = &Shared<ThingKind>> {
        self.allowed.values()
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Uniformly random allowed kind.
    pub fn choose(&self, random: &mut Random) -> Option<Shared<ThingKind>> {
        let index = random.index(self.allowed.len())?;
        self.allowed.values().nth(index).cloned()
    }

    pub fn copy_allowances_from(&mut self, other: &PlantFilter) {
        self.allowed = other.allowed.clone();
    }

    pub fn names(&self) -> Vec<String> {
        self.allowed.values().map(|kind| kind.name.clone()).collect()
    }
}

/// Single slot holding the last copied garden filter.
#[derive(Default)]
pub struct FilterClipboard {
    copied: Option<PlantFilter>,
}

impl FilterClipboard {
    pub fn has_copied_settings(&self) -> bool {
        self.copied.is_some()
    }

    pub fn copy(&mut self, filter: &PlantFilter) {
        self.copied = Some(filter.clone());
    }

    pub fn get(&self) -> Result<&PlantFilter, ZoningError> {
        self.copied.as_ref().ok_or(ZoningError::NothingCopied)
    }
}
