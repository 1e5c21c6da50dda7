use xxhash_rust::xxh32::xxh32;

use crate::collections::Shared;
use crate::cultivation::EligibilitySet;
use crate::model::{Knowledge, ThingKind};

pub const FINGERPRINT_SEED: i32 = 487;
pub const FINGERPRINT_MODIFIER: i32 = 31;

impl EligibilitySet {
    /// Scans every known definition and keeps plants. Unless restricted
    /// plants are allowed, only plants that need some skill to sow remain.
    pub fn compute(known: &Knowledge, allow_restricted: bool) -> Self {
        let mut plants: Vec<Shared<ThingKind>> = vec![];
        for kind in known.things.iter() {
            if !kind.is_plant() {
                continue;
            }
            let sow_min_skill = kind.plant.as_ref().map(|plant| plant.sow_min_skill);
            if !allow_restricted && sow_min_skill.unwrap_or(0) == 0 {
                continue;
            }
            if !plants.iter().any(|plant| plant.id == kind.id) {
                plants.push(kind.clone());
            }
        }
        let fingerprint = fingerprint(plants.iter().map(|plant| plant.name.as_str()));
        Self {
            plants,
            fingerprint,
        }
    }

    pub fn contains(&self, kind: &ThingKind) -> bool {
        self.plants.iter().any(|plant| plant.id == kind.id)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

/// Order sensitive rolling hash of plant names.
pub fn fingerprint<'a, I>(names: I) -> i32
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().fold(FINGERPRINT_SEED, |hash, name| {
        let item = xxh32(name.as_bytes(), 0) as i32;
        hash.wrapping_mul(FINGERPRINT_MODIFIER).wrapping_add(item)
    })
}
