use std::collections::HashMap;

use crate::collections::Shared;
use crate::math::CellId;
use crate::model::ThingKind;

pub struct CultivationDomain {
    pub eligible: EligibilitySet,
    pub assignments: AssignmentCache,
}

impl CultivationDomain {
    pub fn new(eligible: EligibilitySet) -> Self {
        Self {
            eligible,
            assignments: AssignmentCache::default(),
        }
    }
}

/// Plant kinds a garden may grow in a region, in definition order.
#[derive(Debug, Clone)]
pub struct EligibilitySet {
    pub plants: Vec<Shared<ThingKind>>,
    pub fingerprint: i32,
}

/// Last crop decided for each cell, stored by kind name.
///
/// Entries are hints: nothing here checks that a name still resolves or is
/// still allowed, callers validate on every read.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AssignmentCache {
    pub(crate) entries: HashMap<CellId, String>,
}

#[derive(Debug)]
pub enum CultivationError {
    Encode(bincode::error::EncodeError),
    Decode(bincode::error::DecodeError),
}

impl From<bincode::error::EncodeError> for CultivationError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::Encode(error)
    }
}

impl From<bincode::error::DecodeError> for CultivationError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::Decode(error)
    }
}
