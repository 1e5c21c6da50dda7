use std::cell::Cell;
use std::collections::HashMap;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::collections::{Sequence, Shared};
use crate::math::Tile;
use crate::model::ThingKind;
use crate::zoning::{PlantFilter, PlantToGrow};

#[derive(Default)]
pub struct ZoningDomain {
    pub zones: Vec<Zone>,
    pub zones_id: Sequence,
    pub(crate) cells: HashMap<Tile, ZoneId>,
}

impl ZoningDomain {
    pub fn load_zones(&mut self, zones: Vec<Zone>) {
        for zone in zones {
            self.zones_id.register(zone.id.0);
            for tile in &zone.cells {
                self.cells.insert(*tile, zone.id);
            }
            self.zones.push(zone);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub usize);

pub struct Zone {
    pub id: ZoneId,
    pub label: String,
    pub cells: Vec<Tile>,
    pub policy: ZonePolicy,
    pub(crate) empty_reported: Cell<bool>,
}

impl Zone {
    pub fn new(id: ZoneId, label: String, cells: Vec<Tile>, policy: ZonePolicy) -> Self {
        Self {
            id,
            label,
            cells,
            policy,
            empty_reported: Cell::new(false),
        }
    }

    pub fn is_garden(&self) -> bool {
        matches!(self.policy, ZonePolicy::Garden(_))
    }

    /// Whether the zone was already reported as having no cells.
    pub fn empty_reported(&self) -> bool {
        self.empty_reported.get()
    }
}

/// Decides what grows in a zone. Both variants are driven through
/// [`PlantToGrow`], the sowing logic never matches on them.
pub enum ZonePolicy {
    Garden(Garden),
    Growing(GrowingZone),
}

impl ZonePolicy {
    pub fn as_plant_to_grow(&self) -> &dyn PlantToGrow {
        match self {
            ZonePolicy::Garden(garden) => garden,
            ZonePolicy::Growing(growing) => growing,
        }
    }

    pub(crate) fn set_allow_sow(&mut self, allow: bool) {
        match self {
            ZonePolicy::Garden(garden) => garden.allow_sow = allow,
            ZonePolicy::Growing(growing) => growing.allow_sow = allow,
        }
    }

    pub(crate) fn set_allow_cut(&mut self, allow: bool) {
        match self {
            ZonePolicy::Garden(garden) => garden.allow_cut = allow,
            ZonePolicy::Growing(growing) => growing.allow_cut = allow,
        }
    }
}

/// Garden filter is built once, on zone activation, never on first access.
#[derive(Debug, Clone)]
pub enum FilterState {
    Uninitialized,
    Built(PlantFilter),
}

pub struct Garden {
    pub filter: FilterState,
    pub allow_sow: bool,
    pub allow_cut: bool,
}

impl Garden {
    pub fn new(filter: PlantFilter) -> Self {
        Self {
            filter: FilterState::Built(filter),
            allow_sow: true,
            allow_cut: true,
        }
    }

    pub fn filter(&self) -> Option<&PlantFilter> {
        match &self.filter {
            FilterState::Built(filter) => Some(filter),
            FilterState::Uninitialized => None,
        }
    }

    /// Applies an edit to the filter, an uninitialized one starts empty.
    pub(crate) fn edit_filter<R>(&mut self, edit: impl FnOnce(&mut PlantFilter) -> R) -> R {
        let mut filter = match mem::replace(&mut self.filter, FilterState::Uninitialized) {
            FilterState::Built(filter) => filter,
            FilterState::Uninitialized => PlantFilter::default(),
        };
        let result = edit(&mut filter);
        self.filter = FilterState::Built(filter);
        result
    }
}

/// Regular growing zone with one player chosen plant.
pub struct GrowingZone {
    pub plant: Option<Shared<ThingKind>>,
    pub allow_sow: bool,
    pub allow_cut: bool,
}

impl GrowingZone {
    pub fn new(plant: Option<Shared<ThingKind>>) -> Self {
        Self {
            plant,
            allow_sow: true,
            allow_cut: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Zoning {
    ZoneCreated {
        id: ZoneId,
        label: String,
        cells: Vec<Tile>,
    },
    ZoneRemoved {
        id: ZoneId,
        cells: Vec<Tile>,
    },
    CellsRemoved {
        id: ZoneId,
        cells: Vec<Tile>,
    },
    SowToggled {
        id: ZoneId,
        allow: bool,
    },
    CutToggled {
        id: ZoneId,
        allow: bool,
    },
    FilterChanged {
        id: ZoneId,
        allowed: Vec<String>,
    },
    PlantToGrowChanged {
        id: ZoneId,
        plant: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoningError {
    ZoneNotFound { id: ZoneId },
    NotGarden { id: ZoneId },
    NotGrowingZone { id: ZoneId },
    CellOutsideRegion { tile: Tile },
    CellAlreadyZoned { tile: Tile, zone: ZoneId },
    CellNotInZone { tile: Tile, zone: ZoneId },
    PlantNotEligible { name: String },
    NoEligibleCrop,
    NothingCopied,
}
