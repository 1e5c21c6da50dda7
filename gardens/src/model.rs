use serde::{Deserialize, Serialize};

use crate::collections::{Dictionary, Shared};
use crate::cultivation::{CultivationDomain, EligibilitySet};
use crate::math::Tile;
use crate::zoning::ZoningDomain;

#[derive(Default)]
pub struct Knowledge {
    pub things: Dictionary<ThingKey, ThingKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThingKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThingCategory {
    Plant,
    Item,
    Building,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantProperties {
    pub sowable: bool,
    pub sow_min_skill: u8,
    pub fertility_min: f32,
}

#[derive(Debug)]
pub struct ThingKind {
    pub id: ThingKey,
    pub name: String,
    pub category: ThingCategory,
    pub plant: Option<PlantProperties>,
    pub blocks_planting: bool,
    pub haulable: bool,
}

impl ThingKind {
    #[inline]
    pub fn is_plant(&self) -> bool {
        self.category == ThingCategory::Plant
    }

    pub fn is_sowable(&self) -> bool {
        self.plant.as_ref().map(|plant| plant.sowable).unwrap_or(false)
    }
}

/// Host object placed in a region: plant, item, building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThingId(pub usize);

#[derive(Debug, Clone)]
pub struct Thing {
    pub id: ThingId,
    pub kind: Shared<ThingKind>,
    pub position: Tile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Plants sowable without any skill are eligible for gardens too.
    pub allow_all_plants: bool,
    pub debug_print: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_all_plants: true,
            debug_print: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(pub usize);

pub struct Region {
    pub id: RegionId,
    pub size: [usize; 2],
    /// Wild flora of the region, seeds default garden filters.
    pub ambient_flora: Vec<Shared<ThingKind>>,
    pub cultivation: CultivationDomain,
    pub zoning: ZoningDomain,
}

impl Region {
    pub fn new(
        id: RegionId,
        size: [usize; 2],
        ambient_flora: Vec<Shared<ThingKind>>,
        eligible: EligibilitySet,
    ) -> Self {
        Self {
            id,
            size,
            ambient_flora,
            cultivation: CultivationDomain::new(eligible),
            zoning: ZoningDomain::default(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.size[0]
    }
}
