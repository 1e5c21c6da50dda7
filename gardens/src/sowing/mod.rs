use std::fmt::{Display, Formatter};

use crate::math::Tile;
use crate::model::{ThingId, ThingKey};

mod job_on_cell;
mod work_cells;

/// The single job a worker gets for a cell this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Sowing {
    Nothing,
    Cut { plant: ThingId },
    HaulAside { thing: ThingId },
    Sow { tile: Tile, plant: ThingKey },
    Blocked(JobFailReason),
}

/// Why a worker can not sow now, shown to the player, retried later.
#[derive(Debug, Clone, PartialEq)]
pub enum JobFailReason {
    UnderRequiredFertility { required: f32 },
    UnderAllowedSkill { required: u8 },
    NotGrowingSeason,
    CannotMoveThing { thing: ThingId },
    RefusesPlantCut { plant: ThingId },
}

impl Display for JobFailReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JobFailReason::UnderRequiredFertility { required } => {
                write!(f, "Under required fertility ({:.0}%)", required * 100.0)
            }
            JobFailReason::UnderAllowedSkill { required } => {
                write!(f, "Under allowed skill ({})", required)
            }
            JobFailReason::NotGrowingSeason => write!(f, "Not growing season"),
            JobFailReason::CannotMoveThing { thing } => {
                write!(f, "Can not move thing {:?}", thing)
            }
            JobFailReason::RefusesPlantCut { plant } => {
                write!(f, "Refuses to cut plant {:?}", plant)
            }
        }
    }
}
