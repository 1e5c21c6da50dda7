pub(crate) use assess_occupant::*;
pub(crate) use is_kept_by_zone::*;
pub(crate) use is_planting_blocked::*;

mod assess_occupant;
mod is_kept_by_zone;
mod is_planting_blocked;
