pub use random::*;
pub use tile::*;

mod random;
mod tile;
