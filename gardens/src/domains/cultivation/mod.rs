pub use catalog::*;
pub use domain::*;

mod assignments;
mod catalog;
mod domain;
