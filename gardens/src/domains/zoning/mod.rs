pub use domain::*;
pub use filter::*;
pub use policy::*;

mod commands;
mod domain;
mod filter;
mod policy;
mod queries;
