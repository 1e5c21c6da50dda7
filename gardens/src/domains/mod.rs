pub mod cultivation;
pub mod zoning;
