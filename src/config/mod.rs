pub mod aircraft;
pub mod coefficients;
pub mod trim;
