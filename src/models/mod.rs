pub mod aircraft;
pub mod errors;
pub mod state;

pub use state::LongitudinalState;
