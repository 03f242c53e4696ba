pub mod atmosphere;
pub mod derivatives;
pub mod dynamics;
pub mod modes;
pub mod state_space;
