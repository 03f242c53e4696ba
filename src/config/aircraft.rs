use crate::models::aircraft::AircraftProperties;

// Representative of a Cessna 182, all quantities in SI units.
// Reference: Jan Roskam - Airplane Flight Dynamics and Automatic Flight
// Controls (2001), Appendix B1.
pub struct Cessna182;

impl Cessna182 {
    pub const MASS: f64 = 1202.0; // kg
    pub const IYY: f64 = 1825.0; // kg·m²
    pub const WING_AREA: f64 = 16.16; // m²
    pub const MEAN_CHORD: f64 = 1.5; // m
}

impl AircraftProperties for Cessna182 {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn pitch_inertia(&self) -> f64 {
        Self::IYY
    }

    fn wing_area(&self) -> f64 {
        Self::WING_AREA
    }

    fn mean_chord(&self) -> f64 {
        Self::MEAN_CHORD
    }
}
