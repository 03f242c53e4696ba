pub trait AircraftProperties {
    fn mass(&self) -> f64;
    fn pitch_inertia(&self) -> f64;
    fn wing_area(&self) -> f64;
    fn mean_chord(&self) -> f64;
}
