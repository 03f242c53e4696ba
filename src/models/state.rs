use nalgebra as na;

/// Longitudinal perturbation state about the trim condition:
/// [Δu (m/s), Δα (rad), Δq (rad/s), Δθ (rad)].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudinalState {
    pub airspeed: f64,   // Δu (m/s)
    pub alpha: f64,      // Δα (rad)
    pub pitch_rate: f64, // Δq (rad/s)
    pub pitch: f64,      // Δθ (rad)
}

impl LongitudinalState {
    pub fn new(airspeed: f64, alpha: f64, pitch_rate: f64, pitch: f64) -> Self {
        LongitudinalState {
            airspeed,
            alpha,
            pitch_rate,
            pitch,
        }
    }

    pub fn zero() -> Self {
        LongitudinalState {
            airspeed: 0.0,
            alpha: 0.0,
            pitch_rate: 0.0,
            pitch: 0.0,
        }
    }

    pub fn to_vector(self) -> na::Vector4<f64> {
        na::Vector4::new(self.airspeed, self.alpha, self.pitch_rate, self.pitch)
    }

    pub fn from_vector(v: &na::Vector4<f64>) -> Self {
        LongitudinalState {
            airspeed: v[0],
            alpha: v[1],
            pitch_rate: v[2],
            pitch: v[3],
        }
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    pub fn is_finite(&self) -> bool {
        self.airspeed.is_finite()
            && self.alpha.is_finite()
            && self.pitch_rate.is_finite()
            && self.pitch.is_finite()
    }
}

impl std::ops::Add for LongitudinalState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        LongitudinalState {
            airspeed: self.airspeed + other.airspeed,
            alpha: self.alpha + other.alpha,
            pitch_rate: self.pitch_rate + other.pitch_rate,
            pitch: self.pitch + other.pitch,
        }
    }
}

impl std::ops::Mul<f64> for LongitudinalState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        LongitudinalState {
            airspeed: self.airspeed * scalar,
            alpha: self.alpha * scalar,
            pitch_rate: self.pitch_rate * scalar,
            pitch: self.pitch * scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vector_round_trip() {
        let state = LongitudinalState::new(1.5, -0.02, 0.3, 0.01);
        let back = LongitudinalState::from_vector(&state.to_vector());
        assert_eq!(state, back);
    }

    #[test]
    fn add_and_scale() {
        let a = LongitudinalState::new(1.0, 2.0, 3.0, 4.0);
        let b = LongitudinalState::new(0.5, -1.0, 0.0, 2.0);
        let sum = a + b * 2.0;
        assert_abs_diff_eq!(sum.airspeed, 2.0);
        assert_abs_diff_eq!(sum.alpha, 0.0);
        assert_abs_diff_eq!(sum.pitch_rate, 3.0);
        assert_abs_diff_eq!(sum.pitch, 8.0);
    }

    #[test]
    fn non_finite_detection() {
        let mut state = LongitudinalState::zero();
        assert!(state.is_finite());
        state.pitch_rate = f64::NAN;
        assert!(!state.is_finite());
        state.pitch_rate = f64::INFINITY;
        assert!(!state.is_finite());
    }
}
