use crate::constants::PI;
use nalgebra as na;
use nalgebra::Normed;

/// Eigenvalues of the dynamics matrix: the system poles.
pub fn poles(a: &na::Matrix4<f64>) -> Vec<na::Complex<f64>> {
    a.complex_eigenvalues().iter().copied().collect()
}

/// A characteristic mode of the linear model. Oscillatory modes carry one
/// representative pole of the conjugate pair (the one with non-negative
/// imaginary part); real poles describe aperiodic motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    pub pole: na::Complex<f64>,
    pub natural_frequency: f64, // ω_n = |λ| (rad/s)
    pub damping_ratio: f64,     // ζ = -Re(λ) / ω_n
}

impl Mode {
    fn from_pole(pole: na::Complex<f64>) -> Self {
        let natural_frequency = pole.norm();
        let damping_ratio = if natural_frequency > 0.0 {
            -pole.re / natural_frequency
        } else {
            0.0
        };
        Mode {
            pole,
            natural_frequency,
            damping_ratio,
        }
    }

    pub fn is_stable(&self) -> bool {
        self.pole.re < 0.0
    }

    pub fn is_oscillatory(&self) -> bool {
        self.pole.im != 0.0
    }

    pub fn frequency_hz(&self) -> f64 {
        self.natural_frequency / (2.0 * PI)
    }

    /// Period of the damped oscillation, if the mode oscillates at all.
    pub fn damped_period(&self) -> Option<f64> {
        if self.is_oscillatory() {
            Some(2.0 * PI / self.pole.im.abs())
        } else {
            None
        }
    }
}

/// Modes of the dynamics matrix, sorted by natural frequency. For a
/// conventional stable longitudinal model this yields the lightly damped
/// phugoid first and the heavily damped short period second.
pub fn modes(a: &na::Matrix4<f64>) -> Vec<Mode> {
    let mut modes: Vec<Mode> = poles(a)
        .into_iter()
        .filter(|p| p.im >= 0.0) // one representative per conjugate pair
        .map(Mode::from_pole)
        .collect();
    modes.sort_by(|a, b| a.natural_frequency.total_cmp(&b.natural_frequency));
    modes
}
