use crate::config::coefficients::AeroCoefficients;
use crate::config::trim::SteadyState;
use crate::constants::G_EOM;
use crate::models::aircraft::AircraftProperties;
use crate::physics::derivatives::{dimensional_derivatives, DimensionalDerivatives};
use nalgebra as na;

/// Linear longitudinal model ẋ = A·x + B·u for x = [Δu, Δα, Δq, Δθ] and the
/// elevator deflection u. Always constructed as a pair and replaced
/// wholesale, never mutated entry-by-entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpaceModel {
    pub a: na::Matrix4<f64>,
    pub b: na::Vector4<f64>,
}

impl StateSpaceModel {
    pub fn is_finite(&self) -> bool {
        self.a.iter().all(|v| v.is_finite()) && self.b.iter().all(|v| v.is_finite())
    }
}

pub fn state_space_model<T: AircraftProperties>(
    aircraft: &T,
    trim: &SteadyState,
    coeffs: &AeroCoefficients,
) -> StateSpaceModel {
    let derivs = dimensional_derivatives(aircraft, trim, coeffs);
    state_space_from_dimensional(trim, &derivs)
}

pub fn state_space_from_dimensional(
    trim: &SteadyState,
    d: &DimensionalDerivatives,
) -> StateSpaceModel {
    let u1 = trim.tas;
    let w1 = u1 * trim.alpha; // trim vertical velocity component
    let theta1 = trim.theta;

    // Row 3 couples the pitch-rate dynamics to the angle-of-attack rate
    // through the downwash-lag term Madot, so it reuses the row-2 entries.
    let a = na::Matrix4::new(
        d.x_u,
        d.x_alpha,
        -w1,
        -G_EOM * theta1.cos(),
        d.z_u,
        d.z_alpha,
        1.0 + d.z_q,
        -G_EOM * theta1.sin() / u1,
        d.z_u * d.m_alpha_dot,
        d.m_alpha + d.z_alpha * d.m_alpha_dot,
        d.m_q + (1.0 + d.z_q) * d.m_alpha_dot,
        -G_EOM * theta1.sin() / u1 * d.m_alpha_dot,
        0.0,
        0.0,
        1.0,
        0.0,
    );

    let b = na::Vector4::new(0.0, d.z_de, d.m_de + d.z_de * d.m_alpha_dot, 0.0);

    StateSpaceModel { a, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::aircraft::Cessna182;
    use crate::config::trim::TrimPreset;
    use approx::assert_abs_diff_eq;

    #[test]
    fn assembly_is_idempotent() {
        let trim = TrimPreset::Cruise.steady_state();
        let coeffs = AeroCoefficients::default();
        let first = state_space_model(&Cessna182, &trim, &coeffs);
        let second = state_space_model(&Cessna182, &trim, &coeffs);
        assert_eq!(first.a, second.a);
        assert_eq!(first.b, second.b);
    }

    #[test]
    fn cruise_matrix_structure() {
        let trim = TrimPreset::Cruise.steady_state();
        let coeffs = AeroCoefficients::default();
        let d = dimensional_derivatives(&Cessna182, &trim, &coeffs);
        let model = state_space_from_dimensional(&trim, &d);

        // Level trim: w1 = 0, theta = 0
        assert_eq!(model.a[(0, 2)], 0.0);
        assert_eq!(model.a[(0, 3)], -crate::constants::G_EOM);
        assert_eq!(model.a[(1, 3)], 0.0);

        assert_eq!(model.a[(0, 0)], d.x_u);
        assert_eq!(model.a[(1, 2)], 1.0 + d.z_q);
        assert_eq!(model.a[(2, 0)], d.z_u * d.m_alpha_dot);
        assert_eq!(model.a[(2, 1)], d.m_alpha + d.z_alpha * d.m_alpha_dot);
        assert_eq!(model.a[(2, 2)], d.m_q + (1.0 + d.z_q) * d.m_alpha_dot);

        // Kinematic row: Δθ' = Δq
        assert_eq!(model.a[(3, 0)], 0.0);
        assert_eq!(model.a[(3, 1)], 0.0);
        assert_eq!(model.a[(3, 2)], 1.0);
        assert_eq!(model.a[(3, 3)], 0.0);

        assert_eq!(model.b[0], 0.0);
        assert_eq!(model.b[1], d.z_de);
        assert_eq!(model.b[2], d.m_de + d.z_de * d.m_alpha_dot);
        assert_eq!(model.b[3], 0.0);
    }

    #[test]
    fn climb_trim_populates_gravity_terms() {
        let trim = TrimPreset::Climb.steady_state();
        let coeffs = AeroCoefficients::default();
        let model = state_space_model(&Cessna182, &trim, &coeffs);

        // Non-zero trim pitch feeds gravity into columns 3 and 4.
        assert_abs_diff_eq!(
            model.a[(0, 2)],
            -trim.tas * trim.alpha,
            epsilon = 1e-12
        );
        assert!(model.a[(1, 3)] < 0.0);
        assert_abs_diff_eq!(
            model.a[(0, 3)],
            -crate::constants::G_EOM * trim.theta.cos(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn assembled_model_is_finite() {
        for preset in TrimPreset::ALL {
            let model =
                state_space_model(&Cessna182, &preset.steady_state(), &AeroCoefficients::default());
            assert!(model.is_finite(), "{}", preset);
        }
    }
}
