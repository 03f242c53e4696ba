use crate::config::coefficients::AeroCoefficients;
use crate::config::trim::SteadyState;
use crate::models::aircraft::AircraftProperties;
use crate::physics::atmosphere::us_standard_atmosphere_1976;

/// Dimensional longitudinal stability derivatives, in body-axis SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionalDerivatives {
    pub x_u: f64,
    pub x_alpha: f64,
    pub z_u: f64,
    pub z_alpha: f64,
    pub z_q: f64,
    pub z_de: f64,
    pub m_alpha: f64,
    pub m_q: f64,
    pub m_alpha_dot: f64,
    pub m_de: f64,
}

/// Converts the non-dimensional coefficients to dimensional derivatives at
/// the trim condition, taking the air density from the standard atmosphere.
///
/// Precondition: `trim.tas > 0` (several conversions divide by TAS); enforced
/// by `SteadyState::validate` before a trim condition reaches this point.
pub fn dimensional_derivatives<T: AircraftProperties>(
    aircraft: &T,
    trim: &SteadyState,
    coeffs: &AeroCoefficients,
) -> DimensionalDerivatives {
    let rho = us_standard_atmosphere_1976(trim.altitude).density;
    dimensional_derivatives_at_density(aircraft, trim, coeffs, rho)
}

/// Same conversion with the air density supplied by the caller, for
/// off-standard-day conditions. Every derivative is linear in the dynamic
/// pressure, so scaling `rho` at fixed TAS scales all ten proportionally.
pub fn dimensional_derivatives_at_density<T: AircraftProperties>(
    aircraft: &T,
    trim: &SteadyState,
    coeffs: &AeroCoefficients,
    rho: f64,
) -> DimensionalDerivatives {
    let m = aircraft.mass();
    let iyy = aircraft.pitch_inertia();
    let s = aircraft.wing_area();
    let c = aircraft.mean_chord();

    let u1 = trim.tas;
    let qbar = 0.5 * rho * u1 * u1;

    // Common factors
    let q_s = qbar * s;
    let mu = m * u1;
    let q_s_c = qbar * s * c;
    let iyy_u = iyy * u1;

    DimensionalDerivatives {
        x_u: -q_s / mu * 2.0 * trim.cd_1,
        x_alpha: q_s / m * (-coeffs.cd_alpha + trim.cl_1),
        z_u: -q_s / (mu * u1) * 2.0 * trim.cl_1,
        z_alpha: q_s / mu * (-coeffs.cl_alpha - trim.cd_1),
        z_q: -q_s_c / (2.0 * mu * u1) * coeffs.cl_q,
        z_de: -q_s / mu * coeffs.cl_de,
        m_alpha: q_s_c / iyy * coeffs.cm_alpha,
        m_q: q_s_c * c / (2.0 * iyy_u) * coeffs.cm_q,
        m_alpha_dot: q_s_c * c / (2.0 * iyy_u) * coeffs.cm_alpha_dot,
        m_de: q_s_c / iyy * coeffs.cm_de,
    }
}
