use crate::constants::RAD2DEG;
use crate::models::errors::ModelErrors;
use std::fmt;

/// Steady-state (trim) flight condition the perturbation model is linearized
/// about. All quantities in SI units, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyState {
    pub altitude: f64, // m
    pub tas: f64,      // true airspeed (m/s)
    pub alpha: f64,    // trim angle of attack (rad)
    pub cl_1: f64,     // trim lift coefficient
    pub cd_1: f64,     // trim drag coefficient
    pub theta: f64,    // trim pitch angle (rad)
    pub de: f64,       // trim elevator deflection (rad)
}

impl SteadyState {
    /// Boundary check before the condition reaches the model-construction
    /// functions, which divide by TAS and assume a non-negative altitude.
    pub fn validate(&self) -> Result<(), ModelErrors> {
        if !(self.tas > 0.0) {
            return Err(ModelErrors::InvalidAirspeed(self.tas));
        }
        if self.altitude < 0.0 {
            return Err(ModelErrors::InvalidAltitude(self.altitude));
        }
        Ok(())
    }

    pub fn summary(&self) -> TrimSummary {
        TrimSummary {
            altitude_m: self.altitude,
            tas_m_s: self.tas,
            alpha_deg: self.alpha * RAD2DEG,
            cl: self.cl_1,
            cd: self.cd_1,
            theta_deg: self.theta * RAD2DEG,
            elevator_deg: self.de * RAD2DEG,
        }
    }
}

/// Display-ready trim condition, angles converted to degrees.
#[derive(Debug, Clone, Copy)]
pub struct TrimSummary {
    pub altitude_m: f64,
    pub tas_m_s: f64,
    pub alpha_deg: f64,
    pub cl: f64,
    pub cd: f64,
    pub theta_deg: f64,
    pub elevator_deg: f64,
}

const CRUISE: SteadyState = SteadyState {
    altitude: 1524.0,
    tas: 67.0,
    alpha: 0.0,
    cl_1: 0.307,
    cd_1: 0.032,
    theta: 0.0,
    de: 0.0,
};

const CLIMB: SteadyState = SteadyState {
    altitude: 0.0,
    tas: 40.7,
    alpha: 0.0942478,
    cl_1: 0.719,
    cd_1: 0.057,
    theta: 0.0942478,
    de: 0.0,
};

const APPROACH: SteadyState = SteadyState {
    altitude: 0.0,
    tas: 32.6,
    alpha: 0.0698132,
    cl_1: 1.120,
    cd_1: 0.132,
    theta: 0.0698132,
    de: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimPreset {
    Cruise,
    Climb,
    Approach,
}

impl TrimPreset {
    pub const ALL: [TrimPreset; 3] = [TrimPreset::Cruise, TrimPreset::Climb, TrimPreset::Approach];

    pub fn steady_state(self) -> SteadyState {
        match self {
            TrimPreset::Cruise => CRUISE,
            TrimPreset::Climb => CLIMB,
            TrimPreset::Approach => APPROACH,
        }
    }

    /// Integration step small enough for the fastest mode of the preset's
    /// model under explicit Euler.
    pub fn recommended_dt(self) -> f64 {
        match self {
            TrimPreset::Cruise => 0.01,
            TrimPreset::Climb | TrimPreset::Approach => 0.004,
        }
    }
}

impl fmt::Display for TrimPreset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrimPreset::Cruise => write!(f, "Cruise"),
            TrimPreset::Climb => write!(f, "Climb"),
            TrimPreset::Approach => write!(f, "Approach"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn presets_are_valid() {
        for preset in TrimPreset::ALL {
            assert!(preset.steady_state().validate().is_ok(), "{}", preset);
        }
    }

    #[test]
    fn zero_airspeed_is_rejected() {
        let mut trim = TrimPreset::Cruise.steady_state();
        trim.tas = 0.0;
        assert!(matches!(
            trim.validate(),
            Err(ModelErrors::InvalidAirspeed(_))
        ));
        trim.tas = -10.0;
        assert!(matches!(
            trim.validate(),
            Err(ModelErrors::InvalidAirspeed(_))
        ));
    }

    #[test]
    fn negative_altitude_is_rejected() {
        let mut trim = TrimPreset::Cruise.steady_state();
        trim.altitude = -1.0;
        assert!(matches!(
            trim.validate(),
            Err(ModelErrors::InvalidAltitude(_))
        ));
    }

    #[test]
    fn summary_converts_angles_to_degrees() {
        let summary = TrimPreset::Climb.steady_state().summary();
        assert_abs_diff_eq!(summary.alpha_deg, 5.4, epsilon = 0.01);
        assert_abs_diff_eq!(summary.theta_deg, 5.4, epsilon = 0.01);
        assert_abs_diff_eq!(summary.elevator_deg, 0.0);
    }
}
