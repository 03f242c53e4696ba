use std::fmt;

// Editable range enforced on write.
pub const COEFF_MIN: f64 = -20.0;
pub const COEFF_MAX: f64 = 20.0;

/// Non-dimensional longitudinal aerodynamic coefficients. The six
/// angle-of-attack/pitch-rate derivatives are runtime-editable; the elevator
/// control derivatives are fixed aircraft data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroCoefficients {
    pub cd_alpha: f64,
    pub cl_alpha: f64,
    pub cl_q: f64,
    pub cm_alpha: f64,
    pub cm_alpha_dot: f64,
    pub cm_q: f64,
    pub cl_de: f64,
    pub cm_de: f64,
}

impl Default for AeroCoefficients {
    // Cessna 182 cruise values (Roskam, Appendix B1)
    fn default() -> Self {
        AeroCoefficients {
            cd_alpha: 0.121,
            cl_alpha: 4.41,
            cl_q: 3.9,
            cm_alpha: -0.613,
            cm_alpha_dot: -7.27,
            cm_q: -12.4,
            cl_de: 0.43,
            cm_de: -1.122,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientId {
    CdAlpha,
    ClAlpha,
    ClQ,
    CmAlpha,
    CmAlphaDot,
    CmQ,
}

impl CoefficientId {
    pub const ALL: [CoefficientId; 6] = [
        CoefficientId::CdAlpha,
        CoefficientId::ClAlpha,
        CoefficientId::ClQ,
        CoefficientId::CmAlpha,
        CoefficientId::CmAlphaDot,
        CoefficientId::CmQ,
    ];
}

impl fmt::Display for CoefficientId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoefficientId::CdAlpha => write!(f, "CD_a"),
            CoefficientId::ClAlpha => write!(f, "CL_a"),
            CoefficientId::ClQ => write!(f, "CL_q"),
            CoefficientId::CmAlpha => write!(f, "Cm_a"),
            CoefficientId::CmAlphaDot => write!(f, "Cm_adot"),
            CoefficientId::CmQ => write!(f, "Cm_q"),
        }
    }
}

impl AeroCoefficients {
    pub fn get(&self, id: CoefficientId) -> f64 {
        match id {
            CoefficientId::CdAlpha => self.cd_alpha,
            CoefficientId::ClAlpha => self.cl_alpha,
            CoefficientId::ClQ => self.cl_q,
            CoefficientId::CmAlpha => self.cm_alpha,
            CoefficientId::CmAlphaDot => self.cm_alpha_dot,
            CoefficientId::CmQ => self.cm_q,
        }
    }

    /// Writes an editable coefficient, clamped to [COEFF_MIN, COEFF_MAX].
    /// Returns the value actually stored.
    pub fn set(&mut self, id: CoefficientId, value: f64) -> f64 {
        let value = value.clamp(COEFF_MIN, COEFF_MAX);
        match id {
            CoefficientId::CdAlpha => self.cd_alpha = value,
            CoefficientId::ClAlpha => self.cl_alpha = value,
            CoefficientId::ClQ => self.cl_q = value,
            CoefficientId::CmAlpha => self.cm_alpha = value,
            CoefficientId::CmAlphaDot => self.cm_alpha_dot = value,
            CoefficientId::CmQ => self.cm_q = value,
        }
        value
    }

    /// Restores the six editable coefficients to their defaults; the control
    /// derivatives are untouched.
    pub fn reset(&mut self) {
        let defaults = AeroCoefficients::default();
        for id in CoefficientId::ALL {
            self.set(id, defaults.get(id));
        }
    }
}
