// Atmosphere constants (1976 US Standard Atmosphere)
pub const G0: f64 = 9.80665; // Standard gravity (m/s²)
pub const R_UNIVERSAL: f64 = 8.3144598; // Universal gas constant (J/(mol·K))
pub const M_AIR: f64 = 0.0289644; // Molar mass of dry air (kg/mol)
pub const RS_AIR: f64 = R_UNIVERSAL / M_AIR; // Specific gas constant for air (J/(kg·K))
pub const GAMMA_AIR: f64 = 1.4; // Ratio of specific heats
pub const P_SEA_LEVEL: f64 = 101325.0; // Sea-level static pressure (Pa)

// Equations of motion
pub const G_EOM: f64 = 9.81; // Gravity as used in the linearized equations of motion (m/s²)

// Math
pub const PI: f64 = std::f64::consts::PI;
pub const RAD2DEG: f64 = 180.0 / PI;
pub const DEG2RAD: f64 = PI / 180.0;
