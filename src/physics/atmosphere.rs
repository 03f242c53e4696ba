use crate::constants::{G0, GAMMA_AIR, P_SEA_LEVEL, RS_AIR};

/// Air properties at a given altitude, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereSample {
    pub temperature: f64,    // K
    pub pressure: f64,       // Pa
    pub density: f64,        // kg/m³
    pub speed_of_sound: f64, // m/s
}

struct Layer {
    base_altitude: f64,    // geopotential altitude of the layer base (m)
    base_temperature: f64, // K
    lapse_rate: f64,       // K/m, zero for isothermal layers
}

const LAYERS: [Layer; 8] = [
    Layer { base_altitude: 0.0, base_temperature: 288.15, lapse_rate: -0.0065 },
    Layer { base_altitude: 11000.0, base_temperature: 216.65, lapse_rate: 0.0 },
    Layer { base_altitude: 20000.0, base_temperature: 216.65, lapse_rate: 0.001 },
    Layer { base_altitude: 32000.0, base_temperature: 228.65, lapse_rate: 0.0028 },
    Layer { base_altitude: 47000.0, base_temperature: 270.65, lapse_rate: 0.0 },
    Layer { base_altitude: 51000.0, base_temperature: 270.65, lapse_rate: -0.0028 },
    Layer { base_altitude: 71000.0, base_temperature: 214.65, lapse_rate: -0.002 },
    Layer { base_altitude: 84852.0, base_temperature: 186.946, lapse_rate: 0.0 },
];

/// 1976 US Standard Atmosphere.
///
/// The layer base pressure is integrated layer-by-layer up from sea level:
/// exponential decay across isothermal layers, a power law in the temperature
/// ratio otherwise, and the same two formulas continue within the target
/// layer. The function is total: altitudes below sea level extrapolate the
/// troposphere layer downward, altitudes at or above the last base (84852 m)
/// extrapolate the isothermal top layer. Callers that need a supported range
/// enforce it at their own boundary.
pub fn us_standard_atmosphere_1976(altitude: f64) -> AtmosphereSample {
    // First layer whose upper bound lies above the altitude, else the top one.
    let mut index = LAYERS.len() - 1;
    for i in 0..LAYERS.len() - 1 {
        if altitude < LAYERS[i + 1].base_altitude {
            index = i;
            break;
        }
    }

    // Pressure at the base of the target layer.
    let mut pressure = P_SEA_LEVEL;
    for i in 0..index {
        let layer = &LAYERS[i];
        let top = LAYERS[i + 1].base_altitude;
        if layer.lapse_rate == 0.0 {
            pressure *= (-G0 * (top - layer.base_altitude) / (RS_AIR * layer.base_temperature)).exp();
        } else {
            let top_temperature =
                layer.base_temperature + layer.lapse_rate * (top - layer.base_altitude);
            pressure *=
                (top_temperature / layer.base_temperature).powf(-G0 / (RS_AIR * layer.lapse_rate));
        }
    }

    // Temperature and pressure at the requested altitude.
    let layer = &LAYERS[index];
    let temperature;
    if layer.lapse_rate == 0.0 {
        temperature = layer.base_temperature;
        pressure *= (-G0 * (altitude - layer.base_altitude) / (RS_AIR * temperature)).exp();
    } else {
        temperature = layer.base_temperature + layer.lapse_rate * (altitude - layer.base_altitude);
        pressure *=
            (temperature / layer.base_temperature).powf(-G0 / (RS_AIR * layer.lapse_rate));
    }

    let density = pressure / (RS_AIR * temperature);
    let speed_of_sound = (GAMMA_AIR * RS_AIR * temperature).sqrt();

    AtmosphereSample {
        temperature,
        pressure,
        density,
        speed_of_sound,
    }
}
