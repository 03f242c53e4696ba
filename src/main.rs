use csv::Writer;
use phugoid::config::aircraft::Cessna182;
use phugoid::config::trim::TrimPreset;
use phugoid::constants::{DEG2RAD, RAD2DEG};
use phugoid::sim::{FixedStepScheduler, SimulationContext};
use serde::Serialize;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

const TICK: f64 = 1.0 / 60.0; // caller tick period (s)
const HOLD_SECONDS: f64 = 1.0; // elevator held deflected for the first second
const RUN_SECONDS: f64 = 90.0;
const ELEVATOR_DEFLECTION_DEG: f64 = -2.0;

#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Time (s)")]
    time: f64,
    #[serde(rename = "Delta u (m/s)")]
    airspeed: f64,
    #[serde(rename = "Delta alpha (deg)")]
    alpha: f64,
    #[serde(rename = "Delta q (deg/s)")]
    pitch_rate: f64,
    #[serde(rename = "Delta theta (deg)")]
    pitch: f64,
    #[serde(rename = "Elevator (deg)")]
    elevator: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    static AIRCRAFT: Cessna182 = Cessna182;
    let mut context = SimulationContext::new(&AIRCRAFT, TrimPreset::Cruise)?;

    let summary = context.trim_summary();
    println!("Trim condition: {}", context.preset());
    println!(
        "  altitude {:.0} m, TAS {:.2} m/s, CL {:.3}, CD {:.3}",
        summary.altitude_m, summary.tas_m_s, summary.cl, summary.cd
    );
    println!(
        "  alpha {:.2} deg, theta {:.2} deg, elevator {:.2} deg",
        summary.alpha_deg, summary.theta_deg, summary.elevator_deg
    );

    println!("Longitudinal modes:");
    for mode in context.modes() {
        println!(
            "  lambda = {:.4} {:+.4}j  omega_n = {:.4} rad/s ({:.4} Hz)  zeta = {:.4}",
            mode.pole.re,
            mode.pole.im,
            mode.natural_frequency,
            mode.frequency_hz(),
            mode.damping_ratio
        );
    }

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let file = File::create(output_dir.join("longitudinal_response.csv"))?;
    let mut writer = Writer::from_writer(file);

    // Elevator doublet: held deflection for the first second, centered after.
    let mut scheduler = FixedStepScheduler::new(context.recommended_dt());
    context.set_elevator(ELEVATOR_DEFLECTION_DEG * DEG2RAD);

    let ticks = (RUN_SECONDS / TICK).round() as usize;
    for _ in 0..ticks {
        if context.elapsed() >= HOLD_SECONDS && context.elevator() != 0.0 {
            context.center_elevator();
        }

        let steps = scheduler.advance(&mut context, TICK)?;
        if steps > 0 {
            let state = context.state();
            writer.serialize(SampleRow {
                time: context.elapsed(),
                airspeed: state.airspeed,
                alpha: state.alpha * RAD2DEG,
                pitch_rate: state.pitch_rate * RAD2DEG,
                pitch: state.pitch * RAD2DEG,
                elevator: context.elevator() * RAD2DEG,
            })?;
        }
    }

    writer.flush()?;
    println!("Simulation data has been written to output/longitudinal_response.csv");

    Ok(())
}
