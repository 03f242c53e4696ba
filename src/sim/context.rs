use crate::config::coefficients::{AeroCoefficients, CoefficientId};
use crate::config::trim::{SteadyState, TrimPreset, TrimSummary};
use crate::integrators::euler::ForwardEuler;
use crate::models::aircraft::AircraftProperties;
use crate::models::errors::ModelErrors;
use crate::models::LongitudinalState;
use crate::physics::dynamics::LongitudinalDynamics;
use crate::physics::modes::{self, Mode};
use crate::physics::state_space::{state_space_model, StateSpaceModel};
use crate::sim::history::StateHistory;

const HISTORY_SECONDS: f64 = 60.0;

/// Owner of the complete simulation: trim selection, coefficient set, the
/// current {A, B} pair with its modes, the perturbation state, and the held
/// elevator input. Every edit rebuilds the model and its modes together, so
/// a reader never observes A from one coefficient set next to B from another.
pub struct SimulationContext<'a, T: AircraftProperties> {
    aircraft: &'a T,
    preset: TrimPreset,
    trim: SteadyState,
    coeffs: AeroCoefficients,
    model: StateSpaceModel,
    modes: Vec<Mode>,
    state: LongitudinalState,
    elevator: f64,
    elapsed: f64,
    history: StateHistory,
}

impl<'a, T: AircraftProperties> SimulationContext<'a, T> {
    pub fn new(aircraft: &'a T, preset: TrimPreset) -> Result<Self, ModelErrors> {
        let trim = preset.steady_state();
        trim.validate()?;
        let coeffs = AeroCoefficients::default();
        let model = state_space_model(aircraft, &trim, &coeffs);
        if !model.is_finite() {
            return Err(ModelErrors::NonFiniteModel);
        }
        let modes = modes::modes(&model.a);
        let history = StateHistory::new(Self::history_capacity(preset));
        Ok(SimulationContext {
            aircraft,
            preset,
            trim,
            coeffs,
            model,
            modes,
            state: LongitudinalState::zero(),
            elevator: 0.0,
            elapsed: 0.0,
            history,
        })
    }

    fn history_capacity(preset: TrimPreset) -> usize {
        (HISTORY_SECONDS / preset.recommended_dt()).round() as usize
    }

    fn rebuild(&mut self) -> Result<(), ModelErrors> {
        let model = state_space_model(self.aircraft, &self.trim, &self.coeffs);
        if !model.is_finite() {
            return Err(ModelErrors::NonFiniteModel);
        }
        self.modes = modes::modes(&model.a);
        self.model = model;
        Ok(())
    }

    /// Switches to another trim preset, rebuilding the model and restarting
    /// the simulation from the new equilibrium.
    pub fn select_trim(&mut self, preset: TrimPreset) -> Result<(), ModelErrors> {
        let trim = preset.steady_state();
        trim.validate()?;
        self.preset = preset;
        self.trim = trim;
        self.rebuild()?;
        self.history = StateHistory::new(Self::history_capacity(preset));
        self.reset();
        Ok(())
    }

    /// Writes one editable coefficient (clamped on write) and rebuilds the
    /// model. Returns the value actually applied.
    pub fn set_coefficient(&mut self, id: CoefficientId, value: f64) -> Result<f64, ModelErrors> {
        let applied = self.coeffs.set(id, value);
        self.rebuild()?;
        Ok(applied)
    }

    pub fn reset_coefficients(&mut self) -> Result<(), ModelErrors> {
        self.coeffs.reset();
        self.rebuild()
    }

    pub fn set_elevator(&mut self, deflection: f64) {
        self.elevator = deflection;
    }

    pub fn center_elevator(&mut self) {
        self.elevator = 0.0;
    }

    /// Advances the state by one fixed step under the held elevator input.
    pub fn step(&mut self, dt: f64) -> Result<(), ModelErrors> {
        let dynamics = LongitudinalDynamics::new(&self.model, self.elevator);
        let integrator = ForwardEuler::new(dynamics);
        let next = integrator.integrate(&self.state, dt);
        if !next.is_finite() {
            return Err(ModelErrors::NonFiniteState);
        }
        self.state = next;
        self.elapsed += dt;
        self.history.push(next);
        Ok(())
    }

    /// Returns the simulation to the trim equilibrium, clearing the history.
    /// The model, coefficients, and elevator input are untouched.
    pub fn reset(&mut self) {
        self.state = LongitudinalState::zero();
        self.elapsed = 0.0;
        self.history.clear();
    }

    pub fn state(&self) -> LongitudinalState {
        self.state
    }

    pub fn model(&self) -> &StateSpaceModel {
        &self.model
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn preset(&self) -> TrimPreset {
        self.preset
    }

    pub fn trim(&self) -> &SteadyState {
        &self.trim
    }

    pub fn trim_summary(&self) -> TrimSummary {
        self.trim.summary()
    }

    pub fn coefficients(&self) -> &AeroCoefficients {
        &self.coeffs
    }

    pub fn elevator(&self) -> f64 {
        self.elevator
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn recommended_dt(&self) -> f64 {
        self.preset.recommended_dt()
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }
}
