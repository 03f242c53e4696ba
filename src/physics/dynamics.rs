use crate::models::LongitudinalState;
use crate::physics::state_space::StateSpaceModel;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Self::State;
}

/// ẋ = A·x + B·u for the longitudinal perturbation state, with the elevator
/// deflection u held fixed for the duration of a step.
pub struct LongitudinalDynamics<'a> {
    model: &'a StateSpaceModel,
    elevator: f64,
}

impl<'a> LongitudinalDynamics<'a> {
    pub fn new(model: &'a StateSpaceModel, elevator: f64) -> Self {
        Self { model, elevator }
    }
}

impl EquationsOfMotion for LongitudinalDynamics<'_> {
    type State = LongitudinalState;

    fn compute_derivative(&self, state: &LongitudinalState) -> LongitudinalState {
        let xdot = self.model.a * state.to_vector() + self.model.b * self.elevator;
        LongitudinalState::from_vector(&xdot)
    }
}
