use crate::physics::dynamics::EquationsOfMotion;

/// Explicit (forward) Euler: x_{k+1} = x_k + dt * xdot_k. First-order
/// accurate and conditionally stable; dt must be small against the fastest
/// eigenvalue of the dynamics.
pub struct ForwardEuler<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> ForwardEuler<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        ForwardEuler { eom }
    }

    pub fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let xdot = self.eom.compute_derivative(state);
        state.clone() + xdot * dt
    }
}
