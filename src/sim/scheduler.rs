use crate::models::aircraft::AircraftProperties;
use crate::models::errors::ModelErrors;
use crate::sim::context::SimulationContext;

pub const DEFAULT_MAX_CATCHUP_STEPS: usize = 50;

/// Fixed-step pacing against an external real-time tick. The caller reports
/// elapsed wall time; whole steps of `dt` are consumed from an accumulator so
/// simulated time tracks real time even when ticks arrive irregularly. The
/// catch-up loop is bounded per call: past `max_catchup_steps` the remaining
/// backlog is discarded instead of replayed.
pub struct FixedStepScheduler {
    dt: f64,
    accumulator: f64,
    max_catchup_steps: usize,
    running: bool,
}

impl FixedStepScheduler {
    pub fn new(dt: f64) -> Self {
        FixedStepScheduler {
            dt,
            accumulator: 0.0,
            max_catchup_steps: DEFAULT_MAX_CATCHUP_STEPS,
            running: true,
        }
    }

    pub fn with_max_catchup_steps(mut self, max_catchup_steps: usize) -> Self {
        self.max_catchup_steps = max_catchup_steps;
        self
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Clears any backlog accumulated around the pause so no queued catch-up
    /// steps replay on the next tick. Idempotent.
    pub fn resume(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulator = 0.0;
        }
    }

    /// Consumes `elapsed` seconds of wall time, stepping the context once per
    /// `dt` owed. Returns the number of steps taken.
    pub fn advance<T: AircraftProperties>(
        &mut self,
        context: &mut SimulationContext<T>,
        elapsed: f64,
    ) -> Result<usize, ModelErrors> {
        if !self.running {
            return Ok(0);
        }
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.dt {
            if steps == self.max_catchup_steps {
                self.accumulator = 0.0;
                break;
            }
            context.step(self.dt)?;
            self.accumulator -= self.dt;
            steps += 1;
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::aircraft::Cessna182;
    use crate::config::trim::TrimPreset;

    static AIRCRAFT: Cessna182 = Cessna182;

    fn context() -> SimulationContext<'static, Cessna182> {
        SimulationContext::new(&AIRCRAFT, TrimPreset::Cruise).unwrap()
    }

    #[test]
    fn sub_step_ticks_accumulate() {
        let mut context = context();
        let mut scheduler = FixedStepScheduler::new(0.01);
        assert_eq!(scheduler.advance(&mut context, 0.004).unwrap(), 0);
        assert_eq!(scheduler.advance(&mut context, 0.004).unwrap(), 0);
        // 0.012 s owed by now: one step fires, 0.002 s carries over.
        assert_eq!(scheduler.advance(&mut context, 0.004).unwrap(), 1);
        assert_eq!(scheduler.advance(&mut context, 0.009).unwrap(), 1);
    }

    #[test]
    fn catch_up_is_bounded_and_backlog_dropped() {
        let mut context = context();
        let mut scheduler = FixedStepScheduler::new(0.01).with_max_catchup_steps(10);
        // A 5 s stall would owe 500 steps; only the bound runs.
        assert_eq!(scheduler.advance(&mut context, 5.0).unwrap(), 10);
        // The backlog is gone, not deferred.
        assert_eq!(scheduler.advance(&mut context, 0.005).unwrap(), 0);
    }

    #[test]
    fn paused_scheduler_takes_no_steps() {
        let mut context = context();
        let mut scheduler = FixedStepScheduler::new(0.01);
        scheduler.pause();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.advance(&mut context, 1.0).unwrap(), 0);
        assert_eq!(context.history().len(), 0);
    }

    #[test]
    fn resume_discards_backlog() {
        let mut context = context();
        let mut scheduler = FixedStepScheduler::new(0.01);
        // Leave a partial step pending, then pause across a long gap.
        scheduler.advance(&mut context, 0.015).unwrap();
        scheduler.pause();
        scheduler.resume();
        // Only the fresh elapsed time counts after resuming.
        assert_eq!(scheduler.advance(&mut context, 0.009).unwrap(), 0);
        assert_eq!(scheduler.advance(&mut context, 0.002).unwrap(), 1);
    }

    #[test]
    fn resume_while_running_keeps_accumulator() {
        let mut context = context();
        let mut scheduler = FixedStepScheduler::new(0.01);
        scheduler.advance(&mut context, 0.009).unwrap();
        scheduler.resume();
        assert_eq!(scheduler.advance(&mut context, 0.002).unwrap(), 1);
    }
}
