use crate::models::LongitudinalState;

/// Fixed-capacity circular buffer of recent states for plotting consumers.
/// Overwrites the oldest sample once full; `ordered` reads back in
/// chronological order.
pub struct StateHistory {
    buffer: Vec<LongitudinalState>,
    head: usize,
    filled: bool,
}

impl StateHistory {
    pub fn new(capacity: usize) -> Self {
        StateHistory {
            buffer: vec![LongitudinalState::zero(); capacity.max(1)],
            head: 0,
            filled: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        if self.filled {
            self.buffer.len()
        } else {
            self.head
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, state: LongitudinalState) {
        self.buffer[self.head] = state;
        self.head = (self.head + 1) % self.buffer.len();
        if self.head == 0 {
            self.filled = true;
        }
    }

    pub fn ordered(&self) -> Vec<LongitudinalState> {
        if self.filled {
            let mut out = self.buffer[self.head..].to_vec();
            out.extend_from_slice(&self.buffer[..self.head]);
            out
        } else {
            self.buffer[..self.head].to_vec()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.fill(LongitudinalState::zero());
        self.head = 0;
        self.filled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: f64) -> LongitudinalState {
        LongitudinalState::new(value, 0.0, 0.0, 0.0)
    }

    #[test]
    fn partial_fill_preserves_order() {
        let mut history = StateHistory::new(4);
        assert!(history.is_empty());
        history.push(sample(1.0));
        history.push(sample(2.0));
        let ordered = history.ordered();
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].airspeed, 1.0);
        assert_eq!(ordered[1].airspeed, 2.0);
    }

    #[test]
    fn wrap_around_drops_oldest() {
        let mut history = StateHistory::new(3);
        for value in 1..=5 {
            history.push(sample(value as f64));
        }
        assert_eq!(history.len(), 3);
        let ordered = history.ordered();
        assert_eq!(
            ordered.iter().map(|s| s.airspeed).collect::<Vec<_>>(),
            vec![3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut history = StateHistory::new(3);
        history.push(sample(1.0));
        history.push(sample(2.0));
        history.push(sample(3.0));
        history.push(sample(4.0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 3);
        assert!(history.ordered().is_empty());
    }
}
