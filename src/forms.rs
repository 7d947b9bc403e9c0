use crate::constants::SUBMIT_DELAY;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum SubmitState {
    Idle,
    Sending { remaining: f32 },
}

/// Simulated contact-form submission: a fixed pending phase, then exactly
/// one outcome. There is no real transport (by scope, not omission), so the
/// simulation always resolves to `Sent`; the `Failed` path exists for the
/// caller's error toast and becomes reachable once a backend is wired in.
pub struct FormSubmitter {
    state: SubmitState,
}

impl Default for FormSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSubmitter {
    pub fn new() -> Self {
        Self {
            state: SubmitState::Idle,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, SubmitState::Sending { .. })
    }

    /// Starts a submission. Returns false while one is already pending;
    /// there are no retries and no queueing.
    pub fn submit(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        self.state = SubmitState::Sending {
            remaining: SUBMIT_DELAY,
        };
        true
    }

    pub fn update(&mut self, dt: f32) -> Option<SubmitOutcome> {
        if let SubmitState::Sending { remaining } = self.state {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.state = SubmitState::Idle;
                return Some(SubmitOutcome::Sent);
            }
            self.state = SubmitState::Sending { remaining };
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_once_after_the_pending_phase() {
        let mut form = FormSubmitter::new();
        assert!(form.submit());
        assert_eq!(form.update(SUBMIT_DELAY - 0.1), None);
        assert_eq!(form.update(0.2), Some(SubmitOutcome::Sent));
        assert_eq!(form.update(10.0), None);
        assert!(!form.is_sending());
    }

    #[test]
    fn double_submit_is_rejected_while_pending() {
        let mut form = FormSubmitter::new();
        assert!(form.submit());
        assert!(!form.submit());
        form.update(SUBMIT_DELAY + 0.1);
        assert!(form.submit());
    }
}
