use crate::constants::*;

/// Animated numeric display. Interpolates from 0 to `target` on a fixed
/// 16 ms tick; on reaching or exceeding the target it snaps to the exact
/// value (with the "+" suffix when present) and stops mutating.
pub struct Counter {
    target: i64,
    plus_suffix: bool,

    current: f64,
    carry: f32, // frame time not yet consumed by a full tick
    running: bool,
}

impl Counter {
    pub fn new(target: i64, plus_suffix: bool) -> Self {
        Self {
            target,
            plus_suffix,
            current: 0.0,
            carry: 0.0,
            running: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)starts the animation from zero. A still-running animation for
    /// this display is cancelled first, so two interpolations never race
    /// on the same value.
    pub fn start(&mut self) {
        self.current = 0.0;
        self.carry = 0.0;
        self.running = true;
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        let increment = self.target as f64 / (COUNTER_DURATION / COUNTER_TICK) as f64;
        self.carry += dt;
        while self.carry >= COUNTER_TICK {
            self.carry -= COUNTER_TICK;
            self.current += increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.running = false;
                break;
            }
        }
    }

    /// Rendered text: the interpolated floor while running, the exact
    /// target (plus suffix) once finished or before any animation ran.
    pub fn text(&self) -> String {
        if self.running {
            format!("{}", self.current.floor() as i64)
        } else if self.plus_suffix {
            format!("{}+", self.target)
        } else {
            format!("{}", self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(counter: &mut Counter, seconds: f32) {
        // Feed frame-sized slices like the render loop does.
        let mut elapsed = 0.0;
        while elapsed < seconds {
            counter.update(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
        }
    }

    #[test]
    fn converges_to_exact_target_with_suffix() {
        let mut counter = Counter::new(1500, true);
        counter.start();
        run_for(&mut counter, 2.0);
        assert_eq!(counter.text(), "1500+");
        assert!(!counter.is_running());

        // Finished counters must not mutate any further.
        run_for(&mut counter, 1.0);
        assert_eq!(counter.text(), "1500+");
    }

    #[test]
    fn interpolates_monotonically_below_target() {
        let mut counter = Counter::new(1500, false);
        counter.start();
        let mut last = -1i64;
        for _ in 0..40 {
            counter.update(1.0 / 60.0);
            if !counter.is_running() {
                break;
            }
            let shown: i64 = counter.text().parse().unwrap();
            assert!(shown >= last);
            assert!(shown < 1500);
            last = shown;
        }
        assert!(last > 0);
    }

    #[test]
    fn restart_cancels_previous_animation() {
        let mut counter = Counter::new(1000, false);
        counter.start();
        run_for(&mut counter, 0.8);
        let midway: i64 = counter.text().parse().unwrap();
        assert!(midway > 0);

        counter.start();
        let restarted: i64 = counter.text().parse().unwrap();
        assert_eq!(restarted, 0);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = Counter::new(0, false);
        counter.start();
        counter.update(COUNTER_TICK);
        assert!(!counter.is_running());
        assert_eq!(counter.text(), "0");
    }

    #[test]
    fn cancel_freezes_the_display_at_the_target() {
        let mut counter = Counter::new(500, false);
        assert_eq!(counter.target(), 500);
        counter.start();
        counter.update(0.5);
        counter.cancel();
        assert!(!counter.is_running());
        // A cancelled counter renders like a finished one.
        assert_eq!(counter.text(), "500");
    }

    #[test]
    fn unstarted_counter_shows_authored_text() {
        let counter = Counter::new(250, true);
        assert_eq!(counter.text(), "250+");
    }
}
