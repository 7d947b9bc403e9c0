use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SwipeDirection {
    Left,  // Toward lower x: advance to the next slide
    Right, // Toward higher x: back to the previous slide
}

/// Tracks one horizontal swipe gesture at a time. The start coordinate is
/// transient and consumed by `finish`, so an end without a matching start
/// classifies as no gesture.
#[derive(Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self { start_x: None }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        if x < start - SWIPE_THRESHOLD {
            Some(SwipeDirection::Left)
        } else if x > start + SWIPE_THRESHOLD {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_swipe_past_threshold() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0);
        assert_eq!(tracker.finish(140.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn rightward_swipe_past_threshold() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0);
        assert_eq!(tracker.finish(260.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn short_drags_are_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0);
        assert_eq!(tracker.finish(230.0), None);
        tracker.begin(200.0);
        assert_eq!(tracker.finish(170.0), None);
    }

    #[test]
    fn finish_without_begin_is_no_gesture() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finish(0.0), None);
    }

    #[test]
    fn start_coordinate_is_consumed() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0);
        tracker.finish(100.0);
        assert_eq!(tracker.finish(0.0), None);
    }
}
