use crate::config::{DeckManifest, ManifestError};
use crate::constants::AUTOPLAY_INTERVAL;
use crate::slide::Slide;
use crate::state::DeckState;
use crate::swipe::{SwipeDirection, SwipeTracker};

/// Expected page elements that were absent at mount time. Each missing part
/// turns its input path into a silent no-op instead of an error.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MissingPart {
    Slides,
    Indicators,
    PrevControl,
    NextControl,
    HoverRegion,
}

#[derive(Debug, Default)]
pub struct MountReport {
    pub missing: Vec<MissingPart>,
}

impl MountReport {
    pub fn is_degraded(&self) -> bool {
        !self.missing.is_empty()
    }

    pub fn is_missing(&self, part: MissingPart) -> bool {
        self.missing.contains(&part)
    }
}

/// The deck state machine. Owns its slides, the active index and the
/// autoplay accumulator as plain fields; rendering is a separate projection
/// of this state. Teardown is `drop`.
pub struct SlideDeck {
    slides: Vec<Slide>,
    current: usize,
    state: DeckState,
    autoplay_running: bool,
    autoplay_elapsed: f32,
    swipe: SwipeTracker,
}

impl SlideDeck {
    /// Builds a deck from a manifest without starting autoplay. Absent page
    /// elements are reported, not raised; malformed stat values are the one
    /// construction-time error.
    pub fn mount(manifest: &DeckManifest) -> Result<(Self, MountReport), ManifestError> {
        let mut report = MountReport::default();
        if manifest.slides.is_empty() {
            report.missing.push(MissingPart::Slides);
        }
        if !manifest.controls.indicators {
            report.missing.push(MissingPart::Indicators);
        }
        if !manifest.controls.prev_arrow {
            report.missing.push(MissingPart::PrevControl);
        }
        if !manifest.controls.next_arrow {
            report.missing.push(MissingPart::NextControl);
        }
        if !manifest.controls.hover_pause {
            report.missing.push(MissingPart::HoverRegion);
        }

        let mut slides = Vec::with_capacity(manifest.slides.len());
        for (ordinal, spec) in manifest.slides.iter().enumerate() {
            slides.push(Slide::from_spec(ordinal, spec)?);
        }

        let state = if slides.is_empty() {
            DeckState::Idle
        } else {
            DeckState::Playing
        };

        let mut deck = Self {
            slides,
            current: 0,
            state,
            autoplay_running: false,
            autoplay_elapsed: 0.0,
            swipe: SwipeTracker::new(),
        };
        if deck.state == DeckState::Playing {
            deck.show_slide(0);
        }
        Ok((deck, report))
    }

    pub fn state(&self) -> DeckState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DeckState::Idle
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay_running
    }

    /// Activates the slide at `index` and restarts its counters. Callers
    /// clamp; an out-of-range index is a programming error.
    pub fn show_slide(&mut self, index: usize) {
        debug_assert!(index < self.slides.len(), "slide index out of range");
        for slide in &mut self.slides {
            slide.deactivate();
        }
        self.slides[index].activate();
        self.current = index;
    }

    pub fn next(&mut self) {
        if self.state == DeckState::Idle {
            return;
        }
        let next = (self.current + 1) % self.slides.len();
        self.show_slide(next);
        self.reset_autoplay();
    }

    pub fn previous(&mut self) {
        if self.state == DeckState::Idle {
            return;
        }
        let len = self.slides.len();
        let prev = (self.current + len - 1) % len;
        self.show_slide(prev);
        self.reset_autoplay();
    }

    pub fn go_to(&mut self, index: usize) {
        if self.state == DeckState::Idle {
            return;
        }
        self.show_slide(index);
        self.reset_autoplay();
    }

    /// Begins the deck's lifecycle: shows nothing new, just arms autoplay.
    pub fn start(&mut self) {
        if self.state == DeckState::Playing {
            self.start_autoplay();
        }
    }

    pub fn stop(&mut self) {
        self.stop_autoplay();
    }

    /// Idempotent: starting a running deck does not shorten the interval.
    pub fn start_autoplay(&mut self) {
        if !self.autoplay_running {
            self.autoplay_running = true;
            self.autoplay_elapsed = 0.0;
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay_running = false;
    }

    /// Cancel + restart, so manual navigation never causes a near-immediate
    /// autoplay jump.
    fn reset_autoplay(&mut self) {
        self.stop_autoplay();
        self.start_autoplay();
    }

    pub fn hover_enter(&mut self) {
        self.stop_autoplay();
    }

    pub fn hover_leave(&mut self) {
        self.start_autoplay();
    }

    pub fn begin_swipe(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    pub fn end_swipe(&mut self, x: f32) {
        match self.swipe.finish(x) {
            Some(SwipeDirection::Left) => self.next(),
            Some(SwipeDirection::Right) => self.previous(),
            None => {}
        }
    }

    /// Advances timers by one frame. Counters tick on every slide, active or
    /// not: deactivating a slide does not cancel its in-flight animation.
    /// Returns true when autoplay advanced the deck this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        for slide in &mut self.slides {
            slide.update(dt);
        }
        if self.state != DeckState::Playing || !self.autoplay_running {
            return false;
        }
        self.autoplay_elapsed += dt;
        if self.autoplay_elapsed >= AUTOPLAY_INTERVAL {
            self.next();
            return true;
        }
        false
    }
}

/// Advance by direction: positive is next, anything else is previous.
/// Part of the external invocation surface; a no-op on an idle deck.
pub fn change_slide(deck: &mut SlideDeck, direction: i32) {
    if direction > 0 {
        deck.next();
    } else {
        deck.previous();
    }
}

/// Jump to a 1-based slide number. Out-of-range numbers are ignored.
pub fn go_to_slide(deck: &mut SlideDeck, number: usize) {
    if number >= 1 && number <= deck.len() {
        deck.go_to(number - 1);
    }
}
