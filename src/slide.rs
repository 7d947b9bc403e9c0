use std::path::PathBuf;

use crate::config::{ManifestError, SlideSpec};
use crate::counter::Counter;

pub struct StatDisplay {
    pub label: String,
    pub counter: Counter,
}

/// One slide of the deck: plain data, no rendering. Activation restarts the
/// slide's own counters; counters on other slides are left alone so an
/// in-flight animation keeps running after its slide is deactivated.
pub struct Slide {
    pub ordinal: usize,
    pub active: bool,
    pub headline: String,
    pub tagline: Option<String>,
    pub background: Option<PathBuf>,
    pub stats: Vec<StatDisplay>,
}

impl Slide {
    pub fn from_spec(ordinal: usize, spec: &SlideSpec) -> Result<Self, ManifestError> {
        let mut stats = Vec::with_capacity(spec.stats.len());
        for stat in &spec.stats {
            let (target, plus_suffix) = stat.target()?;
            stats.push(StatDisplay {
                label: stat.label.clone(),
                counter: Counter::new(target, plus_suffix),
            });
        }
        Ok(Self {
            ordinal,
            active: false,
            headline: spec.headline.clone(),
            tagline: spec.tagline.clone(),
            background: spec.background.clone(),
            stats,
        })
    }

    pub fn activate(&mut self) {
        self.active = true;
        for stat in &mut self.stats {
            stat.counter.start();
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn update(&mut self, dt: f32) {
        for stat in &mut self.stats {
            stat.counter.update(dt);
        }
    }
}
