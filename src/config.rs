use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Declarative deck manifest. This is the markup contract of the engine:
/// which slides exist, what each one displays, and which navigation
/// elements the surrounding page provides.
#[derive(Debug, Deserialize)]
pub struct DeckManifest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
    #[serde(default)]
    pub controls: Controls,
}

#[derive(Debug, Deserialize)]
pub struct SlideSpec {
    pub headline: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub background: Option<PathBuf>,
    #[serde(default)]
    pub stats: Vec<StatSpec>,
}

/// A numeric display. The target comes from an explicit `count` field when
/// present, otherwise from an integer in the display `text`; a trailing "+"
/// in the text marks the suffix to preserve on the final value.
#[derive(Debug, Deserialize)]
pub struct StatSpec {
    pub label: String,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
}

impl StatSpec {
    pub fn target(&self) -> Result<(i64, bool), ManifestError> {
        let plus_suffix = self.text.as_deref().is_some_and(|t| t.contains('+'));
        if let Some(count) = self.count {
            return Ok((count, plus_suffix));
        }
        let text = self.text.as_deref().ok_or_else(|| ManifestError::Stat {
            label: self.label.clone(),
            text: String::new(),
        })?;
        text.trim()
            .trim_end_matches('+')
            .parse::<i64>()
            .map(|value| (value, plus_suffix))
            .map_err(|_| ManifestError::Stat {
                label: self.label.clone(),
                text: text.to_string(),
            })
    }
}

/// Which navigation elements the page includes. Anything switched off is
/// reported at mount time and its input path degrades to a no-op.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub prev_arrow: bool,
    pub next_arrow: bool,
    pub indicators: bool,
    pub hover_pause: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            prev_arrow: true,
            next_arrow: true,
            indicators: true,
            hover_pause: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("stat '{label}' has no usable target value (text: {text:?})")]
    Stat { label: String, text: String },
}

pub fn load_manifest(path: &Path) -> Result<DeckManifest, ManifestError> {
    let raw = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ManifestError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        title = "Fleet"

        [controls]
        indicators = false

        [[slides]]
        headline = "Charge anywhere"
        tagline = "City-wide coverage"

        [[slides.stats]]
        label = "Stations"
        text = "1500+"

        [[slides.stats]]
        label = "Riders"
        count = 320
        text = "320"
    "#;

    #[test]
    fn parses_slides_and_controls() {
        let manifest: DeckManifest = toml::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.title.as_deref(), Some("Fleet"));
        assert_eq!(manifest.slides.len(), 1);
        assert!(!manifest.controls.indicators);
        // Omitted control flags keep their defaults.
        assert!(manifest.controls.prev_arrow);
        assert!(manifest.controls.hover_pause);
    }

    #[test]
    fn stat_target_from_text_with_suffix() {
        let manifest: DeckManifest = toml::from_str(SAMPLE).unwrap();
        let stat = &manifest.slides[0].stats[0];
        assert_eq!(stat.target().unwrap(), (1500, true));
    }

    #[test]
    fn explicit_count_wins_over_text() {
        let stat = StatSpec {
            label: "Riders".into(),
            count: Some(320),
            text: Some("999+".into()),
        };
        assert_eq!(stat.target().unwrap(), (320, true));
    }

    #[test]
    fn unparseable_stat_is_an_error() {
        let stat = StatSpec {
            label: "Broken".into(),
            count: None,
            text: Some("many".into()),
        };
        assert!(matches!(stat.target(), Err(ManifestError::Stat { .. })));
    }

    #[test]
    fn empty_manifest_parses_with_no_slides() {
        let manifest: DeckManifest = toml::from_str("").unwrap();
        assert!(manifest.slides.is_empty());
    }
}
