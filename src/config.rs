// src/config.rs

//! Configuration for the grid overlay.
//!
//! Deserializable from a JSON file; every field has a sensible default so a
//! partial (or absent) config file works. Values that could violate core
//! invariants are sanitized on load rather than rejected, with a logged
//! warning, so a typo in a hand-edited file degrades to defaults instead of
//! refusing to start.

use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Rgba;

/// Per-axis shrink factor applied by a zoom step when none is configured.
pub const DEFAULT_ZOOM_RATIO: f64 = 0.6;

/// Complete overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// How the label grid is painted.
    pub appearance: AppearanceConfig,
    /// How selection and zooming behave.
    pub behavior: BehaviorConfig,
}

/// Visual settings for the painted overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Text size for the two-character cell labels.
    pub text_size: f32,
    /// Color of the label text. Translucent so underlying content stays visible.
    pub label_color: Rgba,
    /// Fill color of the highlight behind each label.
    pub highlight_color: Rgba,
    /// Margin added around the measured label bounds before filling the
    /// highlight.
    pub highlight_inset: f64,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            text_size: 16.0,
            label_color: Rgba::new(0x00, 0xff, 0x00, 0x8f),
            highlight_color: Rgba::new(0x99, 0x99, 0x99, 0x4f),
            highlight_inset: 4.0,
        }
    }
}

/// Behavioral settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Per-axis shrink factor for a zoom step. Must lie in (0, 1); values
    /// outside that range are replaced by [`DEFAULT_ZOOM_RATIO`] on load.
    pub zoom_ratio: f64,
    /// Screen used when activation names none.
    pub default_screen: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            zoom_ratio: DEFAULT_ZOOM_RATIO,
            default_screen: 0,
        }
    }
}

impl Config {
    /// Loads and sanitizes a configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Replaces values that would violate core invariants with their defaults.
    pub fn sanitize(&mut self) {
        if !(self.behavior.zoom_ratio > 0.0 && self.behavior.zoom_ratio < 1.0) {
            warn!(
                "configured zoom ratio {} is outside (0, 1); using {}",
                self.behavior.zoom_ratio, DEFAULT_ZOOM_RATIO
            );
            self.behavior.zoom_ratio = DEFAULT_ZOOM_RATIO;
        }
        if !(self.appearance.text_size > 0.0) {
            warn!(
                "configured text size {} is not positive; using 16",
                self.appearance.text_size
            );
            self.appearance.text_size = 16.0;
        }
    }
}
