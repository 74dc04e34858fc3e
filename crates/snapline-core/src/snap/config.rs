//! Snapping configuration and partial updates.

use super::guides::GuideColor;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default detection radius (in world units).
pub const DEFAULT_DETECTION_RADIUS: f64 = 10.0;

/// Default grid size (matches the visual grid).
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Smallest grid size accepted by `update_config`.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Default lifetime of an active snap, in milliseconds.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 1500;

/// Default tolerance when comparing gap sizes.
pub const DEFAULT_DISTANCE_TOLERANCE: f64 = 1.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid snapping config: {0}")]
    Parse(String),
}

/// Colors used for each family of guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideColors {
    /// Alignment with another element.
    pub dynamic: GuideColor,
    /// Alignment with a grid line.
    pub grid: GuideColor,
    /// Settled gaps of a spacing pattern.
    pub distance: GuideColor,
    /// Gaps touching the dragged element.
    pub pending_distance: GuideColor,
}

impl Default for GuideColors {
    fn default() -> Self {
        Self {
            // Pink-500
            dynamic: GuideColor::new(236, 72, 153, 180),
            grid: GuideColor::new(148, 163, 184, 160),
            distance: GuideColor::new(59, 130, 246, 200),
            pending_distance: GuideColor::new(249, 115, 22, 200),
        }
    }
}

/// Engine configuration.
///
/// Only changed through [`SnappingConfig::apply`], which clamps invalid
/// values instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappingConfig {
    pub enabled: bool,
    /// Maximum per-axis distance at which a candidate matches.
    pub detection_radius: f64,
    /// How long an active snap stays valid for consumers.
    pub snap_duration_ms: u64,
    /// Maximum difference between gaps treated as the same spacing.
    pub distance_tolerance: f64,
    pub grid_size: f64,
    pub show_dynamic_guides: bool,
    pub show_grid_guides: bool,
    pub show_distance_guides: bool,
    pub colors: GuideColors,
}

impl Default for SnappingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            detection_radius: DEFAULT_DETECTION_RADIUS,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            distance_tolerance: DEFAULT_DISTANCE_TOLERANCE,
            grid_size: DEFAULT_GRID_SIZE,
            show_dynamic_guides: true,
            show_grid_guides: false,
            show_distance_guides: true,
            colors: GuideColors::default(),
        }
    }
}

impl SnappingConfig {
    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }

    /// Merge a partial update, clamping out-of-range values.
    pub fn apply(&mut self, update: SnappingConfigUpdate) {
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(radius) = update.detection_radius {
            self.detection_radius = non_negative("detection_radius", radius);
        }
        if let Some(duration) = update.snap_duration_ms {
            self.snap_duration_ms = duration;
        }
        if let Some(tolerance) = update.distance_tolerance {
            self.distance_tolerance = non_negative("distance_tolerance", tolerance);
        }
        if let Some(grid_size) = update.grid_size {
            self.grid_size = if grid_size.is_finite() && grid_size >= MIN_GRID_SIZE {
                grid_size
            } else {
                log::warn!("grid_size {} clamped to {}", grid_size, MIN_GRID_SIZE);
                MIN_GRID_SIZE
            };
        }
        if let Some(show) = update.show_dynamic_guides {
            self.show_dynamic_guides = show;
        }
        if let Some(show) = update.show_grid_guides {
            self.show_grid_guides = show;
        }
        if let Some(show) = update.show_distance_guides {
            self.show_distance_guides = show;
        }
        if let Some(colors) = update.colors {
            self.colors = colors;
        }
    }
}

fn non_negative(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("{} {} clamped to 0", name, value);
        0.0
    }
}

/// Partial configuration; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappingConfigUpdate {
    pub enabled: Option<bool>,
    pub detection_radius: Option<f64>,
    pub snap_duration_ms: Option<u64>,
    pub distance_tolerance: Option<f64>,
    pub grid_size: Option<f64>,
    pub show_dynamic_guides: Option<bool>,
    pub show_grid_guides: Option<bool>,
    pub show_distance_guides: Option<bool>,
    pub colors: Option<GuideColors>,
}

impl SnappingConfigUpdate {
    /// Parse a partial config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl From<SnappingConfig> for SnappingConfigUpdate {
    fn from(config: SnappingConfig) -> Self {
        Self {
            enabled: Some(config.enabled),
            detection_radius: Some(config.detection_radius),
            snap_duration_ms: Some(config.snap_duration_ms),
            distance_tolerance: Some(config.distance_tolerance),
            grid_size: Some(config.grid_size),
            show_dynamic_guides: Some(config.show_dynamic_guides),
            show_grid_guides: Some(config.show_grid_guides),
            show_distance_guides: Some(config.show_distance_guides),
            colors: Some(config.colors),
        }
    }
}
