//! Alignment and equal-spacing snapping.
//!
//! Every movement tick, [`GuidelineEngine::resolve`] rebuilds the candidate
//! pool from the host's geometry, picks the nearest alignment per axis,
//! looks for equal-spacing patterns and publishes the outcome as the active
//! snap.

mod config;
mod distance;
mod engine;
mod guides;
mod points;
mod pool;
mod resolver;
mod state;

pub use config::{
    ConfigError, DEFAULT_DETECTION_RADIUS, DEFAULT_DISTANCE_TOLERANCE, DEFAULT_GRID_SIZE,
    DEFAULT_SNAP_DURATION_MS, GuideColors, MIN_GRID_SIZE, SnappingConfig, SnappingConfigUpdate,
};
pub use distance::{DistancePattern, PatternGap, analyze_axis, pattern_distance};
pub use engine::GuidelineEngine;
pub use guides::{DistanceGuideline, DistanceMarker, GuideColor, Guideline, Orientation};
pub use points::{AlignmentPoint, AlignmentRole, PointOrigin, alignment_points};
pub use pool::{MAX_GRID_POINTS, PositionedElement, build_candidate_pool, collect_positioned, grid_points};
pub use resolver::{AlignmentResolution, AxisMatch, resolve_alignment};
pub use state::{ActiveSnap, Instant, ListenerId, SnapNotifier, Subscription};
