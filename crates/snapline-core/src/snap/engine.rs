//! The guideline engine: owns the config and the active snap slot.

use super::config::{GuideColors, SnappingConfig, SnappingConfigUpdate};
use super::distance::{DistancePattern, analyze_axis};
use super::guides::{DistanceGuideline, DistanceMarker, Guideline, Orientation};
use super::points::{AlignmentPoint, PointOrigin};
use super::pool::{build_candidate_pool, collect_positioned, PositionedElement};
use super::resolver::resolve_alignment;
use super::state::{ActiveSnap, Instant, SnapNotifier, Subscription};
use crate::geometry::{Axis, ElementId, ElementKind, ElementRef, GeometrySource};
use kurbo::Point;
use uuid::Uuid;

/// Alignment and equal-spacing guide engine for one editor.
///
/// The host constructs and owns the engine, calls [`resolve`](Self::resolve)
/// on every movement tick and [`end_operation`](Self::end_operation) when the
/// drag is released. Renderers subscribe to the active snap.
#[derive(Debug, Default)]
pub struct GuidelineEngine {
    config: SnappingConfig,
    active: Option<ActiveSnap>,
    notifier: SnapNotifier,
}

impl GuidelineEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given config, clamped like any update.
    pub fn with_config(config: SnappingConfig) -> Self {
        let mut engine = Self::new();
        engine.config.apply(config.into());
        engine
    }

    /// Copy of the current config.
    pub fn config(&self) -> SnappingConfig {
        self.config.clone()
    }

    /// Merge a partial config. Disabling the engine clears the active snap.
    pub fn update_config(&mut self, update: SnappingConfigUpdate) {
        self.config.apply(update);
        if !self.config.enabled {
            self.set_active(None);
        }
    }

    /// Register a listener for active snap changes.
    pub fn subscribe(&self, listener: impl Fn(Option<&ActiveSnap>) + 'static) -> Subscription {
        self.notifier.subscribe(listener)
    }

    /// Handle for (un)subscribing without access to the engine.
    pub fn notifier(&self) -> SnapNotifier {
        self.notifier.clone()
    }

    pub fn active_snap(&self) -> Option<&ActiveSnap> {
        self.active.as_ref()
    }

    /// Whether the active snap is older than the configured snap duration.
    /// Always false while idle.
    pub fn is_snap_stale(&self, now: Instant) -> bool {
        self.active
            .as_ref()
            .is_some_and(|snap| snap.is_expired(now, self.config.snap_duration()))
    }

    /// Drag released: go idle.
    pub fn end_operation(&mut self) {
        self.set_active(None);
    }

    /// Resolve the corrected top-left position for an element being dragged
    /// to `proposed`, updating the active snap.
    pub fn resolve<G: GeometrySource + ?Sized>(
        &mut self,
        source: &G,
        id: ElementId,
        kind: ElementKind,
        proposed: Point,
    ) -> Point {
        self.resolve_at(source, id, kind, proposed, Instant::now())
    }

    /// Same as [`resolve`](Self::resolve) with an explicit timestamp.
    pub fn resolve_at<G: GeometrySource + ?Sized>(
        &mut self,
        source: &G,
        id: ElementId,
        kind: ElementKind,
        proposed: Point,
        now: Instant,
    ) -> Point {
        if !self.config.enabled {
            self.set_active(None);
            return proposed;
        }

        let Some(current) = source.bounding_box(id, kind) else {
            log::debug!("No geometry for dragged {:?} {}, skipping snap", kind, id);
            self.set_active(None);
            return proposed;
        };

        let dragged = PositionedElement {
            element: ElementRef::new(id, kind),
            bounds: current.with_origin(proposed),
        };
        let statics = collect_positioned(source, dragged.element);
        let pool = build_candidate_pool(&statics, source.visible_region(), &self.config);

        let resolution = resolve_alignment(dragged.bounds, &pool, self.config.detection_radius);
        let corrected = resolution.corrected(proposed);

        let mut guidelines = Vec::new();
        if let Some(x) = resolution.x {
            log::trace!(
                "x {} -> {} ({} onto {})",
                proposed.x,
                corrected.x,
                x.dragged_role.label(),
                x.candidate.role.label()
            );
            guidelines.push(self.guideline(Orientation::Vertical, x.coordinate, &x.candidate));
        }
        if let Some(y) = resolution.y {
            log::trace!(
                "y {} -> {} ({} onto {})",
                proposed.y,
                corrected.y,
                y.dragged_role.label(),
                y.candidate.role.label()
            );
            guidelines.push(self.guideline(Orientation::Horizontal, y.coordinate, &y.candidate));
        }

        let mut distance_guidelines = Vec::new();
        if self.config.show_distance_guides {
            let tolerance = self.config.distance_tolerance;
            for axis in [Axis::X, Axis::Y] {
                if let Some(pattern) = analyze_axis(axis, &dragged, &statics, tolerance) {
                    distance_guidelines.extend(distance_guidelines_for(&pattern, &self.config.colors));
                }
            }
        }

        let snap = ActiveSnap {
            distance_markers: distance_guidelines.iter().map(DistanceMarker::for_guideline).collect(),
            guidelines,
            distance_guidelines,
            snap_point: proposed,
            target_point: corrected,
            timestamp: now,
        };
        self.set_active(Some(snap).filter(ActiveSnap::has_guides));

        corrected
    }

    fn guideline(&self, orientation: Orientation, position: f64, candidate: &AlignmentPoint) -> Guideline {
        let colors = &self.config.colors;
        match candidate.origin {
            PointOrigin::Dynamic => {
                Guideline::new(orientation, position, colors.dynamic, self.config.show_dynamic_guides)
            }
            PointOrigin::Grid => Guideline::new(orientation, position, colors.grid, self.config.show_grid_guides),
        }
    }

    /// Overwrite the slot and notify, unless staying idle.
    fn set_active(&mut self, snap: Option<ActiveSnap>) {
        if self.active.is_none() && snap.is_none() {
            return;
        }
        match &snap {
            Some(snap) => log::debug!(
                "Snap active: {} guidelines, {} distance guidelines",
                snap.guidelines.len(),
                snap.distance_guidelines.len()
            ),
            None => log::debug!("Snap idle"),
        }
        self.active = snap;
        self.notifier.notify(self.active.as_ref());
    }
}

fn distance_guidelines_for<'a>(
    pattern: &'a DistancePattern,
    colors: &'a GuideColors,
) -> impl Iterator<Item = DistanceGuideline> + 'a {
    // Gaps along X are drawn as horizontal measurements.
    let orientation = match pattern.axis {
        Axis::X => Orientation::Horizontal,
        Axis::Y => Orientation::Vertical,
    };
    pattern.gaps.iter().map(move |gap| DistanceGuideline {
        id: Uuid::new_v4(),
        orientation,
        start: gap.start,
        end: gap.end,
        cross: gap.cross,
        distance: gap.distance,
        color: if gap.pending {
            colors.pending_distance
        } else {
            colors.distance
        },
        involved: [gap.before, gap.after],
        is_pending: gap.pending,
    })
}
