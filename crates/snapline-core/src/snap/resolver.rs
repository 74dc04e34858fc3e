//! Nearest-candidate alignment along each axis.

use super::points::{AlignmentPoint, AlignmentRole, alignment_points};
use crate::geometry::{Axis, BoundingBox};
use kurbo::Point;

/// Best match on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMatch {
    /// Absolute distance between the dragged point and the candidate on this axis.
    pub distance: f64,
    /// Correction to add to the proposed coordinate.
    pub offset: f64,
    /// Candidate coordinate the dragged point lands on.
    pub coordinate: f64,
    pub candidate: AlignmentPoint,
    /// Which of the dragged box's points matched.
    pub dragged_role: AlignmentRole,
}

/// Outcome of alignment resolution. X and Y are independent and may come
/// from different candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlignmentResolution {
    pub x: Option<AxisMatch>,
    pub y: Option<AxisMatch>,
}

impl AlignmentResolution {
    /// Check if any axis matched.
    pub fn is_snapped(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// Apply accepted offsets to the proposed position.
    pub fn corrected(&self, proposed: Point) -> Point {
        Point::new(
            proposed.x + self.x.map_or(0.0, |m| m.offset),
            proposed.y + self.y.map_or(0.0, |m| m.offset),
        )
    }
}

/// Find the closest candidate per axis within `radius`.
///
/// Every (candidate, dragged point) pair is compared on X and on Y
/// separately. Candidates are scanned in pool order and only a strictly
/// smaller distance replaces the current best, so ties keep the candidate
/// found first.
pub fn resolve_alignment(dragged: BoundingBox, pool: &[AlignmentPoint], radius: f64) -> AlignmentResolution {
    let probes = alignment_points(dragged, None);
    let mut resolution = AlignmentResolution::default();

    for candidate in pool {
        for probe in &probes {
            consider(&mut resolution.x, Axis::X, probe, candidate, radius);
            consider(&mut resolution.y, Axis::Y, probe, candidate, radius);
        }
    }

    resolution
}

fn consider(
    best: &mut Option<AxisMatch>,
    axis: Axis,
    probe: &AlignmentPoint,
    candidate: &AlignmentPoint,
    radius: f64,
) {
    let target = axis.of(candidate.point);
    let delta = target - axis.of(probe.point);
    let distance = delta.abs();

    if distance > radius || best.is_some_and(|b| distance >= b.distance) {
        return;
    }

    *best = Some(AxisMatch {
        distance,
        offset: delta,
        coordinate: target,
        candidate: *candidate,
        dragged_role: probe.role,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ElementKind, ElementRef};
    use crate::snap::points::PointOrigin;
    use uuid::Uuid;

    fn pool_for(boxes: &[BoundingBox]) -> Vec<AlignmentPoint> {
        boxes
            .iter()
            .flat_map(|b| alignment_points(*b, Some(ElementRef::new(Uuid::new_v4(), ElementKind::Rectangle))))
            .collect()
    }

    #[test]
    fn test_corner_snap() {
        let pool = pool_for(&[BoundingBox::new(0.0, 0.0, 100.0, 100.0)]);
        let dragged = BoundingBox::new(97.0, 97.0, 50.0, 50.0);
        let resolution = resolve_alignment(dragged, &pool, 5.0);

        let x = resolution.x.unwrap();
        let y = resolution.y.unwrap();
        assert!((x.distance - 3.0).abs() < 1e-9);
        assert_eq!(x.coordinate, 100.0);
        assert_eq!(x.dragged_role, AlignmentRole::TopLeft);
        assert_eq!(y.coordinate, 100.0);
        assert_eq!(resolution.corrected(Point::new(97.0, 97.0)), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_no_match_outside_radius() {
        let pool = pool_for(&[BoundingBox::new(0.0, 0.0, 100.0, 100.0)]);
        let dragged = BoundingBox::new(120.0, 120.0, 10.0, 10.0);
        let resolution = resolve_alignment(dragged, &pool, 5.0);
        assert!(!resolution.is_snapped());
        assert_eq!(resolution.corrected(Point::new(120.0, 120.0)), Point::new(120.0, 120.0));
    }

    #[test]
    fn test_axes_from_different_candidates() {
        // `top` shares the dragged top edge, `left` shares its left edge.
        let top = BoundingBox::new(300.0, 52.0, 20.0, 20.0);
        let left = BoundingBox::new(-2.0, 400.0, 20.0, 20.0);
        let pool = pool_for(&[top, left]);
        let dragged = BoundingBox::new(0.0, 50.0, 30.0, 30.0);

        let resolution = resolve_alignment(dragged, &pool, 5.0);
        let x = resolution.x.unwrap();
        let y = resolution.y.unwrap();
        assert_ne!(x.candidate.owner, y.candidate.owner);
        assert_eq!(x.coordinate, -2.0);
        assert_eq!(y.coordinate, 52.0);
        assert_eq!(resolution.corrected(Point::new(0.0, 50.0)), Point::new(-2.0, 52.0));
    }

    #[test]
    fn test_tie_keeps_first_candidate() {
        let first = AlignmentPoint::grid(Point::new(95.0, 1000.0));
        let second = AlignmentPoint::grid(Point::new(105.0, 1000.0));
        let dragged = BoundingBox::new(100.0, 0.0, 0.0, 0.0);

        for _ in 0..5 {
            let resolution = resolve_alignment(dragged, &[first, second], 5.0);
            assert_eq!(resolution.x.unwrap().coordinate, 95.0);
            assert!(resolution.y.is_none());
        }
        let resolution = resolve_alignment(dragged, &[second, first], 5.0);
        assert_eq!(resolution.x.unwrap().coordinate, 105.0);
    }

    #[test]
    fn test_zero_radius_never_moves() {
        let pool = pool_for(&[BoundingBox::new(0.0, 0.0, 100.0, 100.0)]);
        for origin in [Point::new(100.0, 3.0), Point::new(0.5, 0.5), Point::new(50.0, 100.0)] {
            let dragged = BoundingBox::new(origin.x, origin.y, 20.0, 20.0);
            let resolution = resolve_alignment(dragged, &pool, 0.0);
            assert_eq!(resolution.corrected(origin), origin);
        }
    }

    #[test]
    fn test_grid_candidates_match() {
        let pool = vec![AlignmentPoint::grid(Point::new(40.0, 60.0))];
        let dragged = BoundingBox::new(38.0, 63.0, 10.0, 10.0);
        let resolution = resolve_alignment(dragged, &pool, 5.0);
        assert_eq!(resolution.x.unwrap().candidate.origin, PointOrigin::Grid);
        assert_eq!(resolution.corrected(Point::new(38.0, 63.0)), Point::new(40.0, 60.0));
    }
}
