//! Equal-spacing (distribution) pattern detection.
//!
//! For one axis at a time, the static elements are sorted by their leading
//! edge and the dragged box is tried at every insertion index. A trial
//! sequence is accepted when its gaps contain a repeating rhythm that the
//! dragged element takes part in.

use super::pool::PositionedElement;
use crate::geometry::{Axis, ElementId};

/// One gap of an accepted sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternGap {
    /// Trailing edge of the element before the gap.
    pub start: f64,
    /// Leading edge of the element after the gap.
    pub end: f64,
    /// Gap size, clamped to zero for overlapping elements.
    pub distance: f64,
    /// Midpoint of the two element centers on the other axis.
    pub cross: f64,
    pub before: ElementId,
    pub after: ElementId,
    /// Gap touches the dragged element.
    pub pending: bool,
}

/// An accepted equal-spacing sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DistancePattern {
    pub axis: Axis,
    /// Position of the dragged element in the sorted sequence.
    pub insertion_index: usize,
    /// Average of the largest gap cluster.
    pub distance: f64,
    /// Gaps within tolerance of `distance`, in sequence order.
    pub gaps: Vec<PatternGap>,
}

impl DistancePattern {
    pub fn pending_gaps(&self) -> impl Iterator<Item = &PatternGap> {
        self.gaps.iter().filter(|g| g.pending)
    }
}

/// Pattern distance of a gap list: the average of the largest cluster of
/// gaps lying within `tolerance` of each other. On equal cluster sizes the
/// cluster seeded by the earlier gap wins.
///
/// Runs in O(n log n): the gaps are sorted once and every seed's cluster is
/// the window of sorted values within `tolerance` of it.
pub fn pattern_distance(gaps: &[f64], tolerance: f64) -> Option<f64> {
    let tolerance = tolerance.max(0.0);

    let mut order: Vec<usize> = (0..gaps.len()).collect();
    order.sort_by(|&a, &b| gaps[a].total_cmp(&gaps[b]));
    let sorted: Vec<f64> = order.iter().map(|&i| gaps[i]).collect();

    let mut prefix = Vec::with_capacity(sorted.len() + 1);
    prefix.push(0.0);
    for &gap in &sorted {
        prefix.push(prefix[prefix.len() - 1] + gap);
    }

    // (cluster size, seed index in `gaps`, average)
    let mut best: Option<(usize, usize, f64)> = None;
    let (mut lo, mut hi) = (0, 0);

    for (pos, &seed) in sorted.iter().enumerate() {
        while lo < pos && seed - sorted[lo] > tolerance {
            lo += 1;
        }
        hi = hi.max(pos);
        while hi < sorted.len() && sorted[hi] - seed <= tolerance {
            hi += 1;
        }

        let count = hi.saturating_sub(lo);
        if count == 0 {
            continue;
        }
        let seed_index = order[pos];
        let better = best.is_none_or(|(best_count, best_index, _)| {
            count > best_count || (count == best_count && seed_index < best_index)
        });
        if better {
            best = Some((count, seed_index, (prefix[hi] - prefix[lo]) / count as f64));
        }
    }

    best.map(|(_, _, average)| average)
}

/// Search for the first insertion index whose trial sequence forms a
/// valid pattern. Returns `None` when fewer than two static elements exist
/// or no index qualifies.
pub fn analyze_axis(
    axis: Axis,
    dragged: &PositionedElement,
    statics: &[PositionedElement],
    tolerance: f64,
) -> Option<DistancePattern> {
    if statics.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&PositionedElement> = statics.iter().collect();
    sorted.sort_by(|a, b| a.bounds.leading(axis).total_cmp(&b.bounds.leading(axis)));

    for index in 0..=sorted.len() {
        let mut sequence = sorted.clone();
        sequence.insert(index, dragged);

        let gaps = sequence_gaps(axis, &sequence, index);
        let values: Vec<f64> = gaps.iter().map(|g| g.distance).collect();
        let Some(distance) = pattern_distance(&values, tolerance) else {
            continue;
        };

        let matching: Vec<PatternGap> = gaps
            .into_iter()
            .filter(|g| (g.distance - distance).abs() <= tolerance)
            .collect();

        // A real rhythm needs two equal gaps, one of them the dragged element's,
        // and must not be a stack of overlapping elements.
        if distance > tolerance && matching.len() >= 2 && matching.iter().any(|g| g.pending) {
            log::trace!(
                "{:?} spacing {:.2} at insertion index {} ({} gaps)",
                axis,
                distance,
                index,
                matching.len()
            );
            return Some(DistancePattern {
                axis,
                insertion_index: index,
                distance,
                gaps: matching,
            });
        }
    }

    None
}

fn sequence_gaps(axis: Axis, sequence: &[&PositionedElement], dragged_index: usize) -> Vec<PatternGap> {
    let cross = axis.cross();
    sequence
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (a, b) = (pair[0], pair[1]);
            let start = a.bounds.trailing(axis);
            let end = b.bounds.leading(axis);
            PatternGap {
                start,
                end,
                distance: (end - start).max(0.0),
                cross: (cross.of(a.bounds.center()) + cross.of(b.bounds.center())) / 2.0,
                before: a.element.id,
                after: b.element.id,
                pending: i == dragged_index || i + 1 == dragged_index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{BoundingBox, ElementKind, ElementRef};
    use uuid::Uuid;

    fn element(x: f64, y: f64, width: f64, height: f64) -> PositionedElement {
        PositionedElement {
            element: ElementRef::new(Uuid::new_v4(), ElementKind::Rectangle),
            bounds: BoundingBox::new(x, y, width, height),
        }
    }

    fn row() -> Vec<PositionedElement> {
        // Listed out of order on purpose.
        vec![
            element(10.0, 0.0, 0.0, 10.0),
            element(0.0, 0.0, 0.0, 10.0),
            element(20.0, 0.0, 0.0, 10.0),
        ]
    }

    #[test]
    fn test_cluster_average() {
        let distance = pattern_distance(&[10.0, 10.4, 21.0], 1.0).unwrap();
        assert!((distance - 10.2).abs() < 1e-9);
    }

    #[test]
    fn test_cluster_empty() {
        assert_eq!(pattern_distance(&[], 1.0), None);
    }

    #[test]
    fn test_cluster_tie_prefers_earlier_seed() {
        let distance = pattern_distance(&[5.0, 5.0, 30.0, 30.0], 1.0).unwrap();
        assert!((distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_cluster_matches_exhaustive_scan() {
        fn exhaustive(gaps: &[f64], tolerance: f64) -> Option<f64> {
            let mut best: Option<(usize, f64)> = None;
            for &seed in gaps {
                let cluster: Vec<f64> = gaps.iter().copied().filter(|g| (g - seed).abs() <= tolerance).collect();
                if best.is_none_or(|(count, _)| cluster.len() > count) {
                    best = Some((cluster.len(), cluster.iter().sum::<f64>() / cluster.len() as f64));
                }
            }
            best.map(|(_, average)| average)
        }

        let cases: [&[f64]; 6] = [
            &[10.0, 10.4, 21.0],
            &[30.0, 5.0, 5.5, 30.2, 6.1],
            &[0.0, 0.0, 0.0],
            &[8.0, 1.0, 9.5, 2.0, 9.0, 1.5],
            &[40.0],
            &[3.0, 7.0, 11.0, 15.0],
        ];
        for gaps in cases {
            for tolerance in [0.0, 0.5, 1.0, 4.0] {
                let fast = pattern_distance(gaps, tolerance).unwrap();
                let slow = exhaustive(gaps, tolerance).unwrap();
                assert!((fast - slow).abs() < 1e-9, "{:?} tol {}: {} vs {}", gaps, tolerance, fast, slow);
            }
        }
    }

    #[test]
    fn test_large_scattered_scene_has_no_pattern() {
        // Gaps 2, 5, 8, ...: no two within tolerance.
        let mut x = 0.0;
        let statics: Vec<_> = (0..400)
            .map(|i| {
                let e = element(x, 0.0, 10.0, 10.0);
                x += 12.0 + 3.0 * i as f64;
                e
            })
            .collect();
        // Overlaps every static, so its own gaps clamp to zero.
        let dragged = element(-1e6, 0.0, 2e6, 10.0);
        assert!(analyze_axis(Axis::X, &dragged, &statics, 1.0).is_none());
    }

    #[test]
    fn test_off_tolerance_gap_is_dropped() {
        // Gaps 10, 10.4 and 21 once the dragged element lands at x=40.4.
        let statics = vec![
            element(0.0, 0.0, 10.0, 10.0),
            element(20.0, 0.0, 10.0, 10.0),
            element(71.4, 0.0, 10.0, 10.0),
        ];
        let dragged = element(40.4, 0.0, 10.0, 10.0);
        let pattern = analyze_axis(Axis::X, &dragged, &statics, 1.0).unwrap();

        assert_eq!(pattern.insertion_index, 2);
        assert!((pattern.distance - 10.2).abs() < 1e-9);
        let distances: Vec<f64> = pattern.gaps.iter().map(|g| g.distance).collect();
        assert_eq!(distances.len(), 2);
        assert!((distances[0] - 10.0).abs() < 1e-9);
        assert!((distances[1] - 10.4).abs() < 1e-9);
        assert!(pattern.gaps.iter().all(|g| g.after != statics[2].element.id));
    }

    #[test]
    fn test_extend_sequence_at_end() {
        let dragged = element(30.0, 0.0, 0.0, 10.0);
        let pattern = analyze_axis(Axis::X, &dragged, &row(), 1.0).unwrap();

        assert_eq!(pattern.insertion_index, 3);
        assert!((pattern.distance - 10.0).abs() < 1e-9);
        assert_eq!(pattern.gaps.len(), 3);

        let pending: Vec<_> = pattern.pending_gaps().collect();
        assert_eq!(pending.len(), 1);
        assert!((pending[0].distance - 10.0).abs() < 1e-9);
        assert_eq!(pending[0].after, dragged.element.id);
    }

    #[test]
    fn test_split_existing_gap() {
        let dragged = element(5.0, 0.0, 0.0, 10.0);
        let pattern = analyze_axis(Axis::X, &dragged, &row(), 1.0).unwrap();

        assert_eq!(pattern.insertion_index, 1);
        assert!((pattern.distance - 5.0).abs() < 1e-9);
        // The 10 gap between the second and third elements is off-rhythm.
        assert_eq!(pattern.gaps.len(), 2);
        assert!(pattern.gaps.iter().all(|g| (g.distance - 10.0).abs() > 1.0));
        let pending: Vec<_> = pattern.pending_gaps().collect();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|g| (g.distance - 5.0).abs() < 1e-9));
    }

    #[test]
    fn test_near_position_within_tolerance() {
        let dragged = element(30.6, 0.0, 0.0, 10.0);
        let pattern = analyze_axis(Axis::X, &dragged, &row(), 1.0).unwrap();
        assert_eq!(pattern.insertion_index, 3);
        assert_eq!(pattern.pending_gaps().count(), 1);
    }

    #[test]
    fn test_dragged_outside_rhythm_is_rejected() {
        let dragged = element(80.0, 0.0, 0.0, 10.0);
        assert!(analyze_axis(Axis::X, &dragged, &row(), 1.0).is_none());
    }

    #[test]
    fn test_needs_two_static_elements() {
        let dragged = element(20.0, 0.0, 0.0, 10.0);
        let statics = vec![element(0.0, 0.0, 10.0, 10.0)];
        assert!(analyze_axis(Axis::X, &dragged, &statics, 1.0).is_none());
    }

    #[test]
    fn test_vertical_column() {
        let statics = vec![
            element(0.0, 0.0, 40.0, 20.0),
            element(0.0, 30.0, 40.0, 20.0),
        ];
        let dragged = element(0.0, 60.0, 40.0, 20.0);
        let pattern = analyze_axis(Axis::Y, &dragged, &statics, 1.0).unwrap();

        assert_eq!(pattern.insertion_index, 2);
        assert!((pattern.distance - 10.0).abs() < 1e-9);
        let gap = pattern.pending_gaps().next().unwrap();
        assert!((gap.start - 50.0).abs() < 1e-9);
        assert!((gap.end - 60.0).abs() < 1e-9);
        assert!((gap.cross - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlapping_stack_is_not_a_pattern() {
        let statics = vec![
            element(0.0, 0.0, 20.0, 10.0),
            element(10.0, 0.0, 20.0, 10.0),
        ];
        let dragged = element(20.0, 0.0, 20.0, 10.0);
        assert!(analyze_axis(Axis::X, &dragged, &statics, 0.5).is_none());
    }

    #[test]
    fn test_overlap_gap_clamps_to_zero() {
        let a = element(0.0, 0.0, 20.0, 10.0);
        let b = element(10.0, 0.0, 20.0, 10.0);
        let gaps = sequence_gaps(Axis::X, &[&a, &b], 0);
        assert_eq!(gaps[0].distance, 0.0);
        assert!(gaps[0].pending);
    }
}
