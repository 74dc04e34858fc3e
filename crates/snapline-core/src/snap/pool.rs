//! Candidate pool assembly.

use super::config::SnappingConfig;
use super::points::{AlignmentPoint, alignment_points};
use crate::geometry::{BoundingBox, ElementRef, GeometrySource};
use kurbo::Point;

/// Lattices larger than this are skipped.
pub const MAX_GRID_POINTS: usize = 10_000;

/// A static element with its box resolved for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedElement {
    pub element: ElementRef,
    pub bounds: BoundingBox,
}

/// Resolve every element that may act as a snap target, in host order.
///
/// Skips the excluded (dragged) element, locked elements and elements
/// without a resolvable box.
pub fn collect_positioned<G: GeometrySource + ?Sized>(
    source: &G,
    exclude: ElementRef,
) -> Vec<PositionedElement> {
    source
        .elements()
        .into_iter()
        .filter(|info| !info.locked && info.element_ref() != exclude)
        .filter_map(|info| {
            source
                .bounding_box(info.id, info.kind)
                .map(|bounds| PositionedElement {
                    element: info.element_ref(),
                    bounds,
                })
        })
        .collect()
}

/// Grid intersections covering `region`, aligned to multiples of `grid_size`.
pub fn grid_points(region: BoundingBox, grid_size: f64) -> Vec<AlignmentPoint> {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return Vec::new();
    }

    let col_start = (region.left() / grid_size).floor();
    let col_end = (region.right() / grid_size).ceil();
    let row_start = (region.top() / grid_size).floor();
    let row_end = (region.bottom() / grid_size).ceil();

    let cols = col_end - col_start + 1.0;
    let rows = row_end - row_start + 1.0;
    if !(cols.is_finite() && rows.is_finite()) || cols * rows > MAX_GRID_POINTS as f64 {
        log::debug!(
            "Grid lattice of {}x{} points exceeds {}, skipping grid candidates",
            cols,
            rows,
            MAX_GRID_POINTS
        );
        return Vec::new();
    }

    let (cols, rows) = (cols as usize, rows as usize);
    let mut points = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        let y = (row_start + row as f64) * grid_size;
        for col in 0..cols {
            let x = (col_start + col as f64) * grid_size;
            points.push(AlignmentPoint::grid(Point::new(x, y)));
        }
    }
    points
}

/// Flatten element alignment points, then grid points, into one pool.
pub fn build_candidate_pool(
    elements: &[PositionedElement],
    visible_region: Option<BoundingBox>,
    config: &SnappingConfig,
) -> Vec<AlignmentPoint> {
    let mut pool: Vec<AlignmentPoint> = elements
        .iter()
        .flat_map(|e| alignment_points(e.bounds, Some(e.element)))
        .collect();

    if config.show_grid_guides {
        if let Some(region) = visible_region {
            pool.extend(grid_points(region, config.grid_size));
        }
    }

    pool
}
