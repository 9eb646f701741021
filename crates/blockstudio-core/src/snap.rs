//! Snap functionality for aligning components to the grid and to neighbors.

use crate::component::{
    ComponentId, PlacedComponent, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};
use kurbo::{Point, Size};

/// Grid size for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Grid size used in the compact-viewport mode.
pub const COMPACT_GRID_SIZE: f64 = 15.0;

/// Distance within which a dragged component aligns to a neighbor's edge,
/// expressed as a multiple of the grid size.
pub const ALIGN_THRESHOLD_FACTOR: f64 = 2.0;

/// Snap a point to the nearest grid intersection.
///
/// Each axis rounds to the nearest multiple of `grid_size`, half away from
/// zero. Idempotent: snapping a snapped point is a no-op.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Align a candidate position to nearby neighbor edges, one axis at a time.
///
/// For each axis the scan considers every component except `exclude_id`;
/// a neighbor whose coordinate lies within `2 * grid_size` of the candidate
/// replaces it. When several neighbors qualify the nearest one wins, with
/// equal distances resolving to the earlier component in paint order, so
/// the result never depends on incidental list reordering.
pub fn align_to_neighbors(
    point: Point,
    components: &[PlacedComponent],
    exclude_id: Option<&ComponentId>,
    grid_size: f64,
) -> Point {
    let threshold = ALIGN_THRESHOLD_FACTOR * grid_size;

    let mut aligned = point;
    let mut best_dx = f64::INFINITY;
    let mut best_dy = f64::INFINITY;

    for neighbor in components {
        if Some(&neighbor.id) == exclude_id {
            continue;
        }
        let dx = (neighbor.position.x - point.x).abs();
        if dx <= threshold && dx < best_dx {
            best_dx = dx;
            aligned.x = neighbor.position.x;
        }
        let dy = (neighbor.position.y - point.y).abs();
        if dy <= threshold && dy < best_dy {
            best_dy = dy;
            aligned.y = neighbor.position.y;
        }
    }

    aligned
}

/// Compute the final position for a drag or drop.
///
/// Neighbor alignment runs first, then grid snapping; when snapping is
/// disabled the candidate passes through untouched.
pub fn snapped_position(
    point: Point,
    components: &[PlacedComponent],
    exclude_id: Option<&ComponentId>,
    grid_size: f64,
    snap_enabled: bool,
) -> Point {
    if !snap_enabled {
        return point;
    }
    let aligned = align_to_neighbors(point, components, exclude_id, grid_size);
    snap_to_grid(aligned, grid_size)
}

/// Clamp a requested size to the component bounds.
///
/// With snapping enabled each dimension additionally rounds to the nearest
/// grid multiple, then re-clamps so rounding can never escape the bounds.
pub fn clamp_size(size: Size, grid_size: f64, snap_enabled: bool) -> Size {
    let mut width = size.width.clamp(MIN_WIDTH, MAX_WIDTH);
    let mut height = size.height.clamp(MIN_HEIGHT, MAX_HEIGHT);

    if snap_enabled {
        width = ((width / grid_size).round() * grid_size).clamp(MIN_WIDTH, MAX_WIDTH);
        height = ((height / grid_size).round() * grid_size).clamp(MIN_HEIGHT, MAX_HEIGHT);
    }

    Size::new(width, height)
}
