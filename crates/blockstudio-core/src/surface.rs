//! Canvas surface state: the drop target and viewport glue.
//!
//! Purely transient visual affordances (drag-over highlight, grid
//! visibility) plus the event-to-canvas coordinate translation. No
//! business logic lives here.

use crate::snap::{COMPACT_GRID_SIZE, GRID_SIZE};
use kurbo::Point;

/// Drop-target and viewport state for the canvas area.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    /// A drag is hovering over the canvas.
    pub drag_over: bool,
    /// The dot grid overlay is visible.
    pub grid_visible: bool,
    /// Top-left of the canvas in event (window) coordinates.
    origin: Point,
    /// Current grid pitch; 20 normally, 15 in compact viewports.
    grid_size: f64,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self {
            drag_over: false,
            grid_visible: false,
            origin: Point::ZERO,
            grid_size: GRID_SIZE,
        }
    }
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the canvas sits in the window, for coordinate
    /// translation.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Translate an event position into canvas-local coordinates.
    pub fn to_canvas(&self, event_position: Point) -> Point {
        Point::new(
            event_position.x - self.origin.x,
            event_position.y - self.origin.y,
        )
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Switch between the normal and compact grid pitch.
    pub fn set_compact(&mut self, compact: bool) {
        self.grid_size = if compact { COMPACT_GRID_SIZE } else { GRID_SIZE };
    }

    /// A drag entered the canvas: show the drop highlight.
    pub fn drag_enter(&mut self) {
        self.drag_over = true;
    }

    /// The drag left or was cancelled: clear the highlight without
    /// touching committed state.
    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    /// The pointer entered the canvas: reveal the grid.
    pub fn pointer_enter(&mut self) {
        self.grid_visible = true;
    }

    /// The pointer left the canvas: hide the grid.
    pub fn pointer_leave(&mut self) {
        self.grid_visible = false;
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }
}
