//! Interaction controller: turns raw, untrusted pointer/touch/drag events
//! into validated intents.
//!
//! The controller never mutates canvas state itself. It validates an event
//! against the current store, tracks the transient drag/resize in progress,
//! and hands the owning editor an [`Intent`] describing the requested
//! change. Events that fail validation are dropped with a diagnostic and
//! produce no intent at all.

use crate::component::{ComponentId, DropDescriptor};
use crate::snap::{clamp_size, snapped_position};
use crate::store::ComponentStore;
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// How the session's input device drives the canvas.
///
/// A capability switch selected once per session, not scattered
/// conditionals: pointer sessions get palette drops, live drag and handle
/// resize, touch sessions get tap-select and an explicit delete control
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Pointer,
    Touch,
}

impl InteractionMode {
    /// Continuous drag-to-move is available.
    pub fn supports_drag(self) -> bool {
        matches!(self, InteractionMode::Pointer)
    }

    /// Handle-based resize is available.
    pub fn supports_resize(self) -> bool {
        matches!(self, InteractionMode::Pointer)
    }

    /// Palette drag-and-drop can create components.
    pub fn supports_drop(self) -> bool {
        matches!(self, InteractionMode::Pointer)
    }
}

/// A validated, structured description of a requested state change.
///
/// The owning editor applies intents to the store and checkpoints history;
/// the controller only produces them.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Add {
        descriptor: DropDescriptor,
        position: Point,
    },
    Move {
        id: ComponentId,
        position: Point,
    },
    Resize {
        id: ComponentId,
        size: Size,
    },
    Select {
        id: ComponentId,
    },
    Delete {
        id: ComponentId,
    },
}

/// The eight resize handles shown around a selected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl ResizeHandle {
    /// All handles, in clockwise order from the top-left.
    pub fn all() -> [ResizeHandle; 8] {
        [
            ResizeHandle::TopLeft,
            ResizeHandle::Top,
            ResizeHandle::TopRight,
            ResizeHandle::Right,
            ResizeHandle::BottomRight,
            ResizeHandle::Bottom,
            ResizeHandle::BottomLeft,
            ResizeHandle::Left,
        ]
    }

    /// Per-axis sign factors mapping a pointer delta to a size delta.
    /// Zero means the axis is not affected by this handle.
    fn signs(self) -> (f64, f64) {
        match self {
            ResizeHandle::TopLeft => (-1.0, -1.0),
            ResizeHandle::Top => (0.0, -1.0),
            ResizeHandle::TopRight => (1.0, -1.0),
            ResizeHandle::Right => (1.0, 0.0),
            ResizeHandle::BottomRight => (1.0, 1.0),
            ResizeHandle::Bottom => (0.0, 1.0),
            ResizeHandle::BottomLeft => (-1.0, 1.0),
            ResizeHandle::Left => (-1.0, 0.0),
        }
    }
}

/// An in-flight drag: the component follows the pointer live, and the
/// final position is snapped and committed on drag-stop.
#[derive(Debug, Clone)]
struct DragState {
    id: ComponentId,
    /// Offset from the pointer to the component's top-left at grab time,
    /// so the component does not jump under the cursor.
    grab_offset: Vec2,
    /// Last valid live position, used when the stop event itself is bad.
    live_position: Point,
}

/// An in-flight handle resize.
#[derive(Debug, Clone)]
struct ResizeState {
    id: ComponentId,
    handle: ResizeHandle,
    start: Point,
    original_size: Size,
    live_size: Size,
}

fn finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Validates raw events and emits intents. Holds only transient working
/// state for the single interaction in flight; component data stays in the
/// store.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    mode: InteractionMode,
    drag: Option<DragState>,
    resize: Option<ResizeState>,
}

impl InteractionController {
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            mode,
            drag: None,
            resize: None,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Whether a drag or resize is currently in flight.
    pub fn is_active(&self) -> bool {
        self.drag.is_some() || self.resize.is_some()
    }

    /// A click or tap on a component. Returns a select intent when the id
    /// resolves; an unresolvable id is dropped.
    pub fn press(&self, store: &ComponentStore, id: &ComponentId) -> Option<Intent> {
        if id.is_empty() || !store.contains(id) {
            log::warn!("press on unresolvable component {id:?}, dropping event");
            return None;
        }
        Some(Intent::Select { id: id.clone() })
    }

    /// A click or tap on empty canvas. Selection persists, so this is
    /// never an intent.
    pub fn press_empty(&self) -> Option<Intent> {
        None
    }

    /// The explicit delete control. Available in both modes; the id must
    /// resolve.
    pub fn delete(&self, store: &ComponentStore, id: &ComponentId) -> Option<Intent> {
        if id.is_empty() || !store.contains(id) {
            log::warn!("delete for unresolvable component {id:?}, dropping event");
            return None;
        }
        Some(Intent::Delete { id: id.clone() })
    }

    /// A serialized palette payload dropped at a canvas-local position.
    /// Pointer mode only; decode failure aborts the drop with no intent.
    pub fn drop_payload(&self, payload: &str, position: Point) -> Option<Intent> {
        if !self.mode.supports_drop() {
            log::debug!("palette drop unavailable in {:?} mode", self.mode);
            return None;
        }
        if !finite(position) {
            log::warn!("drop at non-finite position, dropping event");
            return None;
        }
        match DropDescriptor::decode(payload) {
            Ok(descriptor) => Some(Intent::Add {
                descriptor,
                position,
            }),
            Err(err) => {
                log::warn!("aborting drop, payload failed to decode: {err}");
                None
            }
        }
    }

    /// Start dragging a component. Pointer mode only; one interaction may
    /// be active at a time, and the target id must resolve.
    pub fn begin_drag(&mut self, store: &ComponentStore, id: &ComponentId, point: Point) -> bool {
        if !self.mode.supports_drag() {
            log::debug!("drag unavailable in {:?} mode", self.mode);
            return false;
        }
        if self.is_active() {
            log::warn!("drag start while another interaction is active, dropping event");
            return false;
        }
        if !finite(point) {
            log::warn!("drag start at non-finite position, dropping event");
            return false;
        }
        if id.is_empty() {
            log::warn!("drag start without a component id, dragging disabled");
            return false;
        }
        let Some(component) = store.get(id) else {
            log::warn!("drag start on unresolvable component {id:?}, dropping event");
            return false;
        };

        self.drag = Some(DragState {
            id: id.clone(),
            grab_offset: component.position - point,
            live_position: component.position,
        });
        true
    }

    /// Continuous drag update. Returns the live (unsnapped) position for
    /// rendering; a non-finite frame is skipped without touching state.
    pub fn drag_to(&mut self, point: Point) -> Option<Point> {
        let drag = self.drag.as_mut()?;
        if !finite(point) {
            log::warn!("non-finite drag frame, skipping");
            return None;
        }
        drag.live_position = point + drag.grab_offset;
        Some(drag.live_position)
    }

    /// Drag-stop: compute the snapped final position and emit a move
    /// intent. A bad stop coordinate falls back to the last valid frame.
    pub fn end_drag(
        &mut self,
        store: &ComponentStore,
        point: Point,
        grid_size: f64,
        snap_enabled: bool,
    ) -> Option<Intent> {
        let drag = self.drag.take()?;

        if !store.check_integrity() {
            log::warn!("component list failed integrity check, dropping move");
            return None;
        }
        if !store.contains(&drag.id) {
            log::warn!("drag target {:?} vanished, dropping move", drag.id);
            return None;
        }

        let candidate = if finite(point) {
            point + drag.grab_offset
        } else {
            log::warn!("non-finite drag stop, using last valid position");
            drag.live_position
        };
        let position = snapped_position(
            candidate,
            store.list(),
            Some(&drag.id),
            grid_size,
            snap_enabled,
        );
        Some(Intent::Move {
            id: drag.id,
            position,
        })
    }

    /// Start a handle resize. Pointer mode only, and the handle set is
    /// only live while the component is selected.
    pub fn begin_resize(
        &mut self,
        store: &ComponentStore,
        id: &ComponentId,
        handle: ResizeHandle,
        point: Point,
    ) -> bool {
        if !self.mode.supports_resize() {
            log::debug!("resize unavailable in {:?} mode", self.mode);
            return false;
        }
        if self.is_active() {
            log::warn!("resize start while another interaction is active, dropping event");
            return false;
        }
        if !finite(point) {
            log::warn!("resize start at non-finite position, dropping event");
            return false;
        }
        if store.selected_id() != Some(id) {
            log::warn!("resize handles are only active on the selected component, dropping event");
            return false;
        }
        let Some(component) = store.get(id) else {
            log::warn!("resize start on unresolvable component {id:?}, dropping event");
            return false;
        };

        self.resize = Some(ResizeState {
            id: id.clone(),
            handle,
            start: point,
            original_size: component.size,
            live_size: component.size,
        });
        true
    }

    /// Continuous resize update. Returns the live size for rendering.
    pub fn resize_to(&mut self, point: Point) -> Option<Size> {
        let resize = self.resize.as_mut()?;
        if !finite(point) {
            log::warn!("non-finite resize frame, skipping");
            return None;
        }
        let (sx, sy) = resize.handle.signs();
        let delta = point - resize.start;
        resize.live_size = Size::new(
            resize.original_size.width + sx * delta.x,
            resize.original_size.height + sy * delta.y,
        );
        Some(resize.live_size)
    }

    /// Resize-stop: clamp the requested size and emit a resize intent.
    pub fn end_resize(
        &mut self,
        store: &ComponentStore,
        point: Point,
        grid_size: f64,
        snap_enabled: bool,
    ) -> Option<Intent> {
        let resize = self.resize.take()?;

        if !store.contains(&resize.id) {
            log::warn!("resize target {:?} vanished, dropping resize", resize.id);
            return None;
        }

        let requested = if finite(point) {
            let (sx, sy) = resize.handle.signs();
            let delta = point - resize.start;
            Size::new(
                resize.original_size.width + sx * delta.x,
                resize.original_size.height + sy * delta.y,
            )
        } else {
            log::warn!("non-finite resize stop, using last valid size");
            resize.live_size
        };
        Some(Intent::Resize {
            id: resize.id,
            size: clamp_size(requested, grid_size, snap_enabled),
        })
    }

    /// Pointer-cancel / drag-leave: discard transient interaction state.
    /// Committed state is untouched, so the canvas renders exactly its
    /// pre-interaction appearance.
    pub fn cancel(&mut self) {
        self.drag = None;
        self.resize = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::DropDescriptor;

    fn seeded_store() -> (ComponentStore, ComponentId) {
        let mut store = ComponentStore::new();
        let descriptor = DropDescriptor {
            kind: "button".into(),
            name: "Button".into(),
            icon: "Square".into(),
            category: None,
        };
        let id = store
            .insert(&descriptor, Point::new(100.0, 100.0), Size::new(200.0, 100.0))
            .unwrap()
            .id
            .clone();
        (store, id)
    }

    #[test]
    fn test_press_resolvable_id_selects() {
        let (store, id) = seeded_store();
        let controller = InteractionController::new(InteractionMode::Pointer);

        assert_eq!(
            controller.press(&store, &id),
            Some(Intent::Select { id: id.clone() })
        );
        assert_eq!(controller.press(&store, &"ghost".to_string()), None);
        assert_eq!(controller.press_empty(), None);
    }

    #[test]
    fn test_drag_move_snap_flow() {
        let (store, id) = seeded_store();
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        // Grab the component at an interior point
        assert!(controller.begin_drag(&store, &id, Point::new(110.0, 110.0)));
        assert!(controller.is_active());

        // Live update follows the pointer with the grab offset applied
        let live = controller.drag_to(Point::new(150.0, 150.0)).unwrap();
        assert_eq!(live, Point::new(140.0, 140.0));

        // Drag-stop snaps to the grid (no neighbors in range)
        let intent = controller
            .end_drag(&store, Point::new(163.0, 151.0), 20.0, true)
            .unwrap();
        assert_eq!(
            intent,
            Intent::Move {
                id,
                position: Point::new(160.0, 140.0),
            }
        );
        assert!(!controller.is_active());
    }

    #[test]
    fn test_drag_rejected_in_touch_mode() {
        let (store, id) = seeded_store();
        let mut controller = InteractionController::new(InteractionMode::Touch);

        assert!(!controller.begin_drag(&store, &id, Point::new(110.0, 110.0)));
        assert!(!controller.is_active());
    }

    #[test]
    fn test_touch_mode_still_selects_and_deletes() {
        let (store, id) = seeded_store();
        let controller = InteractionController::new(InteractionMode::Touch);

        assert!(controller.press(&store, &id).is_some());
        assert_eq!(
            controller.delete(&store, &id),
            Some(Intent::Delete { id })
        );
    }

    #[test]
    fn test_nan_drag_frames_are_skipped() {
        let (store, id) = seeded_store();
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        assert!(controller.begin_drag(&store, &id, Point::new(110.0, 110.0)));
        assert_eq!(controller.drag_to(Point::new(f64::NAN, 50.0)), None);

        // A NaN stop coordinate falls back to the last valid frame
        controller.drag_to(Point::new(130.0, 110.0));
        let intent = controller
            .end_drag(&store, Point::new(f64::NAN, f64::NAN), 20.0, true)
            .unwrap();
        assert_eq!(
            intent,
            Intent::Move {
                id,
                position: Point::new(120.0, 100.0)
            }
        );
    }

    #[test]
    fn test_nan_drag_start_is_dropped() {
        let (store, id) = seeded_store();
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        assert!(!controller.begin_drag(&store, &id, Point::new(f64::NAN, 0.0)));
        assert!(!controller.is_active());
    }

    #[test]
    fn test_single_interaction_at_a_time() {
        let (mut store, id) = seeded_store();
        store.select(&id);
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        assert!(controller.begin_drag(&store, &id, Point::new(110.0, 110.0)));
        assert!(!controller.begin_resize(
            &store,
            &id,
            ResizeHandle::BottomRight,
            Point::new(300.0, 200.0)
        ));
    }

    #[test]
    fn test_resize_requires_selection() {
        let (mut store, id) = seeded_store();
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        assert!(!controller.begin_resize(
            &store,
            &id,
            ResizeHandle::Right,
            Point::new(300.0, 150.0)
        ));

        store.select(&id);
        assert!(controller.begin_resize(
            &store,
            &id,
            ResizeHandle::Right,
            Point::new(300.0, 150.0)
        ));
    }

    #[test]
    fn test_resize_clamps_on_stop() {
        let (mut store, id) = seeded_store();
        store.select(&id);
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        assert!(controller.begin_resize(
            &store,
            &id,
            ResizeHandle::BottomRight,
            Point::new(300.0, 200.0)
        ));
        // Shrink far below the floor on both axes
        let intent = controller
            .end_resize(&store, Point::new(-400.0, -400.0), 20.0, false)
            .unwrap();
        assert_eq!(
            intent,
            Intent::Resize {
                id,
                size: Size::new(80.0, 60.0)
            }
        );
    }

    #[test]
    fn test_resize_handle_axes() {
        let (mut store, id) = seeded_store();
        store.select(&id);
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        // Top edge handle only affects height; dragging up grows it
        assert!(controller.begin_resize(&store, &id, ResizeHandle::Top, Point::new(200.0, 100.0)));
        let intent = controller
            .end_resize(&store, Point::new(250.0, 60.0), 20.0, false)
            .unwrap();
        assert_eq!(
            intent,
            Intent::Resize {
                id,
                size: Size::new(200.0, 140.0)
            }
        );
    }

    #[test]
    fn test_cancel_discards_transient_state() {
        let (store, id) = seeded_store();
        let mut controller = InteractionController::new(InteractionMode::Pointer);

        assert!(controller.begin_drag(&store, &id, Point::new(110.0, 110.0)));
        controller.drag_to(Point::new(400.0, 400.0));
        controller.cancel();

        assert!(!controller.is_active());
        assert_eq!(controller.end_drag(&store, Point::new(400.0, 400.0), 20.0, true), None);
    }

    #[test]
    fn test_drop_payload_decode() {
        let controller = InteractionController::new(InteractionMode::Pointer);

        let payload = r#"{"type":"button","name":"Button","icon":"Square","category":"Basic"}"#;
        let intent = controller
            .drop_payload(payload, Point::new(52.0, 52.0))
            .unwrap();
        assert!(matches!(intent, Intent::Add { ref descriptor, .. } if descriptor.kind == "button"));

        assert_eq!(controller.drop_payload("{broken", Point::new(52.0, 52.0)), None);
        assert_eq!(controller.drop_payload(payload, Point::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn test_drop_rejected_in_touch_mode() {
        let controller = InteractionController::new(InteractionMode::Touch);

        let payload = r#"{"type":"button","name":"Button","icon":"Square"}"#;
        assert_eq!(controller.drop_payload(payload, Point::new(52.0, 52.0)), None);
    }
}
