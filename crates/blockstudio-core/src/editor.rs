//! The editor: owning coordinator for the canvas subsystem.
//!
//! Raw events flow in from the UI shell, the interaction controller
//! validates them into intents, the editor applies each intent to the
//! component store and checkpoints history. This is the only place where
//! intents become mutations.

use crate::component::{ComponentId, ComponentPatch, PlacedComponent, DEFAULT_DROP_SIZE};
use crate::history::{History, Snapshot};
use crate::interaction::{Intent, InteractionController, InteractionMode, ResizeHandle};
use crate::snap::snapped_position;
use crate::store::ComponentStore;
use crate::surface::CanvasSurface;
use crate::template::Template;
use kurbo::{Point, Size};

/// Top-level editor state: store, history, interaction controller and
/// surface, plus the session-wide snapping switch.
#[derive(Debug, Clone)]
pub struct Editor {
    store: ComponentStore,
    history: History,
    controller: InteractionController,
    surface: CanvasSurface,
    snap_enabled: bool,
    project_name: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(InteractionMode::Pointer)
    }
}

impl Editor {
    /// Create an empty editor. History starts with the empty-canvas
    /// snapshot at cursor 0.
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            store: ComponentStore::new(),
            history: History::new(Snapshot::empty()),
            controller: InteractionController::new(mode),
            surface: CanvasSurface::new(),
            snap_enabled: true,
            project_name: "Untitled Project".to_string(),
        }
    }

    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut CanvasSurface {
        &mut self.surface
    }

    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap_enabled = enabled;
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    /// Capture the current store state for history.
    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.store.list().to_vec(), self.store.selected_id().cloned())
    }

    /// Record one history entry for a completed user action.
    fn checkpoint(&mut self) {
        self.history.record(self.snapshot());
    }

    /// Apply a validated intent to the store. Mutating intents checkpoint
    /// history; selection does not (it rides along inside the next
    /// mutating snapshot). Returns whether a mutation occurred.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Add {
                descriptor,
                position,
            } => {
                let position = snapped_position(
                    position,
                    self.store.list(),
                    None,
                    self.surface.grid_size(),
                    self.snap_enabled,
                );
                match self.store.insert(&descriptor, position, DEFAULT_DROP_SIZE) {
                    Ok(component) => {
                        let id = component.id.clone();
                        self.store.select(&id);
                        self.checkpoint();
                        true
                    }
                    Err(err) => {
                        log::warn!("add rejected: {err}");
                        false
                    }
                }
            }
            Intent::Move { id, position } => {
                if self.store.update(&id, &ComponentPatch::position(position)) {
                    self.checkpoint();
                    true
                } else {
                    false
                }
            }
            Intent::Resize { id, size } => {
                if self.store.update(&id, &ComponentPatch::size(size)) {
                    self.checkpoint();
                    true
                } else {
                    false
                }
            }
            Intent::Select { id } => {
                self.store.select(&id);
                false
            }
            Intent::Delete { id } => {
                if self.store.remove(&id).is_some() {
                    self.checkpoint();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// A palette payload dropped on the canvas at a raw window position.
    /// Returns the id of the created component.
    pub fn drop_payload(&mut self, payload: &str, event_position: Point) -> Option<ComponentId> {
        self.surface.drag_leave();
        let position = self.surface.to_canvas(event_position);
        let intent = self.controller.drop_payload(payload, position)?;
        if self.apply(intent) {
            self.store.selected_id().cloned()
        } else {
            None
        }
    }

    /// Click or tap on a component.
    pub fn press(&mut self, id: &ComponentId) {
        if let Some(intent) = self.controller.press(&self.store, id) {
            self.apply(intent);
        }
    }

    /// Click or tap on empty canvas; selection persists.
    pub fn press_empty(&mut self) {
        if let Some(intent) = self.controller.press_empty() {
            self.apply(intent);
        }
    }

    /// The explicit delete control.
    pub fn delete(&mut self, id: &ComponentId) -> bool {
        match self.controller.delete(&self.store, id) {
            Some(intent) => self.apply(intent),
            None => false,
        }
    }

    /// Delete the selected component, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.store.selected_id().cloned() {
            Some(id) => self.delete(&id),
            None => false,
        }
    }

    /// Start dragging a component (pointer mode).
    pub fn begin_drag(&mut self, id: &ComponentId, point: Point) -> bool {
        self.controller.begin_drag(&self.store, id, point)
    }

    /// Live drag frame; returns the preview position for rendering.
    pub fn drag_to(&mut self, point: Point) -> Option<Point> {
        self.controller.drag_to(point)
    }

    /// Drag-stop: commit the snapped move and checkpoint.
    pub fn end_drag(&mut self, point: Point) -> bool {
        let intent = self.controller.end_drag(
            &self.store,
            point,
            self.surface.grid_size(),
            self.snap_enabled,
        );
        match intent {
            Some(intent) => self.apply(intent),
            None => false,
        }
    }

    /// Start a handle resize on the selected component (pointer mode).
    pub fn begin_resize(&mut self, id: &ComponentId, handle: ResizeHandle, point: Point) -> bool {
        self.controller.begin_resize(&self.store, id, handle, point)
    }

    /// Live resize frame; returns the preview size for rendering.
    pub fn resize_to(&mut self, point: Point) -> Option<Size> {
        self.controller.resize_to(point)
    }

    /// Resize-stop: commit the clamped size and checkpoint.
    pub fn end_resize(&mut self, point: Point) -> bool {
        let intent = self.controller.end_resize(
            &self.store,
            point,
            self.surface.grid_size(),
            self.snap_enabled,
        );
        match intent {
            Some(intent) => self.apply(intent),
            None => false,
        }
    }

    /// Pointer-cancel / drag-leave: drop all transient interaction state
    /// and visual affordances; committed state is untouched.
    pub fn cancel_interaction(&mut self) {
        self.controller.cancel();
        self.surface.drag_leave();
    }

    /// Property-editor entry point: merge-then-replace plus checkpoint.
    pub fn update_properties(&mut self, id: &ComponentId, patch: &ComponentPatch) -> bool {
        if self.store.update(id, patch) {
            self.checkpoint();
            true
        } else {
            false
        }
    }

    /// Restore the previous snapshot: whole list and selection in a single
    /// assignment. Returns whether a step was taken.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(snapshot) => {
                self.store.replace_all(snapshot.components, snapshot.selected);
                true
            }
            None => false,
        }
    }

    /// Re-apply the next snapshot, if an undo left one ahead of the cursor.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(snapshot) => {
                self.store.replace_all(snapshot.components, snapshot.selected);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the whole canvas with a template's components and restart
    /// history from that state.
    pub fn load_template(&mut self, template: &Template) {
        self.store.replace_all(template.components.clone(), None);
        if !template.is_blank() {
            self.project_name = template.name.clone();
        }
        self.history.reset(self.snapshot());
    }

    /// The component list handed to the persistence collaborator on save.
    pub fn components(&self) -> &[PlacedComponent] {
        self.store.list()
    }

    /// Load a previously saved component list, replacing the canvas and
    /// restarting history, exactly like a template.
    pub fn load_components(&mut self, components: Vec<PlacedComponent>) {
        self.store.replace_all(components, None);
        self.history.reset(self.snapshot());
    }
}
