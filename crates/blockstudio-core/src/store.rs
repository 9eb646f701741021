//! The component store: authoritative in-memory collection of placed
//! components plus the single selection reference.

use crate::component::{
    default_properties, generate_id, ComponentId, ComponentPatch, DropDescriptor,
    PlacedComponent,
};
use crate::error::ValidationError;
use kurbo::{Point, Size};

/// Owns the ordered component list (insertion order = paint order) and the
/// current selection. Selection is a weak reference by id: removing the
/// referenced component clears it.
///
/// Callers never get a handle to the internal list; every mutation goes
/// through a validated operation.
#[derive(Debug, Clone, Default)]
pub struct ComponentStore {
    components: Vec<PlacedComponent>,
    selected: Option<ComponentId>,
}

impl ComponentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-built component.
    ///
    /// Fails if the component breaks its own invariants or its id collides
    /// with an existing entry. On success returns the stored copy.
    pub fn add(&mut self, component: PlacedComponent) -> Result<&PlacedComponent, ValidationError> {
        component.validate()?;
        if self.contains(&component.id) {
            return Err(ValidationError::DuplicateId(component.id));
        }
        let index = self.components.len();
        self.components.push(component);
        Ok(&self.components[index])
    }

    /// Create a component from a palette descriptor at the given position.
    ///
    /// The store owns id generation, so a drop can never collide with or
    /// depend on existing ids.
    pub fn insert(
        &mut self,
        descriptor: &DropDescriptor,
        position: Point,
        size: Size,
    ) -> Result<&PlacedComponent, ValidationError> {
        let component = PlacedComponent::new(
            generate_id(),
            descriptor.kind.clone(),
            descriptor.name.clone(),
            descriptor.icon.clone(),
            position,
            size,
            default_properties(&descriptor.name),
        )?;
        self.add(component)
    }

    /// Merge a patch into the component with the given id, replacing the
    /// stored value wholesale.
    ///
    /// An unknown id or an invalid merged value is a logged no-op, not a
    /// failure: interaction events can race selection changes, and a stale
    /// update must not take the editor down. Returns whether an update
    /// was applied.
    pub fn update(&mut self, id: &ComponentId, patch: &ComponentPatch) -> bool {
        let Some(index) = self.components.iter().position(|c| &c.id == id) else {
            log::warn!("update for unknown component {id}, skipping");
            return false;
        };
        match self.components[index].merged(patch) {
            Ok(next) => {
                self.components[index] = next;
                true
            }
            Err(err) => {
                log::warn!("invalid update for component {id}: {err}");
                false
            }
        }
    }

    /// Remove the component with the given id, clearing the selection if it
    /// pointed at the removed entry. No-op if absent.
    pub fn remove(&mut self, id: &ComponentId) -> Option<PlacedComponent> {
        let index = self.components.iter().position(|c| &c.id == id)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Some(self.components.remove(index))
    }

    /// Look up a component by id.
    pub fn get(&self, id: &ComponentId) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| &c.id == id)
    }

    /// All components in insertion (paint) order.
    pub fn list(&self) -> &[PlacedComponent] {
        &self.components
    }

    /// Check whether an id resolves to a component.
    pub fn contains(&self, id: &ComponentId) -> bool {
        self.components.iter().any(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Select a component by id; unresolvable ids are a logged no-op.
    pub fn select(&mut self, id: &ComponentId) -> bool {
        if self.contains(id) {
            self.selected = Some(id.clone());
            true
        } else {
            log::warn!("select for unknown component {id}, skipping");
            false
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Id of the selected component, if any.
    pub fn selected_id(&self) -> Option<&ComponentId> {
        self.selected.as_ref()
    }

    /// The selected component, if the selection still resolves.
    pub fn selected(&self) -> Option<&PlacedComponent> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Replace the entire list and selection in one assignment.
    ///
    /// Used for snapshot restore and template load; a selection that does
    /// not resolve in the new list is dropped.
    pub fn replace_all(
        &mut self,
        components: Vec<PlacedComponent>,
        selected: Option<ComponentId>,
    ) {
        self.components = components;
        self.selected = selected.filter(|id| self.contains(id));
    }

    /// Verify the collection is still a well-formed ordered sequence:
    /// every entry valid, no duplicate ids. Guards scans against corrupted
    /// upstream state.
    pub fn check_integrity(&self) -> bool {
        for (i, component) in self.components.iter().enumerate() {
            if component.validate().is_err() {
                return false;
            }
            if self.components[..i].iter().any(|c| c.id == component.id) {
                return false;
            }
        }
        true
    }
}
