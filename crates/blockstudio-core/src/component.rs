//! Placed components and the palette drop payload.

use crate::error::{DecodeError, ValidationError};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Opaque component identifier, unique within a canvas session.
pub type ComponentId = String;

/// Minimum component width in canvas units.
pub const MIN_WIDTH: f64 = 80.0;
/// Maximum component width in canvas units.
pub const MAX_WIDTH: f64 = 800.0;
/// Minimum component height in canvas units.
pub const MIN_HEIGHT: f64 = 60.0;
/// Maximum component height in canvas units.
pub const MAX_HEIGHT: f64 = 600.0;

/// Size given to a component when it is first dropped on the canvas.
pub const DEFAULT_DROP_SIZE: Size = Size::new(200.0, 100.0);

/// Generate a fresh component id.
///
/// Ids are random UUIDs owned by the store, never derived from existing
/// entries, so they stay unique regardless of insertion order or deletions.
pub(crate) fn generate_id() -> ComponentId {
    Uuid::new_v4().to_string()
}

/// A component placed on the canvas: an absolute-positioned rectangle with
/// a semantic kind and an open property bag owned by the editing UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    /// Unique id, generated at creation and never reused.
    pub id: ComponentId,
    /// Semantic kind tag, e.g. "button" or "hero".
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Display icon name.
    pub icon: String,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Width and height in canvas units.
    pub size: Size,
    /// Open style/content mapping; not validated by the core.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl PlacedComponent {
    /// Create a validated component. Construction enforces the id, kind and
    /// geometry invariants so call sites never need ad hoc checks.
    pub fn new(
        id: ComponentId,
        kind: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        position: Point,
        size: Size,
        properties: Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        let component = Self {
            id,
            kind: kind.into(),
            name: name.into(),
            icon: icon.into(),
            position,
            size,
            properties,
        };
        component.validate()?;
        Ok(component)
    }

    /// Check the invariants: non-empty id and kind, finite position,
    /// finite positive size.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if self.kind.is_empty() {
            return Err(ValidationError::EmptyKind);
        }
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(ValidationError::NonFinitePosition {
                x: self.position.x,
                y: self.position.y,
            });
        }
        if !self.size.width.is_finite()
            || !self.size.height.is_finite()
            || self.size.width <= 0.0
            || self.size.height <= 0.0
        {
            return Err(ValidationError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(())
    }

    /// Build a new component by merging a patch into this one.
    ///
    /// The id and kind are fixed for the component's lifetime; everything
    /// else is replaced wholesale. The merged value is re-validated so a
    /// bad patch can never corrupt the store.
    pub fn merged(&self, patch: &ComponentPatch) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(icon) = &patch.icon {
            next.icon = icon.clone();
        }
        if let Some(position) = patch.position {
            next.position = position;
        }
        if let Some(size) = patch.size {
            next.size = size;
        }
        if let Some(properties) = &patch.properties {
            for (key, value) in properties {
                next.properties.insert(key.clone(), value.clone());
            }
        }
        next.validate()?;
        Ok(next)
    }
}

/// A partial update applied to an existing component.
///
/// Mutation is merge-then-replace: the store builds a fresh component from
/// the current value plus the patch and swaps it in, never editing fields
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    /// Property entries to merge into the existing bag.
    pub properties: Option<Map<String, Value>>,
}

impl ComponentPatch {
    /// Patch that only moves the component.
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Patch that only resizes the component.
    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }
}

/// Palette descriptor carried by a drag-and-drop payload.
///
/// Serialized as JSON text at drag start and decoded at the moment of drop;
/// a payload that fails to round-trip aborts the drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropDescriptor {
    /// Semantic kind of the component to create.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Display icon name.
    #[serde(default)]
    pub icon: String,
    /// Palette category; carried through but ignored by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl DropDescriptor {
    /// Decode a serialized drop payload.
    pub fn decode(payload: &str) -> Result<Self, DecodeError> {
        let descriptor: Self = serde_json::from_str(payload)?;
        if descriptor.kind.is_empty() {
            return Err(DecodeError::MissingKind);
        }
        Ok(descriptor)
    }

    /// Encode this descriptor for transfer.
    pub fn encode(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Initial property bag for a freshly dropped component.
pub fn default_properties(name: &str) -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("text".into(), Value::String(name.to_string()));
    properties.insert("backgroundColor".into(), Value::String("#1E293B".into()));
    properties.insert("textColor".into(), Value::String("#F1F5F9".into()));
    properties.insert("borderRadius".into(), Value::from(8));
    properties.insert("opacity".into(), Value::from(100));
    properties.insert("fontSize".into(), Value::String("md".into()));
    properties.insert("fontWeight".into(), Value::String("normal".into()));
    properties.insert("textAlign".into(), Value::String("left".into()));
    properties
}
