//! BlockStudio Core Library
//!
//! Platform-agnostic state and logic for the BlockStudio visual canvas
//! editor: the component store, the snap engine, the interaction
//! controller, linear undo/redo history, and the canvas surface glue.

pub mod component;
pub mod editor;
pub mod error;
pub mod history;
pub mod interaction;
pub mod snap;
pub mod storage;
pub mod store;
pub mod surface;
pub mod template;

pub use component::{ComponentId, ComponentPatch, DropDescriptor, PlacedComponent};
pub use editor::Editor;
pub use error::{DecodeError, ValidationError};
pub use history::{History, Snapshot};
pub use interaction::{Intent, InteractionController, InteractionMode, ResizeHandle};
pub use snap::{
    align_to_neighbors, clamp_size, snap_to_grid, snapped_position, COMPACT_GRID_SIZE, GRID_SIZE,
};
pub use storage::{MemoryProjectStore, Project, ProjectStore, StorageError};
pub use store::ComponentStore;
pub use surface::CanvasSurface;
pub use template::Template;
