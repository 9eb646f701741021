//! Storage abstraction for project persistence.
//!
//! The core hands a project (name plus opaque component list) to a
//! backend and gets the same shape back on load; no storage format is
//! interpreted here.

mod memory;

pub use memory::MemoryProjectStore;

use crate::component::PlacedComponent;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("project not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage backends.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A saved project: the canvas component list under a project name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub components: Vec<PlacedComponent>,
}

impl Project {
    pub fn new(name: impl Into<String>, components: Vec<PlacedComponent>) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }
}

/// Minimal single-future executor for driving storage futures in tests.
/// The in-memory backend never returns `Pending`, so busy-polling is fine.
#[doc(hidden)]
pub fn block_on<F: Future>(f: F) -> F::Output {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}

/// Trait for project storage backends.
///
/// Implementations can keep projects in memory, on disk, or behind an
/// API; the editor treats them all as the same black box.
pub trait ProjectStore: Send + Sync {
    /// Save a project under its name, replacing any existing entry.
    fn save(&self, project: &Project) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a project by name.
    fn load(&self, name: &str) -> BoxFuture<'_, StorageResult<Project>>;

    /// Delete a project.
    fn delete(&self, name: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all saved project names.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a project exists.
    fn exists(&self, name: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
