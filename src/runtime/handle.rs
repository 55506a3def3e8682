//! Application handle exposed to the embedding process.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::core::document::NodeId;
use crate::core::event::HostEvent;
use crate::runtime::instance::{MountTarget, RootInstance};
use crate::runtime::mount_registry::InstanceId;

/// Shared reference to a mounted root instance.
///
/// Clones refer to the same instance. Dropping every handle does not unmount: the
/// instance, its subscriptions and its rendered content stay alive until
/// [`AppHandle::dispose`] is called. [`crate::Bootstrapper::handle`] recovers a handle
/// by id.
#[derive(Clone)]
pub struct AppHandle {
    inner: Rc<RefCell<RootInstance>>,
}

impl AppHandle {
    pub(crate) fn new(inner: Rc<RefCell<RootInstance>>) -> Self {
        Self { inner }
    }

    pub fn id(&self) -> InstanceId {
        self.inner.borrow().id()
    }

    pub fn target(&self) -> MountTarget {
        self.inner.borrow().target().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().is_mounted()
    }

    /// Top-level nodes this instance currently has under its target.
    ///
    /// An empty render is represented by a single empty text node.
    pub fn rendered_nodes(&self) -> Vec<NodeId> {
        self.inner.borrow().nodes().to_vec()
    }

    /// Whether a watched signal changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.inner.borrow().is_dirty()
    }

    /// Apply a pending re-render. Returns whether the subtree was rebuilt.
    pub fn flush(&self) -> bool {
        self.inner.borrow_mut().flush()
    }

    /// Forward `event` to the root component, then flush.
    pub fn dispatch(&self, event: &HostEvent) -> bool {
        self.inner.borrow_mut().dispatch(event)
    }

    /// Unmount: remove rendered nodes and release subscriptions.
    ///
    /// Idempotent; returns `false` when the instance was already disposed. Every clone
    /// observes the disposal.
    pub fn dispose(&self) -> bool {
        let (disposed, keep_alive) = {
            let mut instance = self.inner.borrow_mut();
            (instance.dispose(), instance.take_keep_alive())
        };
        drop(keep_alive);
        disposed
    }

    /// Whether both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &AppHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AppHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(instance) => f
                .debug_struct("AppHandle")
                .field("id", &instance.id())
                .field("target", instance.target())
                .field("mounted", &instance.is_mounted())
                .finish(),
            Err(_) => f.debug_struct("AppHandle").finish_non_exhaustive(),
        }
    }
}
