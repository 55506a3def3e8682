//! Bootstrapper: resolve a mount target and bind a fresh root component to it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::EnvConfig;
use crate::core::component::Component;
use crate::core::document::{Document, DocumentRef};
use crate::error::{MountError, MountResult};
use crate::logging;
use crate::runtime::handle::AppHandle;
use crate::runtime::instance::{MountTarget, RootInstance};
use crate::runtime::mount_registry::{InstanceId, MountRegistry};

type RootFactory = Box<dyn Fn() -> Box<dyn Component>>;

/// Binds root components to elements of a host document.
///
/// Each successful [`Bootstrapper::initialize`] builds a new component from the root
/// factory, so repeated calls yield independent instances.
pub struct Bootstrapper {
    document: DocumentRef,
    root: RootFactory,
    registry: MountRegistry,
}

impl Bootstrapper {
    pub fn new<D, F, C>(document: Rc<RefCell<D>>, root: F) -> Self
    where
        D: Document + 'static,
        F: Fn() -> C + 'static,
        C: Component + 'static,
    {
        let document: DocumentRef = document;
        Self {
            document,
            root: Box::new(move || Box::new(root()) as Box<dyn Component>),
            registry: MountRegistry::new(),
        }
    }

    pub fn document(&self) -> DocumentRef {
        Rc::clone(&self.document)
    }

    /// Mount a new root instance on the element with id `target_id`.
    ///
    /// Fails with [`MountError::MountTargetNotFound`] without touching the document
    /// (and without constructing the component) when no such element exists. Mounting
    /// twice on one target is allowed: both instances render, side by side.
    pub fn initialize(&mut self, target_id: &str) -> MountResult<AppHandle> {
        let resolved = self.document.borrow().resolve(target_id);
        let Some(node) = resolved else {
            return Err(MountError::MountTargetNotFound {
                target_id: target_id.to_string(),
            });
        };
        tracing::debug!(mount_target = target_id, node = node.raw(), "resolved mount target");

        let existing = self.registry.live(target_id);
        if !existing.is_empty() {
            tracing::warn!(
                mount_target = target_id,
                existing = existing.len(),
                "mounting another root instance on an occupied target; content will be duplicated"
            );
        }

        let id = self.registry.allocate();
        let component = (self.root)();
        let instance = RootInstance::mount(
            id,
            MountTarget::new(target_id, node),
            Rc::clone(&self.document),
            component,
        );
        let instance = Rc::new(RefCell::new(instance));
        instance.borrow_mut().retain_self(Rc::clone(&instance));
        self.registry.record(target_id, id, &instance);
        Ok(AppHandle::new(instance))
    }

    /// Mount on the target id named by `config`.
    pub fn initialize_from_config(&mut self, config: &EnvConfig) -> MountResult<AppHandle> {
        self.initialize(&config.target_id)
    }

    /// Handle to a mounted instance created by this bootstrapper.
    pub fn handle(&self, id: InstanceId) -> Option<AppHandle> {
        self.registry.get(id).map(AppHandle::new)
    }

    /// Live, non-disposed instances mounted on `target_id`.
    pub fn mounts_for(&self, target_id: &str) -> Vec<InstanceId> {
        self.registry.live(target_id)
    }
}

/// Process entry point: read [`EnvConfig`], install logging and mount `root` on the
/// configured target (`"app"` unless `APP_MOUNT_TARGET` says otherwise).
///
/// A missing target is logged at error level and returned; the caller should abort
/// startup.
pub fn bootstrap<D, F, C>(document: Rc<RefCell<D>>, root: F) -> MountResult<AppHandle>
where
    D: Document + 'static,
    F: Fn() -> C + 'static,
    C: Component + 'static,
{
    let config = EnvConfig::from_env();
    logging::init(&config);
    Bootstrapper::new(document, root)
        .initialize_from_config(&config)
        .inspect_err(|err| tracing::error!(error = %err, "application bootstrap failed"))
}
