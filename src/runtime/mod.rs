//! Mount lifecycle: bootstrapper, root instances and their handles.

pub mod bootstrap;
pub mod handle;
pub mod instance;
pub mod mount_registry;

pub use bootstrap::{bootstrap, Bootstrapper};
pub use handle::AppHandle;
pub use instance::MountTarget;
pub use mount_registry::InstanceId;
