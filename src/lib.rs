//! Bootstrap for a document-hosted UI.
//!
//! Resolves a mount target by element id in a host [`Document`] and binds a freshly
//! built root [`Component`] to it, returning an [`AppHandle`] the embedding process
//! owns.
//!
//! Invariant: a mounted instance is the only writer of the nodes it inserts under its
//! target.
//!
//! # Public API Overview
//! - Mount with [`Bootstrapper::initialize`], or [`bootstrap`] for env-configured
//!   startup (target `"app"` by default).
//! - Describe content with [`View`] and react to [`Signal`] writes via [`Scope::watch`].
//! - Drive a live instance through [`AppHandle::flush`], [`AppHandle::dispatch`] and
//!   [`AppHandle::dispose`].
//! - Use [`MemoryDocument`] as a host document in tests and headless embeddings.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use app_mount::{Bootstrapper, MemoryDocument, View};
//!
//! let doc = Rc::new(RefCell::new(MemoryDocument::new()));
//! let body = doc.borrow().body();
//! let app = doc.borrow_mut().append_element(body, "div", Some("app"));
//!
//! let mut bootstrapper = Bootstrapper::new(Rc::clone(&doc), || {
//!     || View::from(View::element("h1").child("hello"))
//! });
//! let handle = bootstrapper.initialize("app").expect("#app exists");
//!
//! assert!(handle.is_mounted());
//! assert_eq!(doc.borrow().inner_html(app), "<h1>hello</h1>");
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod platform;
pub mod runtime;

pub use crate::config::{EnvConfig, DEFAULT_TARGET_ID};
pub use crate::error::{MountError, MountResult};

pub use crate::core::component::Component;
pub use crate::core::document::{Document, DocumentRef, NodeId};
pub use crate::core::event::HostEvent;
pub use crate::core::scope::{Invalidator, Scope};
pub use crate::core::signal::{Signal, Subscription};
pub use crate::core::view::{ElementView, View};

pub use crate::platform::MemoryDocument;

pub use crate::runtime::{bootstrap, AppHandle, Bootstrapper, InstanceId, MountTarget};
