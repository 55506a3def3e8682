//! Core interfaces and types.

pub mod component;
pub mod document;
pub mod event;
pub mod scope;
pub mod signal;
pub mod view;
