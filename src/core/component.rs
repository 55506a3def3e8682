//! Root component trait.

use crate::core::event::HostEvent;
use crate::core::scope::Scope;
use crate::core::view::View;

/// Renderable component interface.
pub trait Component {
    /// Describe the current content.
    ///
    /// Called once at mount and again on every flush of a dirty instance.
    fn render(&mut self) -> View;

    /// Register reactive dependencies (optional).
    ///
    /// Runs once, before the first render.
    fn setup(&mut self, _scope: &mut Scope) {}

    /// Handle an event forwarded by the embedding process.
    fn handle_event(&mut self, _event: &HostEvent) {}
}

impl<F> Component for F
where
    F: FnMut() -> View,
{
    fn render(&mut self) -> View {
        self()
    }
}
