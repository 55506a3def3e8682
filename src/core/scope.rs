//! Per-instance reactive scope handed to components during setup.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::signal::{Signal, Subscription};

/// Collects the subscriptions a root component registers during setup.
///
/// Everything registered here is owned by the mounted instance and released when it
/// is disposed.
pub struct Scope {
    dirty: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
}

impl Scope {
    pub(crate) fn new(dirty: Rc<Cell<bool>>) -> Self {
        Self {
            dirty,
            subscriptions: Vec::new(),
        }
    }

    /// Re-render the instance on the next flush whenever `signal` is written.
    pub fn watch<T: 'static>(&mut self, signal: &Signal<T>) {
        let dirty = Rc::clone(&self.dirty);
        self.subscriptions
            .push(signal.subscribe(move || dirty.set(true)));
    }

    /// Keep an arbitrary subscription alive for the instance's lifetime.
    pub fn retain(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Handle a component can keep to request a re-render from its own code.
    pub fn invalidator(&self) -> Invalidator {
        Invalidator {
            dirty: Rc::clone(&self.dirty),
        }
    }

    pub(crate) fn into_subscriptions(self) -> Vec<Subscription> {
        self.subscriptions
    }
}

#[derive(Clone)]
pub struct Invalidator {
    dirty: Rc<Cell<bool>>,
}

impl Invalidator {
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::Scope;
    use crate::core::signal::Signal;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn watched_signal_marks_dirty_until_scope_is_dropped() {
        let dirty = Rc::new(Cell::new(false));
        let signal = Signal::new(1);
        let mut scope = Scope::new(Rc::clone(&dirty));
        scope.watch(&signal);

        signal.set(2);
        assert!(dirty.get());

        dirty.set(false);
        drop(scope.into_subscriptions());
        signal.set(3);
        assert!(!dirty.get());
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn invalidator_marks_dirty() {
        let dirty = Rc::new(Cell::new(false));
        let scope = Scope::new(Rc::clone(&dirty));
        scope.invalidator().invalidate();
        assert!(dirty.get());
    }
}
