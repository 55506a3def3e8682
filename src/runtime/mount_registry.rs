//! Instance identifiers and the per-bootstrapper mount registry.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::runtime::instance::RootInstance;

/// Stable identifier for a root instance created by a single `Bootstrapper`.
///
/// Semantics:
/// - IDs are unique within a bootstrapper.
/// - IDs are never reused, even after the instance is disposed.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Tracks which instances were mounted on which target id.
///
/// Entries are weak. A mounted instance keeps itself alive until it is disposed, so
/// the registry only loses track of instances that were disposed and released by
/// every handle.
#[derive(Default)]
pub struct MountRegistry {
    entries: HashMap<String, Vec<(InstanceId, Weak<RefCell<RootInstance>>)>>,
    next_id: u64,
}

impl MountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .expect("instance id overflowed u64");
        id
    }

    pub(crate) fn record(
        &mut self,
        target_id: &str,
        id: InstanceId,
        instance: &Rc<RefCell<RootInstance>>,
    ) {
        let slot = self.entries.entry(target_id.to_string()).or_default();
        slot.retain(|(_, weak)| weak.strong_count() > 0);
        slot.push((id, Rc::downgrade(instance)));
    }

    pub(crate) fn get(&self, id: InstanceId) -> Option<Rc<RefCell<RootInstance>>> {
        self.entries
            .values()
            .flatten()
            .find(|(entry, _)| *entry == id)
            .and_then(|(_, weak)| weak.upgrade())
    }

    /// Ids of instances on `target_id` that are not disposed.
    pub fn live(&self, target_id: &str) -> Vec<InstanceId> {
        self.entries
            .get(target_id)
            .map(|slot| {
                slot.iter()
                    .filter(|(_, weak)| {
                        weak.upgrade()
                            .is_some_and(|instance| instance.borrow().is_mounted())
                    })
                    .map(|(id, _)| *id)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::MountRegistry;

    #[test]
    fn ids_are_monotonic() {
        let mut registry = MountRegistry::new();
        let first = registry.allocate();
        let second = registry.allocate();
        assert_eq!(first.raw(), 0);
        assert_eq!(second.raw(), 1);
        assert!(registry.live("app").is_empty());
    }
}
