use std::collections::HashMap;

use glam::DVec3;

/// Latest published position for every simulated body, keyed by name.
///
/// Ownership is deliberately lopsided: the orbital engine is the only writer
/// (via the crate-private [`publish`](PositionRegistry::publish), once per
/// body per tick), and everything else — the framing controller, satellite
/// lookups, embedding code — reads through a [`PositionView`] borrow taken
/// after the tick pass completes. Within one cooperative tick there is no
/// preemption, so no locking is needed; a threaded port would double-buffer
/// this map instead.
#[derive(Debug, Default)]
pub struct PositionRegistry {
    positions: HashMap<String, DVec3>,
}

impl PositionRegistry {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }

    /// Overwrite the stored position for `name`. Engine-only.
    pub(crate) fn publish(&mut self, name: &str, position: DVec3) {
        if let Some(slot) = self.positions.get_mut(name) {
            *slot = position;
        } else {
            self.positions.insert(name.to_owned(), position);
        }
    }

    /// Latest position for `name`, if it has been published.
    pub fn get(&self, name: &str) -> Option<DVec3> {
        self.positions.get(name).copied()
    }

    /// Number of bodies with a published position.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing has been published yet.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Read-only view for the framing controller and other readers.
    pub fn view(&self) -> PositionView<'_> {
        PositionView {
            positions: &self.positions,
        }
    }
}

/// Read-only borrow of the registry. Insertion order is irrelevant; entries
/// are overwritten every simulation tick.
#[derive(Debug, Clone, Copy)]
pub struct PositionView<'a> {
    positions: &'a HashMap<String, DVec3>,
}

impl PositionView<'_> {
    /// Latest position for `name`, if it has been published.
    pub fn get(&self, name: &str) -> Option<DVec3> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over (name, position) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, DVec3)> {
        self.positions.iter().map(|(name, pos)| (name.as_str(), *pos))
    }
}
