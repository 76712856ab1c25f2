use glam::DVec3;

/// External inputs the core understands. Selection and simulation-speed
/// changes are the only ways the outside world steers the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Select a body by name, or clear the selection with `None`.
    /// The star's own name selects the star.
    Select(Option<String>),
    /// Replace the global simulation-speed multiplier. Zero and negative
    /// values are valid (freeze / reverse).
    SetSimSpeed(f64),
    /// Move the star (and with it, every top-level orbit's center).
    SetSunPosition(DVec3),
}

/// A queue of input events.
/// The embedding UI writes events between ticks; the orrery drains them at
/// the top of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
