use crate::api::types::BubbleId;

/// Commands the host page can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Start a fresh session with `points` bubbles on a `width`×`height` board.
    Play { points: u32, width: f32, height: f32 },
    /// The Restart button. Parameters are read at press time, like Play.
    Restart { points: u32, width: f32, height: f32 },
    /// The Auto Play button.
    ToggleAutoPlay,
    /// A click on the bubble with this id.
    Click { id: BubbleId },
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them before each scheduler tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
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

/// Clamp a raw numeric point count from the page to a bubble count.
/// NaN (what the page gets from non-numeric text), infinities and negatives
/// become 0; fractions are floored.
pub fn clamp_points(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    raw.floor().min(u32::MAX as f64) as u32
}
