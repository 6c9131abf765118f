use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Click-order identifier of a bubble (1..=N).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BubbleId(pub u32);

/// A game event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}

// Event kinds (Rust → host)

/// Phase changed. `a` = phase code (see `Phase::code`).
pub const EVENT_PHASE: f32 = 1.0;
/// A click was accepted. `a` = bubble id.
pub const EVENT_CLICK_OK: f32 = 2.0;
/// A click was rejected (ends the game). `a` = clicked id, `b` = expected id.
pub const EVENT_CLICK_WRONG: f32 = 3.0;
/// A bubble's countdown expired and it left the board. `a` = bubble id.
pub const EVENT_BUBBLE_CLEARED: f32 = 4.0;
