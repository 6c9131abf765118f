use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;

use crate::api::types::BubbleId;

/// A clickable target: its required click order and top-left pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    pub pos: Vec2,
}

impl Bubble {
    pub fn new(id: BubbleId, pos: Vec2) -> Self {
        Self { id, pos }
    }
}

/// Mutable state of one play-through. Replaced wholesale on Play/Restart.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Bubbles still on the board, ascending by id.
    pub bubbles: Vec<Bubble>,
    /// Point count the session was started with.
    pub points: u32,
    /// Id the next click must hit.
    pub next_expected: u32,
    /// Bubbles correctly clicked and still counting down.
    pub clicked: BTreeSet<BubbleId>,
    /// Remaining countdown per clicked bubble, in seconds.
    pub countdowns: BTreeMap<BubbleId, f32>,
    /// Seconds since the session started running, rounded to a tenth.
    pub elapsed: f32,
    /// Unrounded running total that `elapsed` is derived from.
    pub clock: f32,
    pub auto_play: bool,
}

impl Session {
    pub fn new(points: u32, bubbles: Vec<Bubble>) -> Self {
        Self {
            bubbles,
            points,
            next_expected: 1,
            ..Self::default()
        }
    }

    pub fn contains(&self, id: BubbleId) -> bool {
        self.bubbles.binary_search_by_key(&id, |b| b.id).is_ok()
    }

    /// Remove a set of expired bubbles from the board, clicked set and
    /// countdown map in one pass. Returns how many bubbles left the board.
    pub fn remove_all(&mut self, ids: &[BubbleId]) -> usize {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| !ids.contains(&b.id));
        for id in ids {
            self.clicked.remove(id);
            self.countdowns.remove(id);
        }
        before - self.bubbles.len()
    }
}
