use glam::Vec2;

use crate::api::types::BubbleId;
use crate::config::GameConfig;
use crate::core::rng::Rng;
use crate::game::session::Bubble;

/// Upper bound on the up-front allocation; larger boards grow as they fill.
const MAX_PREALLOC: usize = 1024;

/// Scatters bubbles over the board with rejection sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Bubble diameter in pixels.
    pub size: f32,
    /// Extra clearance added to the diameter for the minimum center distance.
    pub margin: f32,
    /// Inset from the board edges.
    pub padding: f32,
    /// Candidates drawn per bubble before overlap is accepted.
    pub attempts: u32,
}

impl Placement {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            size: config.bubble_size,
            margin: config.bubble_margin,
            padding: config.board_padding,
            attempts: config.placement_attempts,
        }
    }

    /// Place `n` bubbles with ids 1..=n inside a `width`×`height` board.
    ///
    /// Each bubble gets up to `attempts` random candidates; the first one
    /// whose center is at least `size + margin` from every earlier center
    /// wins. If none does, the last candidate is used anyway, so dense
    /// boards degrade to overlapping bubbles instead of failing.
    pub fn place(&self, n: u32, width: f32, height: f32, rng: &mut Rng) -> Vec<Bubble> {
        let (min_x, max_x) = self.axis_range(width);
        let (min_y, max_y) = self.axis_range(height);
        let min_dist2 = (self.size + self.margin).powi(2);
        let half = Vec2::splat(self.size / 2.0);

        let mut out: Vec<Bubble> = Vec::with_capacity((n as usize).min(MAX_PREALLOC));
        for id in 1..=n {
            let mut tries = 0;
            let pos = loop {
                let candidate = Vec2::new(
                    rng.next_in(min_x, max_x) as f32,
                    rng.next_in(min_y, max_y) as f32,
                );
                tries += 1;
                let center = candidate + half;
                let clear = out
                    .iter()
                    .all(|b| (b.pos + half).distance_squared(center) >= min_dist2);
                if clear || tries >= self.attempts {
                    break candidate;
                }
            };
            out.push(Bubble::new(BubbleId(id), pos));
        }
        out
    }

    /// Inclusive whole-pixel range for a bubble's top-left corner on one axis.
    fn axis_range(&self, extent: f32) -> (u32, u32) {
        let max = (extent - self.size - self.padding).max(0.0).floor() as u32;
        let min = (self.padding.max(0.0).floor() as u32).min(max);
        (min, max)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
