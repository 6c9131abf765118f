pub mod api;
pub mod config;
pub mod core;
pub mod game;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::types::{BubbleId, GameEvent};
pub use config::GameConfig;
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use crate::core::timers::{TimerKind, TimerSet, TimerToken};
pub use game::engine::{GameEngine, Phase};
pub use game::placement::Placement;
pub use game::session::{Bubble, Session};
pub use game::snapshot::{Action, BubbleView, ButtonView, ViewSnapshot};
pub use input::queue::{clamp_points, InputEvent, InputQueue};
