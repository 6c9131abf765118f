use serde::Serialize;

use crate::api::types::{
    BubbleId, GameEvent, EVENT_BUBBLE_CLEARED, EVENT_CLICK_OK, EVENT_CLICK_WRONG, EVENT_PHASE,
};
use crate::config::GameConfig;
use crate::core::rng::Rng;
use crate::core::time::round_tenth;
use crate::core::timers::{TimerKind, TimerSet};
use crate::game::placement::Placement;
use crate::game::session::Session;
use crate::game::snapshot::ViewSnapshot;
use crate::input::queue::InputEvent;

/// Countdowns and the auto-play delay fire once they are within this of zero.
const TIMER_EPSILON: f32 = 1e-3;

/// Game state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    Completed,
    GameOver,
}

impl Phase {
    /// Numeric code carried in `EVENT_PHASE` events.
    pub fn code(self) -> f32 {
        match self {
            Phase::Idle => 0.0,
            Phase::Running => 1.0,
            Phase::Completed => 2.0,
            Phase::GameOver => 3.0,
        }
    }

    /// Heading shown above the board.
    pub fn title(self) -> &'static str {
        match self {
            Phase::GameOver => "GAME OVER",
            Phase::Completed => "ALL CLEARED",
            Phase::Idle | Phase::Running => "LET'S PLAY",
        }
    }
}

/// Owns the whole game: phase, session state and the live timer registry.
///
/// Every command is total. Commands that make no sense in the current phase
/// are ignored, and malformed input is clamped before it gets here.
pub struct GameEngine {
    config: GameConfig,
    placement: Placement,
    rng: Rng,
    phase: Phase,
    session: Session,
    timers: TimerSet,
    /// Seconds left on the pending auto-play timer, if armed.
    auto_play_wait: f32,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            placement: Placement::from_config(&config),
            config,
            rng: Rng::new(seed),
            phase: Phase::Idle,
            session: Session::new(0, Vec::new()),
            timers: TimerSet::new(),
            auto_play_wait: 0.0,
            events: Vec::with_capacity(32),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Swap the configuration. Takes full effect on the next Play.
    pub fn set_config(&mut self, config: GameConfig) {
        self.placement = Placement::from_config(&config);
        self.config = config;
    }

    /// Change the bubble diameter used by future placements.
    pub fn set_bubble_size(&mut self, size: f32) {
        self.config.bubble_size = size;
        self.placement.size = size;
    }

    /// Events emitted since the last `clear_frame_data`.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Route one host command to its operation.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Play { points, width, height } => self.play(points, width, height),
            InputEvent::Restart { points, width, height } => self.restart(points, width, height),
            InputEvent::ToggleAutoPlay => self.toggle_auto_play(),
            InputEvent::Click { id } => self.click_bubble(id),
        }
    }

    /// Start a fresh session with `points` bubbles.
    pub fn play(&mut self, points: u32, width: f32, height: f32) {
        self.timers.cancel_all();
        let (width, height) = self.config.board_or_default(width, height);
        if points > self.config.max_points {
            log::warn!("{} points requested, capped at {}", points, self.config.max_points);
        }
        let points = points.min(self.config.max_points);
        let bubbles = self.placement.place(points, width, height, &mut self.rng);
        self.session = Session::new(points, bubbles);
        self.set_phase(Phase::Running);
        self.timers.arm(TimerKind::Elapsed);
        log::info!("play: {} bubbles on {}x{} board", points, width, height);

        // Zero points clears instantly.
        self.check_completion();
    }

    /// Finished sessions go back to Idle; otherwise this is a full replay.
    pub fn restart(&mut self, points: u32, width: f32, height: f32) {
        match self.phase {
            Phase::Completed | Phase::GameOver => self.reset_to_idle(),
            Phase::Idle | Phase::Running => self.play(points, width, height),
        }
    }

    /// Flip auto-play. Ignored unless a session is running.
    pub fn toggle_auto_play(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.session.auto_play = !self.session.auto_play;
        log::debug!("auto-play {}", if self.session.auto_play { "on" } else { "off" });
        self.rearm_auto_play();
    }

    /// Handle a click on bubble `id`.
    pub fn click_bubble(&mut self, id: BubbleId) {
        if self.phase != Phase::Running {
            return;
        }
        if !self.session.contains(id) {
            log::debug!("click on missing bubble {} ignored", id.0);
            return;
        }

        let expected = self.session.next_expected;
        if id.0 != expected {
            self.events.push(GameEvent {
                kind: EVENT_CLICK_WRONG,
                a: id.0 as f32,
                b: expected as f32,
                c: 0.0,
            });
            log::info!("wrong bubble: clicked {}, expected {}", id.0, expected);
            self.timers.cancel_all();
            self.set_phase(Phase::GameOver);
            return;
        }

        self.session.clicked.insert(id);
        self.session.countdowns.insert(id, self.config.countdown_seconds);
        self.timers.arm(TimerKind::Countdown(id));
        self.session.next_expected += 1;
        self.events.push(GameEvent::new(EVENT_CLICK_OK, id.0 as f32));
        log::debug!("bubble {} clicked", id.0);

        self.rearm_auto_play();
    }

    /// Advance the elapsed clock. The total is kept unrounded so any tick
    /// length adds up; only the exposed value is rounded to a tenth.
    pub fn tick(&mut self, dt: f32) {
        if !self.timers.is_armed(TimerKind::Elapsed) {
            return;
        }
        self.session.clock += dt;
        self.session.elapsed = round_tenth(self.session.clock);
    }

    /// Advance every pending countdown and drop the bubbles that ran out.
    ///
    /// All decrements, removals and the completion check land together, so
    /// a snapshot taken afterwards never shows a half-applied tick.
    pub fn tick_countdowns(&mut self, dt: f32) {
        if self.phase != Phase::Running {
            return;
        }

        let mut expired = Vec::new();
        for (&id, remaining) in self.session.countdowns.iter_mut() {
            if !self.timers.is_armed(TimerKind::Countdown(id)) {
                continue;
            }
            *remaining -= dt;
            if *remaining <= TIMER_EPSILON {
                expired.push(id);
            }
        }
        if expired.is_empty() {
            return;
        }

        self.session.remove_all(&expired);
        for &id in &expired {
            self.timers.cancel(TimerKind::Countdown(id));
            self.events.push(GameEvent::new(EVENT_BUBBLE_CLEARED, id.0 as f32));
            log::debug!("bubble {} cleared", id.0);
        }
        self.check_completion();
    }

    /// Run the pending auto-play timer, clicking the next bubble when it fires.
    pub fn tick_auto_play(&mut self, dt: f32) {
        if !self.timers.is_armed(TimerKind::AutoPlay) {
            return;
        }
        self.auto_play_wait -= dt;
        if self.auto_play_wait > TIMER_EPSILON {
            return;
        }

        self.timers.cancel(TimerKind::AutoPlay);
        let next = BubbleId(self.session.next_expected);
        if self.auto_play_eligible() {
            log::debug!("auto-play clicks {}", next.0);
            self.click_bubble(next);
        } else {
            log::debug!("auto-play target {} gone, standing down", next.0);
        }
    }

    /// One scheduler step: elapsed clock, countdowns, then auto-play.
    pub fn advance(&mut self, dt: f32) {
        self.tick(dt);
        self.tick_countdowns(dt);
        self.tick_auto_play(dt);
    }

    /// Read-only view for the rendering layer.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(self.phase, &self.session)
    }

    fn auto_play_eligible(&self) -> bool {
        self.phase == Phase::Running
            && self.session.auto_play
            && self.session.contains(BubbleId(self.session.next_expected))
    }

    /// Arm the auto-play timer for a full delay, or cancel it if auto-play
    /// has nothing left to do.
    fn rearm_auto_play(&mut self) {
        if self.auto_play_eligible() {
            self.timers.arm(TimerKind::AutoPlay);
            self.auto_play_wait = self.config.auto_play_delay;
        } else {
            self.timers.cancel(TimerKind::AutoPlay);
        }
    }

    fn check_completion(&mut self) {
        if self.phase == Phase::Running && self.session.bubbles.is_empty() {
            self.timers.cancel_all();
            self.session.next_expected = 1;
            self.set_phase(Phase::Completed);
            log::info!("all cleared in {:.1}s", self.session.elapsed);
        }
    }

    fn reset_to_idle(&mut self) {
        self.timers.cancel_all();
        self.session = Session::new(0, Vec::new());
        self.set_phase(Phase::Idle);
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.events.push(GameEvent::new(EVENT_PHASE, phase.code()));
    }
}
