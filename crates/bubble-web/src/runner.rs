use bubble_engine::{FixedTimestep, GameConfig, GameEngine, InputEvent, InputQueue};

/// Wires the engine to the browser frame loop.
///
/// The page pushes commands whenever the player acts and calls `tick` once
/// per animation frame. Commands are applied first, then the frame time is
/// cut into fixed scheduler ticks, then the snapshot is re-serialized.
pub struct GameRunner {
    engine: GameEngine,
    input: InputQueue,
    timestep: FixedTimestep,
    snapshot_json: String,
}

impl GameRunner {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let timestep = FixedTimestep::new(config.tick_interval);
        let mut runner = Self {
            engine: GameEngine::new(config, seed),
            input: InputQueue::new(),
            timestep,
            snapshot_json: String::new(),
        };
        runner.refresh_snapshot();
        runner
    }

    /// Replace the configuration from JSON. Bad JSON keeps the current one.
    pub fn configure(&mut self, json: &str) {
        match GameConfig::from_json(json) {
            Ok(config) if config.tick_interval > 0.0 => {
                self.timestep = FixedTimestep::new(config.tick_interval);
                self.engine.set_config(config);
                log::info!("config applied");
            }
            Ok(config) => {
                log::warn!("config rejected: tick_interval {} must be positive", config.tick_interval);
            }
            Err(err) => {
                log::warn!("config rejected: {}", err);
            }
        }
    }

    /// Pick the bubble size for the page's current viewport width.
    pub fn set_viewport(&mut self, viewport_width: f32) {
        self.engine
            .set_bubble_size(GameConfig::bubble_size_for_viewport(viewport_width));
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply commands, advance the scheduler, rebuild the snapshot.
    pub fn tick(&mut self, frame_dt: f32) {
        // Clear per-frame transient data
        self.engine.clear_frame_data();

        for event in self.input.drain() {
            let fresh_session = matches!(event, InputEvent::Play { .. } | InputEvent::Restart { .. });
            self.engine.apply(event);
            if fresh_session {
                self.timestep.reset();
            }
        }

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.engine.advance(self.timestep.dt());
        }

        self.refresh_snapshot();
    }

    fn refresh_snapshot(&mut self) {
        match self.engine.snapshot().to_json() {
            Ok(json) => self.snapshot_json = json,
            Err(err) => log::error!("snapshot serialization failed: {}", err),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Latest snapshot as JSON, rebuilt at the end of every `tick`.
    pub fn snapshot_json(&self) -> &str {
        &self.snapshot_json
    }

    // ---- Event buffer accessors ----

    pub fn game_events_ptr(&self) -> *const f32 {
        self.engine.events().as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.engine.events().len() as u32
    }
}
