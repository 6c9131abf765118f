/// Fixed timestep accumulator.
/// Turns variable browser frame deltas into whole scheduler ticks, so the
/// elapsed clock and every countdown advance in exact 100 ms steps.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !(frame_dt > 0.0) {
            return 0;
        }
        self.accumulator += frame_dt;
        // A backgrounded tab resumes with a huge delta; drop all but 10 ticks.
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        // Tolerate float error so ten 0.01s frames still yield one 0.1s tick.
        let steps = ((self.accumulator + self.dt * 1e-4) / self.dt) as u32;
        self.accumulator = (self.accumulator - steps as f32 * self.dt).max(0.0);
        steps
    }

    /// Drop any partial tick, e.g. when a new session starts.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Round to one decimal place, the precision every displayed timer uses.
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
