use crate::api::types::BubbleId;

/// What a live timer is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// The repeating elapsed-time clock (one per running session).
    Elapsed,
    /// The repeating post-click countdown of one bubble.
    Countdown(BubbleId),
    /// The one-shot delayed auto-play click.
    AutoPlay,
}

/// Opaque handle for one armed timer. Tokens are never reused within a `TimerSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u32);

#[derive(Debug, Clone, Copy)]
struct Timer {
    token: TimerToken,
    kind: TimerKind,
}

/// Registry of every timer the engine currently considers live.
///
/// At most one timer exists per `TimerKind`; arming an already-armed kind
/// replaces the old handle. The engine clears the whole set on every phase
/// transition, so nothing leaks across sessions.
#[derive(Debug, Clone)]
pub struct TimerSet {
    timers: Vec<Timer>,
    next_token: u32,
}

impl TimerSet {
    pub fn new() -> Self {
        Self {
            timers: Vec::with_capacity(16),
            next_token: 1,
        }
    }

    /// Arm a timer of the given kind, cancelling any previous one of the same kind.
    pub fn arm(&mut self, kind: TimerKind) -> TimerToken {
        self.cancel(kind);
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.timers.push(Timer { token, kind });
        token
    }

    /// Cancel the timer of the given kind. Returns the handle that was live, if any.
    pub fn cancel(&mut self, kind: TimerKind) -> Option<TimerToken> {
        let idx = self.timers.iter().position(|t| t.kind == kind)?;
        Some(self.timers.swap_remove(idx).token)
    }

    /// Cancel every timer at once.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Number of live countdown timers.
    pub fn countdown_count(&self) -> usize {
        self.timers
            .iter()
            .filter(|t| matches!(t.kind, TimerKind::Countdown(_)))
            .count()
    }

    /// Number of live timers of any kind.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Default for TimerSet {
    fn default() -> Self {
        Self::new()
    }
}
