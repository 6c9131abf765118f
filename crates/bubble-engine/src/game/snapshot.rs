use serde::Serialize;

use crate::game::engine::Phase;
use crate::game::session::Session;

/// Everything the page needs to draw one frame. Serialized to JSON for the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub phase: Phase,
    /// "LET'S PLAY" / "GAME OVER" / "ALL CLEARED".
    pub title: &'static str,
    /// Elapsed time, one decimal, e.g. "4.2s".
    pub time: String,
    pub bubbles: Vec<BubbleView>,
    /// The "Next: N" hint; only while running and N ≤ points.
    pub next: Option<u32>,
    pub buttons: Vec<ButtonView>,
    pub auto_play: bool,
    /// Board is dimmed after a wrong click.
    pub paused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub clicked: bool,
    /// Remaining countdown, e.g. "2.3s". Present only for clicked bubbles.
    pub countdown: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Play,
    Restart,
    ToggleAutoPlay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    pub action: Action,
    pub label: &'static str,
}

impl ViewSnapshot {
    pub fn capture(phase: Phase, session: &Session) -> Self {
        let bubbles = session
            .bubbles
            .iter()
            .map(|b| {
                let clicked = session.clicked.contains(&b.id);
                let countdown = if clicked {
                    session.countdowns.get(&b.id).map(|t| format!("{:.1}s", t.max(0.0)))
                } else {
                    None
                };
                BubbleView { id: b.id.0, x: b.pos.x, y: b.pos.y, clicked, countdown }
            })
            .collect();

        let next = (phase == Phase::Running && session.next_expected <= session.points)
            .then_some(session.next_expected);

        let buttons = match phase {
            Phase::Idle => vec![ButtonView { action: Action::Play, label: "Play" }],
            Phase::Completed | Phase::GameOver => {
                vec![ButtonView { action: Action::Restart, label: "Restart" }]
            }
            Phase::Running => vec![
                ButtonView { action: Action::Restart, label: "Restart" },
                ButtonView {
                    action: Action::ToggleAutoPlay,
                    label: if session.auto_play { "Auto Play OFF" } else { "Auto Play ON" },
                },
            ],
        };

        Self {
            phase,
            title: phase.title(),
            time: format!("{:.1}s", session.elapsed),
            bubbles,
            next,
            buttons,
            auto_play: session.auto_play,
            paused: phase == Phase::GameOver,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
