use serde::{Deserialize, Serialize};

/// Tunables for a game session. Every field may be omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds per scheduler tick for both the elapsed clock and countdowns (default: 0.1).
    pub tick_interval: f32,
    /// Countdown start value after a correct click, in seconds (default: 3.0).
    pub countdown_seconds: f32,
    /// Delay between automatic clicks while auto-play is on (default: 0.9).
    pub auto_play_delay: f32,
    /// Bubble diameter in pixels (default: 40).
    pub bubble_size: f32,
    /// Extra center-to-center clearance between bubbles (default: 6).
    pub bubble_margin: f32,
    /// Inset from the board edges (default: 4).
    pub board_padding: f32,
    /// Random candidates tried per bubble before accepting overlap (default: 200).
    pub placement_attempts: u32,
    /// Largest point count a session accepts; bigger requests are capped (default: 500).
    pub max_points: u32,
    /// Board size used when the host reports no usable dimensions.
    pub default_board_width: f32,
    pub default_board_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval: 0.1,
            countdown_seconds: 3.0,
            auto_play_delay: 0.9,
            bubble_size: 40.0,
            bubble_margin: 6.0,
            board_padding: 4.0,
            placement_attempts: 200,
            max_points: 500,
            default_board_width: 360.0,
            default_board_height: 280.0,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bubble diameter for a viewport of the given CSS width.
    pub fn bubble_size_for_viewport(viewport_width: f32) -> f32 {
        match viewport_width {
            w if w <= 360.0 => 28.0,
            w if w <= 480.0 => 32.0,
            w if w <= 768.0 => 36.0,
            _ => 40.0,
        }
    }

    /// Replace unusable board dimensions with the configured defaults.
    pub fn board_or_default(&self, width: f32, height: f32) -> (f32, f32) {
        let w = if width.is_finite() && width > 0.0 { width } else { self.default_board_width };
        let h = if height.is_finite() && height > 0.0 { height } else { self.default_board_height };
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let json = r#"{ "countdown_seconds": 5.0, "bubble_size": 32 }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.countdown_seconds, 5.0);
        assert_eq!(config.bubble_size, 32.0);
        assert_eq!(config.auto_play_delay, 0.9);
        assert_eq!(config.placement_attempts, 200);
        assert_eq!(config.max_points, 500);
    }

    #[test]
    fn parse_rejects_bad_json() {
        assert!(GameConfig::from_json("{ nope").is_err());
        assert!(GameConfig::from_json(r#"{ "tick_interval": "fast" }"#).is_err());
    }

    #[test]
    fn viewport_breakpoints() {
        assert_eq!(GameConfig::bubble_size_for_viewport(320.0), 28.0);
        assert_eq!(GameConfig::bubble_size_for_viewport(360.0), 28.0);
        assert_eq!(GameConfig::bubble_size_for_viewport(400.0), 32.0);
        assert_eq!(GameConfig::bubble_size_for_viewport(768.0), 36.0);
        assert_eq!(GameConfig::bubble_size_for_viewport(1280.0), 40.0);
    }

    #[test]
    fn board_falls_back_to_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_or_default(0.0, f32::NAN), (360.0, 280.0));
        assert_eq!(config.board_or_default(500.0, 400.0), (500.0, 400.0));
        assert_eq!(config.board_or_default(-3.0, 400.0), (360.0, 400.0));
    }
}
