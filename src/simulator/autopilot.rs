//! A gap-seeking flap policy.

use crate::config::GameConfig;
use crate::game::SessionState;

/// Flaps when the bird is about to sink below the opening it is heading for.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// How far below the target the bird center may drift before flapping.
    pub flap_margin: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { flap_margin: 60.0 }
    }
}

impl Autopilot {
    /// Vertical center of the nearest pipe the bird has not cleared yet, kept
    /// far enough from the edges that hovering around it is safe.
    pub fn target_y(&self, state: &SessionState, config: &GameConfig) -> f64 {
        let bird_x = state.bird.x();
        let target = state
            .obstacles
            .pipes()
            .iter()
            .find(|pipe| pipe.right(config) >= bird_x)
            .map(|pipe| pipe.gap_center)
            .unwrap_or(config.height / 2.0);

        let edge = self.flap_margin + state.bird.size();
        if config.height > edge * 2.0 {
            target.clamp(edge, config.height - edge)
        } else {
            config.height / 2.0
        }
    }

    /// True if the bird should flap before the next tick.
    pub fn should_flap(&self, state: &SessionState, config: &GameConfig) -> bool {
        let bird = &state.bird;
        let center = bird.y() + bird.size() / 2.0;
        center + bird.velocity() > self.target_y(state, config) + self.flap_margin
    }
}
