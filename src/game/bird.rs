//! The player-controlled bird.

use super::geometry::Aabb;
use crate::config::GameConfig;

/// A square bird with a fixed column and a vertical velocity.
///
/// Velocity is positive downward. Gravity is never capped, so a bird left
/// alone falls faster every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f64,
    y: f64,
    spawn_y: f64,
    size: f64,
    velocity: f64,
    gravity: f64,
    flap_impulse: f64,
}

impl Bird {
    /// Spawn a bird at the configured start position.
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.bird_spawn();
        Self {
            x,
            y,
            spawn_y: y,
            size: config.bird_size,
            velocity: config.bird_initial_velocity,
            gravity: config.gravity,
            flap_impulse: config.flap_impulse,
        }
    }

    /// One physics step: move by the current velocity, then accelerate.
    pub fn advance(&mut self) {
        self.y += self.velocity;
        self.velocity += self.gravity;
    }

    /// Override the velocity with the upward impulse, whatever it was before.
    pub fn flap(&mut self) {
        self.velocity = -self.flap_impulse;
    }

    /// Move back to the spawn position. Velocity is left as is; drop the bird
    /// and build a new one for a full reset.
    pub fn reset_to_initial(&mut self) {
        self.y = self.spawn_y;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Leading (right) edge, used for scoring.
    pub fn right(&self) -> f64 {
        self.x + self.size
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.x, self.y, self.size, self.size)
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, y: f64, velocity: f64) {
        self.y = y;
        self.velocity = velocity;
    }
}
