//! Pipe pairs and the manager that scrolls, spawns and prunes them.

use super::geometry::Aabb;
use crate::config::GameConfig;
use rand::Rng;
use tracing::debug;

/// A top and bottom segment sharing one x position, with an opening between.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge of both segments.
    pub x: f64,
    /// Vertical center of the opening, fixed at spawn.
    pub gap_center: f64,
    /// Set once the bird's leading edge has reached `x`.
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f64, gap_center: f64) -> Self {
        Self {
            x,
            gap_center,
            passed: false,
        }
    }

    pub fn right(&self, config: &GameConfig) -> f64 {
        self.x + config.pipe_width
    }

    /// Segment above the opening.
    pub fn top_bounds(&self, config: &GameConfig) -> Aabb {
        let bottom = self.gap_center - config.pipe_gap;
        Aabb::new(
            self.x,
            bottom - config.pipe_segment_length(),
            self.right(config),
            bottom,
        )
    }

    /// Segment below the opening.
    pub fn bottom_bounds(&self, config: &GameConfig) -> Aabb {
        let top = self.gap_center + config.pipe_gap;
        Aabb::new(
            self.x,
            top,
            self.right(config),
            top + config.pipe_segment_length(),
        )
    }

    /// True if `other` touches either segment.
    pub fn collides_with(&self, other: &Aabb, config: &GameConfig) -> bool {
        self.top_bounds(config).intersects(other) || self.bottom_bounds(config).intersects(other)
    }
}

/// What one obstacle step changed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObstacleTick {
    /// Gap center of the pipe spawned this step, if any.
    pub spawned: Option<f64>,
    /// Pipes dropped after scrolling past the left edge.
    pub removed: usize,
}

/// Owns the active pipes in spawn order, which is also left-to-right order.
#[derive(Debug, Clone)]
pub struct ObstacleManager {
    pipes: Vec<Pipe>,
    /// Counts down one unit per step; a pipe is due once it falls to
    /// `width - pair_spacing`.
    spawn_cursor: f64,
}

impl ObstacleManager {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pipes: Vec::new(),
            spawn_cursor: config.width,
        }
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut [Pipe] {
        &mut self.pipes
    }

    pub fn spawn_cursor(&self) -> f64 {
        self.spawn_cursor
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// Drop every pipe and rewind the spawn cursor.
    pub fn clear(&mut self, config: &GameConfig) {
        self.pipes.clear();
        self.spawn_cursor = config.width;
    }

    /// Scroll every pipe left, drop the ones fully off screen, then run the
    /// spawn policy.
    pub fn tick<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> ObstacleTick {
        for pipe in &mut self.pipes {
            pipe.x -= config.pipe_speed;
        }

        let before = self.pipes.len();
        self.pipes.retain(|p| p.right(config) >= 0.0);
        let removed = before - self.pipes.len();
        if removed > 0 {
            debug!(removed, active = self.pipes.len(), "pruned off-screen pipes");
        }

        let spawned = if self.pipes.is_empty()
            || self.spawn_cursor <= config.width - config.pair_spacing
        {
            Some(self.spawn(config, rng))
        } else {
            self.spawn_cursor -= 1.0;
            None
        };

        ObstacleTick { spawned, removed }
    }

    /// Append a pipe at the right edge with a random gap center.
    fn spawn<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> f64 {
        let gap_center = rng.gen_range(config.min_gap_center..=config.max_gap_center);
        self.pipes.push(Pipe::new(config.width, gap_center));
        self.spawn_cursor = config.width;
        debug!(gap_center, active = self.pipes.len(), "spawned pipe");
        gap_center
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_first_tick_spawns_at_right_edge() {
        let config = GameConfig::default();
        let mut manager = ObstacleManager::new(&config);
        let report = manager.tick(&config, &mut rng());

        assert_eq!(manager.len(), 1);
        let pipe = &manager.pipes()[0];
        assert_eq!(pipe.x, 800.0);
        assert!(!pipe.passed);
        let gap = report.spawned.expect("first tick spawns");
        assert!((200.0..=550.0).contains(&gap));
        assert_eq!(manager.spawn_cursor(), 800.0);
    }

    #[test]
    fn test_cursor_counts_down_between_spawns() {
        let config = GameConfig::default();
        let mut manager = ObstacleManager::new(&config);
        let mut rng = rng();
        manager.tick(&config, &mut rng);

        // Cursor must fall from 800 to 750 before the next spawn: 50 quiet steps.
        for step in 1..=50 {
            let report = manager.tick(&config, &mut rng);
            assert!(report.spawned.is_none(), "unexpected spawn at step {step}");
        }
        assert_eq!(manager.spawn_cursor(), 750.0);
        let report = manager.tick(&config, &mut rng);
        assert!(report.spawned.is_some());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_pipes_scroll_in_lockstep() {
        let config = GameConfig::default();
        let mut manager = ObstacleManager::new(&config);
        manager.push(Pipe::new(400.0, 300.0));
        manager.push(Pipe::new(600.0, 350.0));
        manager.tick(&config, &mut rng());

        assert_eq!(manager.pipes()[0].x, 390.0);
        assert_eq!(manager.pipes()[1].x, 590.0);
        let pipe = &manager.pipes()[0];
        assert_eq!(pipe.top_bounds(&config).x0, pipe.bottom_bounds(&config).x0);
        assert_eq!(pipe.top_bounds(&config).x1, pipe.bottom_bounds(&config).x1);
    }

    #[test]
    fn test_off_screen_pipe_removed() {
        let config = GameConfig::default();
        let mut manager = ObstacleManager::new(&config);
        // Right edge at -5 after scrolling 10.
        manager.push(Pipe::new(-45.0, 300.0));
        manager.push(Pipe::new(200.0, 300.0));
        let report = manager.tick(&config, &mut rng());

        assert_eq!(report.removed, 1);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.pipes()[0].x, 190.0);
    }

    #[test]
    fn test_pipe_partly_visible_is_kept() {
        let config = GameConfig::default();
        let mut manager = ObstacleManager::new(&config);
        // Right edge lands exactly on 0.
        manager.push(Pipe::new(-40.0, 300.0));
        let report = manager.tick(&config, &mut rng());
        assert_eq!(report.removed, 0);
    }

    #[test]
    fn test_pipes_do_not_accumulate() {
        let config = GameConfig::default();
        let mut manager = ObstacleManager::new(&config);
        let mut rng = rng();
        for _ in 0..5_000 {
            manager.tick(&config, &mut rng);
        }
        // 85 ticks to cross 850 units, one spawn every 51 ticks.
        assert!(manager.len() <= 2, "active pipes: {}", manager.len());
        for pair in manager.pipes().windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn test_gap_bounds_respected() {
        let config = GameConfig {
            min_gap_center: 250.0,
            max_gap_center: 260.0,
            ..GameConfig::default()
        };
        let mut manager = ObstacleManager::new(&config);
        let mut rng = rng();
        for _ in 0..2_000 {
            if let Some(gap) = manager.tick(&config, &mut rng).spawned {
                assert!((250.0..=260.0).contains(&gap));
            }
        }
    }

    #[test]
    fn test_segments_frame_the_opening() {
        let config = GameConfig::default();
        let pipe = Pipe::new(300.0, 400.0);
        assert_eq!(pipe.top_bounds(&config).y1, 325.0);
        assert_eq!(pipe.bottom_bounds(&config).y0, 475.0);
        assert_eq!(pipe.top_bounds(&config).width(), 50.0);

        let inside = Aabb::from_origin(310.0, 390.0, 15.0, 15.0);
        let above = Aabb::from_origin(310.0, 300.0, 15.0, 15.0);
        let below = Aabb::from_origin(310.0, 470.0, 15.0, 15.0);
        assert!(!pipe.collides_with(&inside, &config));
        assert!(pipe.collides_with(&above, &config));
        assert!(pipe.collides_with(&below, &config));
    }

    #[test]
    fn test_clear_resets_cursor() {
        let config = GameConfig::default();
        let mut manager = ObstacleManager::new(&config);
        let mut rng = rng();
        for _ in 0..10 {
            manager.tick(&config, &mut rng);
        }
        manager.clear(&config);
        assert!(manager.is_empty());
        assert_eq!(manager.spawn_cursor(), 800.0);
    }
}
