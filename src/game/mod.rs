//! Flappy simulation core.
//!
//! A bird falls under gravity and flaps through a stream of gapped pipes.
//! Each pipe cleared scores a point; touching a pipe or leaving the screen
//! ends the run and returns the session to its start screen.

pub mod bird;
pub mod geometry;
pub mod input;
pub mod pipes;
pub mod session;

pub use bird::Bird;
pub use geometry::Aabb;
pub use input::{FlapLatch, GameInput};
pub use pipes::{ObstacleManager, ObstacleTick, Pipe};
pub use session::{CrashCause, Phase, Session, SessionEvent, SessionState};
