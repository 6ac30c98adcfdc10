//! Terminal UI: draws a session with ratatui. Display only; the simulation
//! never reads anything back from here.

pub mod flappy_scene;
pub mod game_common;
pub mod viewport;

use crate::game::Session;
use ratatui::Frame;

/// Draw the game screen into the whole frame.
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, session);
}
