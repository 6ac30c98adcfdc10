//! Terminal rendering of a flappy session.

use super::game_common::{
    create_game_layout, render_centered_label, render_info_panel_frame, render_status_bar,
};
use super::viewport::Viewport;
use crate::game::{Phase, Session};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const START_TEXT: &str = "Press SPACE to start the game";
const INSTRUCTIONS_TEXT: &str = "HOW TO PLAY: Press SPACE to Jump";
const CONTROLS: &[(&str, &str)] = &[("[Space/Up/Enter]", "Flap"), ("[Esc/q]", "Quit")];

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, session: &Session) {
    let layout = create_game_layout(frame, area, " Skyflap ", Color::Cyan, 22);

    render_play_area(frame, layout.content, session);
    render_labels(frame, layout.content, session);
    render_bird(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

/// Pipes, scaled from world coordinates onto the cell grid.
fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    let config = session.config();
    let state = session.state();
    let viewport = Viewport::new(area, config.width, config.height);
    if viewport.is_empty() {
        return;
    }

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let (wx, wy) = viewport.cell_center(col, row);
            let in_pipe = state.obstacles.pipes().iter().any(|pipe| {
                wx >= pipe.x
                    && wx <= pipe.right(config)
                    && (wy <= pipe.gap_center - config.pipe_gap
                        || wy >= pipe.gap_center + config.pipe_gap)
            });

            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// The bird goes on top of everything else, labels included.
fn render_bird(frame: &mut Frame, area: Rect, session: &Session) {
    let config = session.config();
    let bird = &session.state().bird;
    let viewport = Viewport::new(area, config.width, config.height);
    let Some((col, row)) =
        viewport.to_cell(bird.x() + bird.size() / 2.0, bird.y() + bird.size() / 2.0)
    else {
        return;
    };

    let bird_char = if bird.velocity() < -5.0 {
        "▲"
    } else if bird.velocity() > 10.0 {
        "▼"
    } else {
        "►"
    };
    frame
        .buffer_mut()
        .get_mut(area.x + col, area.y + row)
        .set_symbol(bird_char)
        .set_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
}

/// Score label, plus the start and instructions labels while idle.
fn render_labels(frame: &mut Frame, area: Rect, session: &Session) {
    let state = session.state();

    let score_style = Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);
    render_centered_label(
        frame,
        area,
        0.2,
        Line::from(Span::styled(state.score.to_string(), score_style)),
    );

    if state.phase != Phase::Idle {
        return;
    }

    let label_style = Style::default().fg(Color::White);
    render_centered_label(
        frame,
        area,
        0.5,
        Line::from(Span::styled(START_TEXT, label_style)),
    );
    render_centered_label(
        frame,
        area,
        0.6,
        Line::from(Span::styled(INSTRUCTIONS_TEXT, label_style)),
    );
    if let Some(last) = state.last_score {
        render_centered_label(
            frame,
            area,
            0.7,
            Line::from(Span::styled(
                format!("Crashed after {} pipes", last),
                Style::default().fg(Color::Red),
            )),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &Session) {
    match session.phase() {
        Phase::Idle => render_status_bar(frame, area, "Ready", Color::Yellow, CONTROLS),
        Phase::Running | Phase::Over => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.state().score),
            Color::Green,
            CONTROLS,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let state = session.state();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let last = state
        .last_score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(state.score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(state.best_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled(" Last:  ", label),
            Span::styled(last, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                state.obstacles.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Ticks: ", label),
            Span::styled(state.tick_count.to_string(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
