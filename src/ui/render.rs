use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect as Area},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::config::PhysicsConfig;
use crate::game::{Court, Rect};

use super::overlay::{render_overlay, MatchOverlay};

// Layout: status row, then the bordered court
const STATUS_ROWS: u16 = 1;

/// Draw one frame: status line, court, paddles, ball, score and an optional overlay.
pub fn render(
    frame: &mut Frame,
    court: &Court,
    physics: &PhysicsConfig,
    status: &str,
    overlay: Option<&MatchOverlay>,
) {
    let area = frame.area();
    let [status_area, court_area] =
        Layout::vertical([Constraint::Length(STATUS_ROWS), Constraint::Min(0)]).areas(area);

    let status_line = Paragraph::new(format!("{}   W/S: Left  ↑/↓: Right  Q: Quit", status))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status_line, status_area);

    let width = physics.window_width as f64;
    let height = physics.window_height as f64;

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .marker(Marker::Braille)
        .background_color(Color::Rgb(20, 20, 20))
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            // Center line
            ctx.draw(&CanvasLine {
                x1: width / 2.0,
                y1: 0.0,
                x2: width / 2.0,
                y2: height,
                color: Color::DarkGray,
            });

            draw_rect(ctx, &court.left_paddle, height, Color::White);
            draw_rect(ctx, &court.right_paddle, height, Color::White);
            draw_rect(ctx, &court.ball, height, Color::Yellow);

            ctx.print(
                width / 2.0 - 24.0,
                height - 24.0,
                Line::styled(
                    format!("{} : {}", court.score.left, court.score.right),
                    Style::default().fg(Color::White),
                ),
            );
        });

    frame.render_widget(canvas, court_area);

    if let Some(overlay) = overlay {
        render_overlay(frame, overlay, court_area);
    }
}

// Court y grows downward, canvas y grows upward
fn draw_rect(ctx: &mut Context, rect: &Rect, court_height: f64, color: Color) {
    ctx.draw(&Rectangle {
        x: rect.left() as f64,
        y: court_height - rect.bottom() as f64,
        width: rect.width() as f64,
        height: rect.height() as f64,
        color,
    });
}

/// Centered one-line text, used for the splash before the first match
pub fn render_banner(frame: &mut Frame, text: &str) {
    let area = frame.area();
    let row = Area {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let banner = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(banner, row);
}
