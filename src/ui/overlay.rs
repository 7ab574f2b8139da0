// End-of-match banner drawn over the court

use std::fmt::Display;

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Clear, Paragraph},
    Frame,
};

pub const REMATCH_HINT: &str = "R to Rematch  |  Q to Quit";

/// What to show once a match is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOverlay {
    pub headline: String,
    /// Set when the match ended because a controller failed
    pub forfeit: Option<String>,
}

impl MatchOverlay {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            forfeit: None,
        }
    }

    pub fn forfeited(mut self, reason: impl Display) -> Self {
        self.forfeit = Some(format!(" Forfeit ({}) ", reason));
        self
    }

    fn accent(&self) -> Color {
        match self.forfeit {
            Some(_) => Color::LightRed,
            None => Color::LightGreen,
        }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        vec![
            Line::from(self.headline.as_str()).bold().fg(self.accent()),
            Line::default(),
            Line::from(REMATCH_HINT).fg(Color::Gray),
        ]
    }
}

/// Draw `overlay` centered inside `area`, clearing what is underneath
pub fn render_overlay(frame: &mut Frame, overlay: &MatchOverlay, area: Rect) {
    let lines = overlay.lines();
    let text_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (text_width + 6).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [banner] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let mut block = Block::bordered()
        .border_style(Style::default().fg(overlay.accent()))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));
    if let Some(title) = &overlay.forfeit {
        block = block.title(title.as_str());
    }

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        banner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forfeit_changes_accent_and_title() {
        let win = MatchOverlay::new("You Win!");
        assert_eq!(win.forfeit, None);
        assert_eq!(win.accent(), Color::LightGreen);

        let forfeit = MatchOverlay::new("TrackingAI Wins!").forfeited("left_ai_error");
        assert_eq!(forfeit.forfeit.as_deref(), Some(" Forfeit (left_ai_error) "));
        assert_eq!(forfeit.accent(), Color::LightRed);
    }

    #[test]
    fn test_lines_end_with_rematch_hint() {
        let overlay = MatchOverlay::new("Draw");
        let lines = overlay.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "Draw");
        assert_eq!(lines[2].to_string(), REMATCH_HINT);
    }
}
