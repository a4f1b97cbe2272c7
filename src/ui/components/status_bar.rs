//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{GALLERY_HINTS, STATUS_VERIFYING};
use crate::ui::app::App;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let status_text = if app.verifying {
            STATUS_VERIFYING.to_string()
        } else if let Some(message) = &app.status_message {
            format!("{message} • {GALLERY_HINTS}")
        } else {
            GALLERY_HINTS.to_string()
        };

        let status_color = if app.verifying { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
