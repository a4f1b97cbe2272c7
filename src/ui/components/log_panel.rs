//! Overlay listing captured log lines, newest first.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::constants::LOG_PANEL_TITLE;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;

pub struct LogPanel;

impl LogPanel {
    pub fn render(frame: &mut Frame, area: Rect, logger: &Logger) {
        let modal_area = LayoutManager::centered_rect(80, 80, area);

        frame.render_widget(Clear, modal_area);
        let block = Block::default()
            .title(LOG_PANEL_TITLE)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(block, modal_area);

        let inner = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let logs = logger.get_logs();
        if logs.is_empty() {
            let empty = Paragraph::new("No logs captured")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem> = logs
            .iter()
            .take(usize::from(inner.height))
            .map(|log| match log.find("] ") {
                Some(end) => ListItem::new(Line::from(vec![
                    Span::styled(log[..end + 2].to_string(), Style::default().fg(Color::DarkGray)),
                    Span::styled(log[end + 2..].to_string(), level_style(&log[end + 2..])),
                ])),
                None => ListItem::new(Line::from(log.clone())),
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }
}

fn level_style(message: &str) -> Style {
    if message.starts_with("ERROR") {
        Style::default().fg(Color::Red)
    } else if message.starts_with("WARN") {
        Style::default().fg(Color::Yellow)
    } else if message.starts_with("DEBUG") || message.starts_with("TRACE") {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::White)
    }
}
