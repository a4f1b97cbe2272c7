//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas of the component gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryAreas {
    pub header: Rect,
    pub buttons: Rect,
    pub task_card: Rect,
    pub toggle_card: Rect,
    pub verify_card: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Header line, a 2x2 grid of panels, and a status line at the bottom
    #[must_use]
    pub fn gallery_layout(area: Rect) -> GalleryAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let grid_rows = Self::split_evenly(rows[1], Direction::Vertical);
        let top = Self::split_evenly(grid_rows[0], Direction::Horizontal);
        let bottom = Self::split_evenly(grid_rows[1], Direction::Horizontal);

        GalleryAreas {
            header: rows[0],
            buttons: top[0],
            task_card: top[1],
            toggle_card: bottom[0],
            verify_card: bottom[1],
            status: rows[2],
        }
    }

    fn split_evenly(area: Rect, direction: Direction) -> Vec<Rect> {
        Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
