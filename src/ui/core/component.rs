use ratatui::{buffer::Buffer, layout::Rect};

use super::element::Element;
use crate::ui::paint::{HitRegion, Painter};

pub trait Component {
    /// Build the element tree for the current props. Must be a pure function
    /// of the props: equal props give equal trees.
    fn view(&self) -> Element;

    fn render(&self, buf: &mut Buffer, area: Rect, painter: &Painter) -> Vec<HitRegion> {
        painter.paint(&self.view(), area, buf)
    }
}
