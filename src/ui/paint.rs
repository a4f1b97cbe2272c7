//! Painting element trees into a ratatui buffer.
//!
//! Layout is a reduced box model: plain elements stack their children
//! vertically and fill the available width, `flex` containers lay children out
//! in a row, inline elements (buttons, spans) shrink to their content. Sizes
//! come from the resolved utility classes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Widget},
};

use super::core::element::{Element, Node};
use crate::style::utility::{Align, Animation, Display, Justify, Radius, Size, TextAlign};
use crate::style::{ComputedStyle, ElementState, Stylesheet, Theme};

pub const DOT: &str = "●";
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

const DEFAULT_BORDER_COLOR: Color = Color::DarkGray;

/// Screen area occupied by an interactive element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    /// Child indexes from the painted root.
    pub path: Vec<usize>,
}

pub struct Painter<'a> {
    sheet: &'a Stylesheet,
    theme: Theme,
    frame: u64,
    focused: Option<&'a [usize]>,
}

impl<'a> Painter<'a> {
    #[must_use]
    pub fn new(sheet: &'a Stylesheet, theme: Theme) -> Self {
        Self {
            sheet,
            theme,
            frame: 0,
            focused: None,
        }
    }

    /// Animation frame used for spinners.
    #[must_use]
    pub fn with_frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    /// Path of the focused element, which also receives `hover:` styles.
    #[must_use]
    pub fn with_focus(mut self, focused: Option<&'a [usize]>) -> Self {
        self.focused = focused;
        self
    }

    /// Paint `root` into `area`, returning the regions of interactive elements.
    pub fn paint(&self, root: &Element, area: Rect, buf: &mut Buffer) -> Vec<HitRegion> {
        let mut hits = Vec::new();
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return hits;
        }
        let cs = self.compute(root, &[]);
        let width = self.box_width(root, &cs, &[], area.width);
        let height = self.height(root, &[], width).min(area.height);
        let x = if cs.center_x {
            area.x + area.width.saturating_sub(width) / 2
        } else {
            area.x
        };
        let rect = Rect::new(x, area.y, width, height).intersection(area);
        self.paint_element(root, &mut Vec::new(), rect, Style::default(), buf, &mut hits);
        hits
    }

    /// Rows `element` needs when laid out at `width` columns.
    #[must_use]
    pub fn measure_height(&self, element: &Element, width: u16) -> u16 {
        self.height(element, &[], width)
    }

    fn compute(&self, element: &Element, path: &[usize]) -> ComputedStyle {
        let focused = self.focused == Some(path);
        let state = ElementState {
            theme: self.theme,
            hovered: focused,
            focused,
            disabled: element.is_disabled(),
        };
        self.sheet.resolve(element.classes(), state)
    }

    fn glyph(&self, element: &Element, cs: &ComputedStyle) -> Option<&'static str> {
        if !element.get_children().is_empty() {
            return None;
        }
        match (cs.animation, cs.radius) {
            (Some(Animation::Spin), _) => Some(SPINNER_FRAMES[(self.frame % 4) as usize]),
            (_, Radius::Full) => Some(DOT),
            _ => None,
        }
    }

    fn chrome_width(cs: &ComputedStyle) -> u16 {
        let (left, right, _, _) = cs.border_cells();
        cs.padding.horizontal().saturating_add(left).saturating_add(right)
    }

    fn chrome_height(cs: &ComputedStyle) -> u16 {
        let (_, _, top, bottom) = cs.border_cells();
        cs.padding.vertical().saturating_add(top).saturating_add(bottom)
    }

    fn natural_width(&self, element: &Element, path: &[usize]) -> u16 {
        let cs = self.compute(element, path);
        if cs.display == Display::Hidden {
            return 0;
        }
        if self.glyph(element, &cs).is_some() {
            return 1;
        }
        if let Size::Cells(cells) = cs.width {
            return cells;
        }

        let widths = element
            .get_children()
            .iter()
            .enumerate()
            .map(|(index, child)| self.node_natural_width(child, &child_path(path, index)));
        let content = if cs.is_row() {
            let (sum, count) = widths.fold((0u16, 0u16), |(sum, count), w| (sum.saturating_add(w), count.saturating_add(1)));
            sum.saturating_add(cs.space_x.saturating_mul(count.saturating_sub(1)))
        } else {
            widths.max().unwrap_or(0)
        };

        let width = content.saturating_add(Self::chrome_width(&cs));
        cs.max_width.map_or(width, |max| width.min(max))
    }

    fn node_natural_width(&self, node: &Node, path: &[usize]) -> u16 {
        match node {
            Node::Text(text) => text_width(text),
            Node::Element(element) => {
                let cs = self.compute(element, path);
                self.natural_width(element, path).saturating_add(cs.margin.horizontal())
            }
        }
    }

    /// Border-box width of a block child given the parent's content width.
    fn box_width(&self, element: &Element, cs: &ComputedStyle, path: &[usize], available: u16) -> u16 {
        let available = available.saturating_sub(cs.margin.horizontal());
        let width = match cs.width {
            Size::Full => available,
            Size::Cells(cells) => cells.min(available),
            Size::Auto if element.tag().is_inline() || cs.display == Display::InlineFlex => {
                self.natural_width(element, path).min(available)
            }
            Size::Auto => available,
        };
        cs.max_width.map_or(width, |max| width.min(max))
    }

    fn height(&self, element: &Element, path: &[usize], width: u16) -> u16 {
        let cs = self.compute(element, path);
        if cs.display == Display::Hidden {
            return 0;
        }
        if self.glyph(element, &cs).is_some() {
            return 1;
        }
        if let Size::Cells(rows) = cs.height {
            return rows;
        }

        let inner = width.saturating_sub(Self::chrome_width(&cs));
        let content = if cs.is_row() {
            self.row_items(element, path, inner)
                .iter()
                .map(|item| item.height)
                .max()
                .unwrap_or(0)
        } else {
            let mut total = 0u16;
            let mut count = 0u16;
            for (index, child) in element.get_children().iter().enumerate() {
                let child_path = child_path(path, index);
                total = total.saturating_add(match child {
                    Node::Text(text) => wrap(text, inner).len() as u16,
                    Node::Element(child) => {
                        let ccs = self.compute(child, &child_path);
                        if ccs.display == Display::Hidden {
                            continue;
                        }
                        let w = self.box_width(child, &ccs, &child_path, inner);
                        ccs.margin.vertical().saturating_add(self.height(child, &child_path, w))
                    }
                });
                count = count.saturating_add(1);
            }
            total.saturating_add(cs.space_y.saturating_mul(count.saturating_sub(1)))
        };

        content.saturating_add(Self::chrome_height(&cs))
    }

    fn row_items(&self, element: &Element, path: &[usize], inner: u16) -> Vec<RowItem> {
        let mut items = Vec::new();
        for (index, child) in element.get_children().iter().enumerate() {
            let child_path = child_path(path, index);
            match child {
                Node::Text(text) => items.push(RowItem {
                    index,
                    width: text_width(text).min(inner),
                    height: 1,
                    margin_left: 0,
                    margin_right: 0,
                }),
                Node::Element(child) => {
                    let ccs = self.compute(child, &child_path);
                    if ccs.display == Display::Hidden {
                        continue;
                    }
                    let width = match ccs.width {
                        Size::Full => inner.saturating_sub(ccs.margin.horizontal()),
                        _ => self.natural_width(child, &child_path).min(inner),
                    };
                    items.push(RowItem {
                        index,
                        width,
                        height: self.height(child, &child_path, width).saturating_add(ccs.margin.vertical()),
                        margin_left: ccs.margin.left,
                        margin_right: ccs.margin.right,
                    });
                }
            }
        }
        items
    }

    fn paint_element(
        &self,
        element: &Element,
        path: &mut Vec<usize>,
        area: Rect,
        inherited: Style,
        buf: &mut Buffer,
        hits: &mut Vec<HitRegion>,
    ) {
        if area.is_empty() {
            return;
        }
        let cs = self.compute(element, path);
        if cs.display == Display::Hidden {
            return;
        }
        if element.has_click_handler() || element.is_focusable() {
            hits.push(HitRegion {
                area,
                path: path.clone(),
            });
        }

        let style = inherited.patch(cs.text_style());

        if let Some(glyph) = self.glyph(element, &cs) {
            let mut glyph_style = inherited;
            if let Some(color) = cs.bg.or(cs.fg).or(inherited.fg) {
                glyph_style = glyph_style.fg(color);
            }
            if cs.animation == Some(Animation::Pulse) {
                glyph_style = glyph_style.add_modifier(Modifier::SLOW_BLINK);
            }
            put(buf, area, area.x, area.y, glyph, glyph_style);
            return;
        }

        if let Some(bg) = cs.bg {
            buf.set_style(area, Style::default().bg(bg));
        }

        let mut inner = area;
        if cs.has_border() {
            let focused = self.focused == Some(path.as_slice());
            let border_type = if focused {
                BorderType::Double
            } else if cs.border_width >= 2 {
                BorderType::Thick
            } else if cs.radius >= Radius::Medium {
                BorderType::Rounded
            } else {
                BorderType::Plain
            };
            let border_style = style.fg(cs.border_color.unwrap_or(DEFAULT_BORDER_COLOR));
            let block = Block::default()
                .borders(cs.borders)
                .border_type(border_type)
                .border_style(border_style);
            inner = block.inner(area);
            block.render(area, buf);
        }
        let inner = shrink(inner, &cs);
        if inner.is_empty() {
            return;
        }

        if cs.is_row() {
            self.paint_row(element, path, &cs, inner, style, buf, hits);
        } else {
            self.paint_column(element, path, &cs, inner, style, buf, hits);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_column(
        &self,
        element: &Element,
        path: &mut Vec<usize>,
        cs: &ComputedStyle,
        inner: Rect,
        style: Style,
        buf: &mut Buffer,
        hits: &mut Vec<HitRegion>,
    ) {
        let mut y = inner.y;
        for (index, child) in element.get_children().iter().enumerate() {
            if y >= inner.bottom() {
                break;
            }
            match child {
                Node::Text(text) => {
                    for line in wrap(text, inner.width) {
                        if y >= inner.bottom() {
                            break;
                        }
                        let offset = match cs.text_align {
                            TextAlign::Left => 0,
                            TextAlign::Center => inner.width.saturating_sub(text_width(&line)) / 2,
                            TextAlign::Right => inner.width.saturating_sub(text_width(&line)),
                        };
                        put(buf, inner, inner.x + offset, y, &line, style);
                        y += 1;
                    }
                }
                Node::Element(child) => {
                    path.push(index);
                    let ccs = self.compute(child, path);
                    if ccs.display != Display::Hidden {
                        y = y.saturating_add(ccs.margin.top);
                        let width = self.box_width(child, &ccs, path, inner.width);
                        let x = if ccs.center_x {
                            inner.x + inner.width.saturating_sub(width) / 2
                        } else {
                            inner.x.saturating_add(ccs.margin.left)
                        };
                        let height = self.height(child, path, width);
                        let rect = Rect::new(x, y.min(inner.bottom()), width, height).intersection(inner);
                        self.paint_element(child, path, rect, style, buf, hits);
                        y = y.saturating_add(height.saturating_add(ccs.margin.bottom));
                    }
                    path.pop();
                }
            }
            y = y.saturating_add(cs.space_y);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_row(
        &self,
        element: &Element,
        path: &mut Vec<usize>,
        cs: &ComputedStyle,
        inner: Rect,
        style: Style,
        buf: &mut Buffer,
        hits: &mut Vec<HitRegion>,
    ) {
        let items = self.row_items(element, path, inner.width);
        if items.is_empty() {
            return;
        }
        let outer = |item: &RowItem| item.width.saturating_add(item.margin_left).saturating_add(item.margin_right);
        let content = items.iter().map(outer).fold(0u16, u16::saturating_add);
        let gaps = u16::try_from(items.len() - 1).unwrap_or(u16::MAX);
        let free = inner.width.saturating_sub(content.saturating_add(cs.space_x.saturating_mul(gaps)));

        let (mut x, gap) = match cs.justify {
            Justify::Start => (inner.x, cs.space_x),
            Justify::Center => (inner.x + free / 2, cs.space_x),
            Justify::End => (inner.x + free, cs.space_x),
            Justify::Between if gaps > 0 => (inner.x, inner.width.saturating_sub(content) / gaps),
            Justify::Between => (inner.x, 0),
        };

        let last = items.len() - 1;
        for (position, item) in items.iter().enumerate() {
            if cs.justify == Justify::Between && position == last && gaps > 0 {
                x = inner.right().saturating_sub(outer(item)).max(x);
            }
            x = x.saturating_add(item.margin_left);
            let y = match cs.align {
                Align::Center => inner.y + inner.height.saturating_sub(item.height) / 2,
                Align::End => inner.y + inner.height.saturating_sub(item.height),
                Align::Start | Align::Stretch => inner.y,
            };
            match &element.get_children()[item.index] {
                Node::Text(text) => put(buf, inner, x, y, text, style),
                Node::Element(child) => {
                    path.push(item.index);
                    let ccs = self.compute(child, path);
                    let rect = Rect::new(
                        x.min(inner.right()),
                        y.saturating_add(ccs.margin.top).min(inner.bottom()),
                        item.width,
                        item.height.saturating_sub(ccs.margin.vertical()),
                    )
                    .intersection(inner);
                    self.paint_element(child, path, rect, style, buf, hits);
                    path.pop();
                }
            }
            x = x.saturating_add(item.width.saturating_add(item.margin_right).saturating_add(gap));
        }
    }
}

struct RowItem {
    index: usize,
    width: u16,
    /// Includes vertical margins.
    height: u16,
    margin_left: u16,
    margin_right: u16,
}

fn child_path(path: &[usize], index: usize) -> Vec<usize> {
    let mut child = path.to_vec();
    child.push(index);
    child
}

fn shrink(area: Rect, cs: &ComputedStyle) -> Rect {
    let padding = cs.padding;
    let x = area.x.saturating_add(padding.left).min(area.right());
    let y = area.y.saturating_add(padding.top).min(area.bottom());
    Rect::new(
        x,
        y,
        area.width.saturating_sub(padding.horizontal()),
        area.height.saturating_sub(padding.vertical()),
    )
}

/// Write `text` at (x, y), clipped to `clip`.
fn put(buf: &mut Buffer, clip: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y < clip.y || y >= clip.bottom() || x < clip.x || x >= clip.right() {
        return;
    }
    let max_width = usize::from(clip.right() - x);
    buf.set_stringn(x, y, text, max_width, style);
}

pub fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// Greedy word wrap. Words longer than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let needed = if line.is_empty() { word.len() } else { line_width + 1 + word.len() };
            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.extend(word.iter());
                line_width = needed;
                break;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
                continue;
            }
            let rest = word.split_off(width);
            lines.push(word.iter().collect());
            word = rest;
            if word.is_empty() {
                break;
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
