//! Resolution of class lists into computed terminal styles.

use std::cell::RefCell;
use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Borders;

use super::class_list::ClassList;
use super::theme::Theme;
use super::utility::{
    Align, Animation, Direction, Display, FontWeight, Justify, ParsedClass, Radius, Side, Size, Spacing, TextAlign,
    TextSize, Utility, Variant,
};

/// Conditions under which variant-prefixed classes apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementState {
    pub theme: Theme,
    pub hovered: bool,
    pub focused: bool,
    pub disabled: bool,
}

impl ElementState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    fn matches(&self, variant: Variant) -> bool {
        match variant {
            Variant::Dark => self.theme.is_dark(),
            Variant::Hover => self.hovered,
            Variant::Focus => self.focused,
            Variant::Disabled => self.disabled,
        }
    }
}

/// Per-edge amounts in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    #[must_use]
    pub fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    #[must_use]
    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    fn set(&mut self, side: Side, spacing: Spacing) {
        let (cols, rows) = (spacing.columns(), spacing.rows());
        match side {
            Side::All => *self = Self { top: rows, right: cols, bottom: rows, left: cols },
            Side::X => (self.left, self.right) = (cols, cols),
            Side::Y => (self.top, self.bottom) = (rows, rows),
            Side::Top => self.top = rows,
            Side::Right => self.right = cols,
            Side::Bottom => self.bottom = rows,
            Side::Left => self.left = cols,
        }
    }
}

/// The resolved style of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    /// `None` inherits the parent's foreground.
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub border_color: Option<Color>,
    pub font_weight: FontWeight,
    pub text_size: TextSize,
    pub text_align: TextAlign,
    pub italic: bool,
    pub padding: Edges,
    pub margin: Edges,
    pub center_x: bool,
    pub borders: Borders,
    pub border_width: u16,
    pub radius: Radius,
    pub display: Display,
    pub direction: Direction,
    pub justify: Justify,
    pub align: Align,
    pub space_x: u16,
    pub space_y: u16,
    pub width: Size,
    pub height: Size,
    pub max_width: Option<u16>,
    pub animation: Option<Animation>,
    pub opacity: u8,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            fg: None,
            bg: None,
            border_color: None,
            font_weight: FontWeight::Normal,
            text_size: TextSize::Base,
            text_align: TextAlign::Left,
            italic: false,
            padding: Edges::default(),
            margin: Edges::default(),
            center_x: false,
            borders: Borders::NONE,
            border_width: 1,
            radius: Radius::None,
            display: Display::Block,
            direction: Direction::Row,
            justify: Justify::Start,
            align: Align::Stretch,
            space_x: 0,
            space_y: 0,
            width: Size::Auto,
            height: Size::Auto,
            max_width: None,
            animation: None,
            opacity: 100,
        }
    }
}

impl ComputedStyle {
    /// Whether children flow horizontally.
    #[must_use]
    pub fn is_row(&self) -> bool {
        matches!(self.display, Display::Flex | Display::InlineFlex) && self.direction == Direction::Row
    }

    #[must_use]
    pub fn has_border(&self) -> bool {
        !self.borders.is_empty()
    }

    /// Cells consumed by borders as (left, right, top, bottom).
    #[must_use]
    pub fn border_cells(&self) -> (u16, u16, u16, u16) {
        let b = |side: Borders| u16::from(self.borders.contains(side));
        (b(Borders::LEFT), b(Borders::RIGHT), b(Borders::TOP), b(Borders::BOTTOM))
    }

    /// Text style for this element; colors left unset are inherited on patch.
    #[must_use]
    pub fn text_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if self.font_weight >= FontWeight::Semibold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.opacity <= 50 {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.animation == Some(Animation::Pulse) {
            style = style.add_modifier(Modifier::SLOW_BLINK);
        }
        style
    }

    fn apply(&mut self, utility: &Utility) {
        match *utility {
            Utility::Background(color) => self.bg = color,
            Utility::TextColor(color) => self.fg = color,
            Utility::BorderColor(color) => self.border_color = color,
            Utility::FontWeight(weight) => self.font_weight = weight,
            Utility::TextSize(size) => self.text_size = size,
            Utility::TextAlign(align) => self.text_align = align,
            Utility::Italic => self.italic = true,
            Utility::Padding(side, spacing) => self.padding.set(side, spacing),
            Utility::Margin(side, spacing) => {
                self.margin.set(side, spacing);
                if matches!(side, Side::All | Side::X) {
                    self.center_x = false;
                }
            }
            Utility::MarginAuto(side) => {
                if matches!(side, Side::All | Side::X) {
                    self.center_x = true;
                }
            }
            Utility::Border(side, width) => {
                let sides = match side {
                    Side::All => Borders::ALL,
                    Side::X => Borders::LEFT | Borders::RIGHT,
                    Side::Y => Borders::TOP | Borders::BOTTOM,
                    Side::Top => Borders::TOP,
                    Side::Right => Borders::RIGHT,
                    Side::Bottom => Borders::BOTTOM,
                    Side::Left => Borders::LEFT,
                };
                if width == 0 {
                    self.borders.remove(sides);
                } else {
                    self.borders.insert(sides);
                    self.border_width = width;
                }
            }
            Utility::Rounded(radius) => self.radius = radius,
            Utility::Display(display) => self.display = display,
            Utility::Direction(direction) => self.direction = direction,
            Utility::Justify(justify) => self.justify = justify,
            Utility::Align(align) => self.align = align,
            Utility::SpaceX(spacing) => self.space_x = spacing.columns(),
            Utility::SpaceY(spacing) => self.space_y = spacing.rows(),
            Utility::Gap(spacing) => {
                self.space_x = spacing.columns();
                self.space_y = spacing.rows();
            }
            Utility::Width(size) => self.width = size,
            Utility::Height(size) => self.height = size,
            Utility::MaxWidth(limit) => self.max_width = limit,
            Utility::Animate(animation) => self.animation = Some(animation),
            Utility::Opacity(value) => self.opacity = value,
            Utility::Decorative => {}
        }
    }
}

/// Resolves class lists, caching decoded classes.
#[derive(Debug, Default)]
pub struct Stylesheet {
    cache: RefCell<HashMap<String, Option<ParsedClass>>>,
}

impl Stylesheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every class in order; a later class overrides an earlier one
    /// touching the same property. Unknown classes are skipped.
    #[must_use]
    pub fn resolve(&self, classes: &ClassList, state: ElementState) -> ComputedStyle {
        let mut computed = ComputedStyle::default();
        let mut cache = self.cache.borrow_mut();

        for class in classes.iter() {
            let parsed = cache.entry(class.to_string()).or_insert_with(|| match ParsedClass::parse(class) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    log::debug!("Skipping class '{}': {}", class, e);
                    None
                }
            });
            let Some(parsed) = parsed else {
                continue;
            };
            if parsed.variants.iter().all(|v| state.matches(*v)) {
                computed.apply(&parsed.utility);
            }
        }

        computed
    }
}
