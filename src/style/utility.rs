//! Decoding of individual utility classes.
//!
//! A class is an optional chain of variant prefixes followed by a base
//! utility: `dark:hover:bg-gray-700` is the `bg-gray-700` background that only
//! applies in the dark theme while the element is hovered.

use ratatui::style::Color;

use super::error::StyleError;
use super::palette::{is_color, parse_color};

/// Conditional prefix on a utility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Dark,
    Hover,
    Focus,
    Disabled,
}

impl Variant {
    fn parse(prefix: &str) -> Result<Self, StyleError> {
        match prefix {
            "dark" => Ok(Self::Dark),
            "hover" => Ok(Self::Hover),
            "focus" | "focus-visible" => Ok(Self::Focus),
            "disabled" => Ok(Self::Disabled),
            other => Err(StyleError::UnknownVariant(other.to_string())),
        }
    }
}

/// Which edges a spacing or border utility targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Self::All),
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "t" => Some(Self::Top),
            "r" => Some(Self::Right),
            "b" => Some(Self::Bottom),
            "l" => Some(Self::Left),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Xs,
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Radius {
    #[default]
    None,
    Small,
    Medium,
    Large,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Flex,
    InlineFlex,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    Between,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

/// Width or height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    #[default]
    Auto,
    Full,
    Cells(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Pulse,
    Spin,
}

/// A spacing amount in half steps of the utility scale (`1.5` is `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing(pub u16);

impl Spacing {
    fn parse(value: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidSpacing(value.to_string());
        if value == "px" {
            return Ok(Self(0));
        }
        let (whole, half) = match value.split_once('.') {
            Some((whole, "5")) => (whole, 1),
            Some(_) => return Err(invalid()),
            None => (value, 0),
        };
        let whole: u32 = whole.parse().map_err(|_| invalid())?;
        let halves = u16::try_from(whole * 2 + half).map_err(|_| invalid())?;
        Ok(Self(halves))
    }

    /// Terminal columns: one column per two scale steps, rounded half up.
    #[must_use]
    pub fn columns(self) -> u16 {
        self.0.saturating_add(2) / 4
    }

    /// Terminal rows: one row per four scale steps, rounded half up.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.0.saturating_add(4) / 8
    }
}

/// A decoded base utility.
#[derive(Debug, Clone, PartialEq)]
pub enum Utility {
    /// `None` is `transparent`.
    Background(Option<Color>),
    TextColor(Option<Color>),
    BorderColor(Option<Color>),
    FontWeight(FontWeight),
    TextSize(TextSize),
    TextAlign(TextAlign),
    Italic,
    Padding(Side, Spacing),
    Margin(Side, Spacing),
    MarginAuto(Side),
    Border(Side, u16),
    Rounded(Radius),
    Display(Display),
    Direction(Direction),
    Justify(Justify),
    Align(Align),
    SpaceX(Spacing),
    SpaceY(Spacing),
    Gap(Spacing),
    Width(Size),
    Height(Size),
    /// `None` removes a previous limit.
    MaxWidth(Option<u16>),
    Animate(Animation),
    Opacity(u8),
    /// Recognised but without a terminal rendition (transitions, shadows, cursors).
    Decorative,
}

const DECORATIVE_PREFIXES: &[&str] = &[
    "transition", "duration-", "ease-", "delay-", "shadow", "cursor-", "leading-", "tracking-", "select-",
    "outline", "ring", "z-", "overflow-",
];

impl Utility {
    /// Decode a base utility (no variant prefixes).
    pub fn parse(class: &str) -> Result<Self, StyleError> {
        if class.is_empty() {
            return Err(StyleError::Empty);
        }
        if let Some(utility) = Self::parse_keyword(class) {
            return Ok(utility);
        }
        if DECORATIVE_PREFIXES.iter().any(|p| class.starts_with(p)) {
            return Ok(Self::Decorative);
        }
        Self::parse_prefixed(class)
    }

    fn parse_keyword(class: &str) -> Option<Self> {
        let utility = match class {
            "flex" => Self::Display(Display::Flex),
            "inline-flex" => Self::Display(Display::InlineFlex),
            "block" | "inline-block" | "inline" => Self::Display(Display::Block),
            "hidden" => Self::Display(Display::Hidden),
            "flex-row" => Self::Direction(Direction::Row),
            "flex-col" => Self::Direction(Direction::Column),
            "items-start" => Self::Align(Align::Start),
            "items-center" => Self::Align(Align::Center),
            "items-end" => Self::Align(Align::End),
            "items-stretch" => Self::Align(Align::Stretch),
            "justify-start" => Self::Justify(Justify::Start),
            "justify-center" => Self::Justify(Justify::Center),
            "justify-between" => Self::Justify(Justify::Between),
            "justify-end" => Self::Justify(Justify::End),
            "rounded-none" => Self::Rounded(Radius::None),
            "rounded-sm" => Self::Rounded(Radius::Small),
            "rounded" | "rounded-md" => Self::Rounded(Radius::Medium),
            "rounded-lg" | "rounded-xl" | "rounded-2xl" => Self::Rounded(Radius::Large),
            "rounded-full" => Self::Rounded(Radius::Full),
            "font-normal" => Self::FontWeight(FontWeight::Normal),
            "font-medium" => Self::FontWeight(FontWeight::Medium),
            "font-semibold" => Self::FontWeight(FontWeight::Semibold),
            "font-bold" => Self::FontWeight(FontWeight::Bold),
            "italic" => Self::Italic,
            "text-xs" => Self::TextSize(TextSize::Xs),
            "text-sm" => Self::TextSize(TextSize::Sm),
            "text-base" => Self::TextSize(TextSize::Base),
            "text-lg" => Self::TextSize(TextSize::Lg),
            "text-xl" | "text-2xl" => Self::TextSize(TextSize::Xl),
            "text-left" => Self::TextAlign(TextAlign::Left),
            "text-center" => Self::TextAlign(TextAlign::Center),
            "text-right" => Self::TextAlign(TextAlign::Right),
            "animate-pulse" => Self::Animate(Animation::Pulse),
            "animate-spin" => Self::Animate(Animation::Spin),
            "w-full" => Self::Width(Size::Full),
            "w-auto" => Self::Width(Size::Auto),
            "h-full" => Self::Height(Size::Full),
            "h-auto" => Self::Height(Size::Auto),
            "max-w-xs" => Self::MaxWidth(Some(40)),
            "max-w-sm" => Self::MaxWidth(Some(48)),
            "max-w-md" => Self::MaxWidth(Some(56)),
            "max-w-lg" => Self::MaxWidth(Some(64)),
            "max-w-xl" => Self::MaxWidth(Some(72)),
            "max-w-full" | "max-w-none" => Self::MaxWidth(None),
            "mx-auto" => Self::MarginAuto(Side::X),
            "m-auto" => Self::MarginAuto(Side::All),
            _ => return None,
        };
        Some(utility)
    }

    fn parse_prefixed(class: &str) -> Result<Self, StyleError> {
        let unknown = || StyleError::UnknownUtility(class.to_string());

        if let Some(color) = class.strip_prefix("bg-") {
            return Ok(Self::Background(parse_color(color)?));
        }
        if let Some(color) = class.strip_prefix("text-") {
            return Ok(Self::TextColor(parse_color(color)?));
        }
        if let Some(rest) = class.strip_prefix("border") {
            return Self::parse_border(rest).ok_or_else(unknown);
        }
        if let Some(rest) = class.strip_prefix("space-x-") {
            return Ok(Self::SpaceX(Spacing::parse(rest)?));
        }
        if let Some(rest) = class.strip_prefix("space-y-") {
            return Ok(Self::SpaceY(Spacing::parse(rest)?));
        }
        if let Some(rest) = class.strip_prefix("gap-") {
            return Ok(Self::Gap(Spacing::parse(rest)?));
        }
        if let Some(rest) = class.strip_prefix("opacity-") {
            let value: u8 = rest.parse().map_err(|_| unknown())?;
            return Ok(Self::Opacity(value.min(100)));
        }
        if let Some(rest) = class.strip_prefix("w-") {
            return Ok(Self::Width(Size::Cells(Spacing::parse(rest)?.columns())));
        }
        if let Some(rest) = class.strip_prefix("h-") {
            return Ok(Self::Height(Size::Cells(Spacing::parse(rest)?.rows().max(1))));
        }

        let (head, value) = class.split_once('-').ok_or_else(unknown)?;
        let mut chars = head.chars();
        let kind = chars.next().ok_or_else(unknown)?;
        let side = Side::from_suffix(chars.as_str()).ok_or_else(unknown)?;
        match kind {
            'p' => Ok(Self::Padding(side, Spacing::parse(value)?)),
            'm' if value == "auto" => Ok(Self::MarginAuto(side)),
            'm' => Ok(Self::Margin(side, Spacing::parse(value)?)),
            _ => Err(unknown()),
        }
    }

    /// `rest` is what follows `border`: "", "-2", "-t", "-t-2", "-gray-200", "-t-transparent".
    fn parse_border(rest: &str) -> Option<Self> {
        if rest.is_empty() {
            return Some(Self::Border(Side::All, 1));
        }
        let rest = rest.strip_prefix('-')?;
        if let Ok(width) = rest.parse::<u16>() {
            return Some(Self::Border(Side::All, width));
        }
        if is_color(rest) {
            return parse_color(rest).ok().map(Self::BorderColor);
        }

        let (side, tail) = match rest.split_once('-') {
            Some((side, tail)) => (side, Some(tail)),
            None => (rest, None),
        };
        let side = match side {
            "x" | "y" | "t" | "r" | "b" | "l" => Side::from_suffix(side)?,
            _ => return None,
        };
        match tail {
            None => Some(Self::Border(side, 1)),
            Some(tail) => match tail.parse::<u16>() {
                Ok(width) => Some(Self::Border(side, width)),
                // Per-side border colors have no terminal rendition.
                Err(_) if is_color(tail) => Some(Self::Decorative),
                Err(_) => None,
            },
        }
    }
}

/// A utility class with its variant prefixes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedClass {
    pub variants: Vec<Variant>,
    pub utility: Utility,
}

impl ParsedClass {
    pub fn parse(class: &str) -> Result<Self, StyleError> {
        let mut parts: Vec<&str> = class.split(':').collect();
        let base = parts.pop().ok_or(StyleError::Empty)?;
        let variants = parts
            .into_iter()
            .map(Variant::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            variants,
            utility: Utility::parse(base)?,
        })
    }
}
