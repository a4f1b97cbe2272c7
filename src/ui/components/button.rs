use serde::{Deserialize, Serialize};

use crate::style::ClassList;
use crate::ui::core::{Callback, Component, Element, Node};

pub const BASE_STYLES: &str = "rounded-lg font-semibold transition-all duration-200";

/// Button variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 text-white hover:bg-blue-700 disabled:bg-gray-400",
            Self::Secondary => "bg-gray-200 text-gray-800 hover:bg-gray-300 disabled:bg-gray-100",
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// Base, variant and size fragments, in that order.
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> ClassList {
    ClassList::new()
        .with(BASE_STYLES)
        .with(variant.classes())
        .with(size.classes())
}

/// Generic clickable button.
#[derive(Debug, Clone)]
pub struct Button {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub children: Vec<Node>,
    pub on_click: Option<Callback>,
    pub disabled: bool,
}

impl Button {
    pub fn new(children: impl Into<Node>) -> Self {
        Self::with_children([children.into()])
    }

    pub fn with_children(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            children: children.into_iter().collect(),
            on_click: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn on_click(mut self, callback: impl Into<Callback>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn class_list(&self) -> ClassList {
        button_classes(self.variant, self.size)
    }
}

impl Component for Button {
    fn view(&self) -> Element {
        let mut button = Element::button()
            .class(self.class_list())
            .disabled(self.disabled)
            .children(self.children.iter().cloned());
        if let Some(callback) = &self.on_click {
            button = button.on_click(callback.clone());
        }
        button
    }
}
