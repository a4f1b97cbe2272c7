//! Task card with an explicit completion toggle.

use crate::constants::{
    BUTTON_MARK_COMPLETE, BUTTON_MARK_INCOMPLETE, DEFAULT_TASK_DESCRIPTION, DEFAULT_TASK_TITLE, LABEL_AUTOMATION_VERIFIED,
    LABEL_COMPLETED, LABEL_IN_PROGRESS, LABEL_STATUS,
};
use crate::style::ClassList;
use crate::ui::core::{Callback, Component, Element};

const CARD_STYLES: &str = "max-w-md mx-auto p-6 rounded-lg shadow-md border \
    bg-white dark:bg-gray-800 border-gray-200 dark:border-gray-700";
const TITLE_STYLES: &str = "text-lg font-semibold text-gray-900 dark:text-white mb-2";
const DESCRIPTION_STYLES: &str = "text-gray-600 dark:text-gray-300 text-sm mb-4";
const STATUS_ROW_STYLES: &str = "flex items-center justify-between mb-4";
const STATUS_CAPTION_STYLES: &str = "text-sm text-gray-500 dark:text-gray-400";
const TOGGLE_STYLES: &str = "w-full px-4 py-2 rounded-md font-medium text-center transition-colors duration-200";
const BADGE_STYLES: &str = "inline-flex items-center px-2 py-1 rounded-full text-xs font-medium \
    bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200";

/// Status text classes: green when completed, orange otherwise.
#[must_use]
pub fn status_classes(is_completed: bool) -> ClassList {
    ClassList::new()
        .with("text-sm font-semibold")
        .with_if(is_completed, "text-green-600 dark:text-green-400")
        .with_if(!is_completed, "text-orange-600 dark:text-orange-400")
}

#[must_use]
pub fn toggle_label(is_completed: bool) -> &'static str {
    if is_completed {
        BUTTON_MARK_INCOMPLETE
    } else {
        BUTTON_MARK_COMPLETE
    }
}

#[must_use]
pub fn toggle_classes(is_completed: bool) -> ClassList {
    ClassList::new()
        .with(TOGGLE_STYLES)
        .with_if(
            is_completed,
            "bg-gray-200 text-gray-800 hover:bg-gray-300 dark:bg-gray-700 dark:text-gray-100 dark:hover:bg-gray-600",
        )
        .with_if(!is_completed, "bg-green-600 text-white hover:bg-green-700")
}

/// Card reporting requested completion changes through `on_status_change`.
///
/// The card never flips `is_completed` itself: the toggle emits the negated
/// flag and the caller decides whether to render again with it.
#[derive(Debug, Clone)]
pub struct ToggleTaskCard {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub class_name: String,
    pub on_status_change: Option<Callback<bool>>,
}

impl Default for ToggleTaskCard {
    fn default() -> Self {
        Self {
            title: DEFAULT_TASK_TITLE.to_string(),
            description: DEFAULT_TASK_DESCRIPTION.to_string(),
            is_completed: false,
            class_name: String::new(),
            on_status_change: None,
        }
    }
}

impl ToggleTaskCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn on_status_change(mut self, callback: impl Into<Callback<bool>>) -> Self {
        self.on_status_change = Some(callback.into());
        self
    }

    #[must_use]
    pub fn container_classes(&self) -> ClassList {
        ClassList::new().with(CARD_STYLES).with(&self.class_name)
    }

    fn toggle_button(&self, callback: &Callback<bool>) -> Element {
        let callback = callback.clone();
        let next = !self.is_completed;
        Element::button()
            .class(toggle_classes(self.is_completed))
            .on_click(Callback::new(move |()| callback.emit(next)))
            .child(toggle_label(self.is_completed))
    }
}

impl Component for ToggleTaskCard {
    fn view(&self) -> Element {
        let label = if self.is_completed { LABEL_COMPLETED } else { LABEL_IN_PROGRESS };
        let mut card = Element::div()
            .class(self.container_classes())
            .child(Element::heading().class(TITLE_STYLES).child(self.title.as_str()))
            .child(
                Element::paragraph()
                    .class(DESCRIPTION_STYLES)
                    .child(self.description.as_str()),
            )
            .child(
                Element::div()
                    .class(STATUS_ROW_STYLES)
                    .child(Element::span().class(STATUS_CAPTION_STYLES).child(LABEL_STATUS))
                    .child(Element::span().class(status_classes(self.is_completed)).child(label)),
            );

        if let Some(callback) = &self.on_status_change {
            card = card.child(self.toggle_button(callback));
        }

        card.child(
            Element::div()
                .class("mt-4 flex justify-center")
                .child(Element::span().class(BADGE_STYLES).child(LABEL_AUTOMATION_VERIFIED)),
        )
    }
}
