//! Task card activated as a whole by click or keyboard.

use crate::constants::{
    DEFAULT_TASK_DESCRIPTION, DEFAULT_TASK_TITLE, LABEL_ACTIVE, LABEL_AUTOMATION_TEST, LABEL_COMPLETED,
    LABEL_IN_PROGRESS,
};
use crate::style::ClassList;
use crate::ui::core::{Action, Callback, Component, Element, KeyHandler, KeyInput, Role};

const CARD_STYLES: &str = "max-w-md mx-auto p-6 rounded-lg shadow-md border \
    bg-white dark:bg-gray-800 \
    border-gray-200 dark:border-gray-700 \
    hover:shadow-lg transition-shadow duration-300";
const CARD_INTERACTIVE_STYLES: &str = "cursor-pointer hover:bg-gray-50 dark:hover:bg-gray-700";

const TITLE_STYLES: &str = "text-lg font-semibold text-gray-900 dark:text-white";
const STATUS_LABEL_STYLES: &str = "ml-2 text-sm font-medium text-gray-600 dark:text-gray-300";
const DESCRIPTION_STYLES: &str = "text-gray-600 dark:text-gray-300 text-sm leading-relaxed mb-4";
const FOOTER_STYLES: &str = "flex items-center justify-between pt-3 border-t border-gray-100 dark:border-gray-700";
const FOOTER_TEXT_STYLES: &str = "text-xs text-gray-500 dark:text-gray-400";
const PULSE_DOT_STYLES: &str = "w-2 h-2 bg-blue-500 dark:bg-blue-400 rounded-full animate-pulse";

#[must_use]
pub fn status_label(is_completed: bool) -> &'static str {
    if is_completed {
        LABEL_COMPLETED
    } else {
        LABEL_IN_PROGRESS
    }
}

/// Classes of the round status dot.
#[must_use]
pub fn indicator_classes(is_completed: bool) -> ClassList {
    ClassList::new()
        .with("w-3 h-3 rounded-full")
        .with_if(is_completed, "bg-green-500 dark:bg-green-400")
        .with_if(!is_completed, "bg-yellow-500 dark:bg-yellow-400")
}

/// Card with title, description and a completion indicator.
///
/// With `on_click` set the whole card becomes a button: it gets the `button`
/// role, joins the tab order and treats Enter and Space like a click.
#[derive(Debug, Clone)]
pub struct TaskCard {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub class_name: String,
    pub on_click: Option<Callback>,
}

impl Default for TaskCard {
    fn default() -> Self {
        Self {
            title: DEFAULT_TASK_TITLE.to_string(),
            description: DEFAULT_TASK_DESCRIPTION.to_string(),
            is_completed: false,
            class_name: String::new(),
            on_click: None,
        }
    }
}

impl TaskCard {
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
    pub fn on_click(mut self, callback: impl Into<Callback>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    /// Container classes: base, interactive (only with a handler), caller's.
    #[must_use]
    pub fn container_classes(&self) -> ClassList {
        ClassList::new()
            .with(CARD_STYLES)
            .with_if(self.on_click.is_some(), CARD_INTERACTIVE_STYLES)
            .with(&self.class_name)
    }

    fn header(&self) -> Element {
        let label = status_label(self.is_completed);
        Element::div()
            .class("flex items-center justify-between mb-3")
            .child(Element::heading().class(TITLE_STYLES).child(self.title.as_str()))
            .child(
                Element::div()
                    .class("flex items-center")
                    .child(
                        Element::div()
                            .class(indicator_classes(self.is_completed))
                            .aria_label(label),
                    )
                    .child(Element::span().class(STATUS_LABEL_STYLES).child(label)),
            )
    }

    fn footer() -> Element {
        Element::div()
            .class(FOOTER_STYLES)
            .child(Element::span().class(FOOTER_TEXT_STYLES).child(LABEL_AUTOMATION_TEST))
            .child(
                Element::div()
                    .class("flex items-center space-x-1")
                    .child(Element::div().class(PULSE_DOT_STYLES))
                    .child(Element::span().class(FOOTER_TEXT_STYLES).child(LABEL_ACTIVE)),
            )
    }
}

/// Key handler activating `callback` on Enter or Space.
fn activation_handler(callback: Callback) -> KeyHandler {
    KeyHandler::new(move |input: &mut KeyInput| {
        if !input.is_activation() {
            return Action::None;
        }
        // The default must be suppressed before the callback runs.
        input.prevent_default();
        callback.emit(())
    })
}

impl Component for TaskCard {
    fn view(&self) -> Element {
        let mut card = Element::div()
            .class(self.container_classes())
            .child(self.header())
            .child(
                Element::paragraph()
                    .class(DESCRIPTION_STYLES)
                    .child(self.description.as_str()),
            )
            .child(Self::footer());

        if let Some(callback) = &self.on_click {
            card = card
                .role(Role::Button)
                .tab_index(0)
                .on_click(callback.clone())
                .on_key_down(activation_handler(callback.clone()));
        }
        card
    }
}
