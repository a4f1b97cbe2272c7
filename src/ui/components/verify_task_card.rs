//! Task card with a verify button and a caller-driven loading state.

use crate::constants::{
    BUTTON_VERIFY, BUTTON_VERIFYING, DEFAULT_TASK_DESCRIPTION, DEFAULT_TASK_TITLE, LABEL_READY_FOR_VERIFICATION,
};
use crate::style::ClassList;
use crate::ui::core::{Callback, Component, Element, Node};

const CARD_STYLES: &str = "max-w-md mx-auto p-6 rounded-lg shadow-md border \
    bg-white dark:bg-gray-800 border-gray-200 dark:border-gray-700";
const TITLE_STYLES: &str = "text-lg font-semibold text-gray-900 dark:text-white mb-2";
const DESCRIPTION_STYLES: &str = "text-gray-600 dark:text-gray-300 text-sm mb-4";
const READY_ROW_STYLES: &str = "flex items-center space-x-2 mb-4";
const READY_DOT_STYLES: &str = "w-2 h-2 bg-green-500 rounded-full";
const READY_TEXT_STYLES: &str = "text-sm text-green-600 dark:text-green-400";
const VERIFY_STYLES: &str = "w-full px-4 py-2 rounded-md font-medium text-white text-center \
    bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 disabled:opacity-50 \
    transition-colors duration-200";
const LOADING_LAYOUT_STYLES: &str = "flex items-center justify-center";
const SPINNER_STYLES: &str = "animate-spin h-4 w-4 mr-2 border-2 border-white border-t-transparent rounded-full";

#[must_use]
pub fn verify_classes(is_loading: bool) -> ClassList {
    ClassList::new()
        .with(VERIFY_STYLES)
        .with_if(is_loading, LOADING_LAYOUT_STYLES)
}

/// Card whose verify button reflects `is_loading`.
///
/// While loading the button is disabled and shows a spinner with
/// "Verifying..."; the caller owns when loading starts and ends.
#[derive(Debug, Clone)]
pub struct VerifyTaskCard {
    pub title: String,
    pub description: String,
    pub is_loading: bool,
    pub class_name: String,
    pub on_verify: Option<Callback>,
}

impl Default for VerifyTaskCard {
    fn default() -> Self {
        Self {
            title: DEFAULT_TASK_TITLE.to_string(),
            description: DEFAULT_TASK_DESCRIPTION.to_string(),
            is_loading: false,
            class_name: String::new(),
            on_verify: None,
        }
    }
}

impl VerifyTaskCard {
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
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn on_verify(mut self, callback: impl Into<Callback>) -> Self {
        self.on_verify = Some(callback.into());
        self
    }

    #[must_use]
    pub fn container_classes(&self) -> ClassList {
        ClassList::new().with(CARD_STYLES).with(&self.class_name)
    }

    fn button_content(&self) -> Vec<Node> {
        if self.is_loading {
            vec![
                Element::div().class(SPINNER_STYLES).into(),
                BUTTON_VERIFYING.into(),
            ]
        } else {
            vec![BUTTON_VERIFY.into()]
        }
    }

    fn verify_button(&self) -> Element {
        let mut button = Element::button()
            .class(verify_classes(self.is_loading))
            .disabled(self.is_loading)
            .children(self.button_content());
        if let Some(callback) = &self.on_verify {
            button = button.on_click(callback.clone());
        }
        button
    }
}

impl Component for VerifyTaskCard {
    fn view(&self) -> Element {
        Element::div()
            .class(self.container_classes())
            .child(Element::heading().class(TITLE_STYLES).child(self.title.as_str()))
            .child(
                Element::paragraph()
                    .class(DESCRIPTION_STYLES)
                    .child(self.description.as_str()),
            )
            .child(
                Element::div()
                    .class(READY_ROW_STYLES)
                    .child(Element::div().class(READY_DOT_STYLES))
                    .child(Element::span().class(READY_TEXT_STYLES).child(LABEL_READY_FOR_VERIFICATION)),
            )
            .child(self.verify_button())
    }
}
