//! Gallery state and the actions that drive it

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Duration;

use crate::config::{Config, GalleryConfig};
use crate::constants::STATUS_VERIFIED;
use crate::logger::Logger;
use crate::style::Theme;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, TaskCard, ToggleTaskCard, VerifyTaskCard};
use crate::ui::core::{Action, Component, Element, Mount};
use crate::ui::layout::GalleryAreas;

/// Application state
///
/// Owns every flag the gallery components render from. Components only report
/// actions; [`App::update`] applies them.
pub struct App {
    pub should_quit: bool,
    pub theme: Theme,
    pub mouse_enabled: bool,
    pub tick_rate: Duration,
    pub gallery: GalleryConfig,

    // Card state
    pub card_completed: bool,
    pub toggle_completed: bool,
    pub verifying: bool,
    pub verified: bool,

    pub button_presses: usize,
    pub last_pressed: Option<String>,
    pub show_logs: bool,
    pub status_message: Option<String>,
    pub logger: Logger,

    action_tx: Option<UnboundedSender<Action>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default(), Logger::new())
    }
}

impl App {
    /// Create a new App instance
    #[must_use]
    pub fn new(config: &Config, logger: Logger) -> Self {
        Self {
            should_quit: false,
            theme: config.ui.theme,
            mouse_enabled: config.ui.mouse_enabled,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            gallery: config.gallery.clone(),
            card_completed: false,
            toggle_completed: false,
            verifying: false,
            verified: false,
            button_presses: 0,
            last_pressed: None,
            show_logs: false,
            status_message: None,
            logger,
            action_tx: None,
        }
    }

    /// Channel for actions produced outside the event loop
    #[must_use]
    pub fn with_action_sender(mut self, tx: UnboundedSender<Action>) -> Self {
        self.action_tx = Some(tx);
        self
    }

    /// Apply an action to the gallery state
    pub fn update(&mut self, action: Action) {
        match action {
            Action::ButtonPressed(name) => {
                self.button_presses += 1;
                log::info!("Button pressed: {name}");
                self.status_message = Some(format!("Pressed {name}"));
                self.last_pressed = Some(name);
            }
            Action::CardActivated => {
                self.card_completed = !self.card_completed;
                log::info!("Task card activated, completed = {}", self.card_completed);
            }
            Action::StatusChangeRequested(completed) => {
                self.toggle_completed = completed;
                log::info!("Status change requested: completed = {completed}");
            }
            Action::VerifyRequested => self.start_verification(),
            Action::VerifyFinished => {
                if self.verifying {
                    self.verifying = false;
                    self.verified = true;
                    self.status_message = Some(STATUS_VERIFIED.to_string());
                    log::info!("Verification finished");
                }
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                log::info!("Theme switched to {}", self.theme.name());
            }
            Action::ShowLogs(show) => self.show_logs = show,
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn start_verification(&mut self) {
        if self.verifying {
            log::debug!("Verification already running");
            return;
        }
        self.verifying = true;
        self.verified = false;
        log::info!("Verification started ({} ms)", self.gallery.verify_delay_ms);

        let Some(tx) = self.action_tx.clone() else {
            return;
        };
        let delay = Duration::from_millis(self.gallery.verify_delay_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::VerifyFinished).is_err() {
                log::warn!("Verification finished after the gallery closed");
            }
        });
    }

    /// Shortcuts for keys no mounted element consumed
    #[must_use]
    pub fn handle_global_key(&self, key: KeyEvent) -> Action {
        if self.show_logs {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('q') => Action::ShowLogs(false),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('g') => Action::ShowLogs(true),
            _ => Action::None,
        }
    }

    /// Element trees for the current state, one per gallery area
    #[must_use]
    pub fn mounts(&self, areas: &GalleryAreas) -> Vec<Mount> {
        vec![
            Mount::new(areas.buttons, self.button_gallery()),
            Mount::new(areas.task_card, self.task_card().view()),
            Mount::new(areas.toggle_card, self.toggle_card().view()),
            Mount::new(areas.verify_card, self.verify_card().view()),
        ]
    }

    fn button_gallery(&self) -> Element {
        let primary = pressed_button("Primary", self.gallery.button_variant, self.gallery.button_size);
        let row = Element::div()
            .class("flex items-center space-x-2 mb-2")
            .child(primary.view())
            .child(pressed_button("Small", ButtonVariant::Secondary, ButtonSize::Sm).view())
            .child(pressed_button("Large", ButtonVariant::Secondary, ButtonSize::Lg).view())
            .child(Button::new("Disabled").variant(ButtonVariant::Secondary).disabled(true).view());

        let summary = match &self.last_pressed {
            Some(name) => format!("{} presses, last: {name}", self.button_presses),
            None => "No presses yet".to_string(),
        };

        Element::div()
            .class("p-4 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800")
            .child(
                Element::heading()
                    .class("text-lg font-semibold text-gray-900 dark:text-white mb-2")
                    .child("Buttons"),
            )
            .child(row)
            .child(
                Element::paragraph()
                    .class("text-sm text-gray-500 dark:text-gray-400")
                    .child(summary),
            )
    }

    fn task_card(&self) -> TaskCard {
        TaskCard::new()
            .title(self.gallery.title.as_str())
            .description(self.gallery.description.as_str())
            .completed(self.card_completed)
            .on_click(|()| Action::CardActivated)
    }

    fn toggle_card(&self) -> ToggleTaskCard {
        ToggleTaskCard::new()
            .title(self.gallery.title.as_str())
            .description(self.gallery.description.as_str())
            .completed(self.toggle_completed)
            .on_status_change(Action::StatusChangeRequested)
    }

    fn verify_card(&self) -> VerifyTaskCard {
        VerifyTaskCard::new()
            .title(self.gallery.title.as_str())
            .description(self.gallery.description.as_str())
            .loading(self.verifying)
            .on_verify(|()| Action::VerifyRequested)
    }
}

fn pressed_button(label: &str, variant: ButtonVariant, size: ButtonSize) -> Button {
    let name = label.to_string();
    Button::new(label)
        .variant(variant)
        .size(size)
        .on_click(move |()| Action::ButtonPressed(name.clone()))
}
