use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use taskcards::config::Config;
use taskcards::logger::Logger;
use taskcards::style::Theme;
use taskcards::ui::core::{Action, Host, Tag};
use taskcards::ui::{App, LayoutManager};

use crate::support::key;

fn app() -> App {
    App::new(&Config::default(), Logger::new())
}

#[test]
fn test_initial_state() {
    let app = app();
    assert!(!app.should_quit);
    assert_eq!(app.theme, Theme::Light);
    assert!(!app.card_completed);
    assert!(!app.toggle_completed);
    assert!(!app.verifying);
    assert_eq!(app.button_presses, 0);
}

#[test]
fn test_card_and_toggle_actions() {
    let mut app = app();
    app.update(Action::CardActivated);
    assert!(app.card_completed);
    app.update(Action::CardActivated);
    assert!(!app.card_completed);

    app.update(Action::StatusChangeRequested(true));
    assert!(app.toggle_completed);
    app.update(Action::StatusChangeRequested(false));
    assert!(!app.toggle_completed);
}

#[test]
fn test_button_presses_are_counted() {
    let mut app = app();
    app.update(Action::ButtonPressed("Primary".to_string()));
    app.update(Action::ButtonPressed("Small".to_string()));
    assert_eq!(app.button_presses, 2);
    assert_eq!(app.last_pressed.as_deref(), Some("Small"));
}

#[test]
fn test_verify_lifecycle_without_runtime() {
    let mut app = app();
    app.update(Action::VerifyFinished);
    assert!(!app.verified);

    app.update(Action::VerifyRequested);
    assert!(app.verifying);
    app.update(Action::VerifyRequested);
    assert!(app.verifying);

    app.update(Action::VerifyFinished);
    assert!(!app.verifying);
    assert!(app.verified);
    assert!(app.status_message.is_some());
}

#[tokio::test]
async fn test_verification_reports_back() {
    let mut config = Config::default();
    config.gallery.verify_delay_ms = 0;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(&config, Logger::new()).with_action_sender(tx);

    app.update(Action::VerifyRequested);
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::VerifyFinished);

    app.update(action);
    assert!(!app.verifying);
    assert!(app.verified);
}

#[test]
fn test_global_keys() {
    let mut app = app();
    assert_eq!(app.handle_global_key(key(KeyCode::Char('q'))), Action::Quit);
    assert_eq!(app.handle_global_key(key(KeyCode::Esc)), Action::Quit);
    assert_eq!(
        app.handle_global_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Action::Quit
    );
    assert_eq!(app.handle_global_key(key(KeyCode::Char('t'))), Action::ToggleTheme);
    assert_eq!(app.handle_global_key(key(KeyCode::Char('x'))), Action::None);

    app.update(Action::ToggleTheme);
    assert_eq!(app.theme, Theme::Dark);

    // While the log panel is open, q and Esc close it
    app.update(app.handle_global_key(key(KeyCode::Char('g'))));
    assert!(app.show_logs);
    assert_eq!(app.handle_global_key(key(KeyCode::Char('q'))), Action::ShowLogs(false));
    assert_eq!(app.handle_global_key(key(KeyCode::Char('t'))), Action::None);

    app.update(Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_gallery_layout() {
    let areas = LayoutManager::gallery_layout(Rect::new(0, 0, 120, 40));
    assert_eq!(areas.header.height, 1);
    assert_eq!(areas.status.y, 39);
    assert_eq!(areas.buttons.x, 0);
    assert_eq!(areas.task_card.x, 60);
    assert_eq!(areas.toggle_card.y, areas.verify_card.y);
    assert!(areas.toggle_card.y > areas.buttons.y);
}

#[test]
fn test_mounted_gallery_drives_state() {
    let mut app = app();
    let areas = LayoutManager::gallery_layout(Rect::new(0, 0, 160, 50));
    let mut host = Host::new(app.theme);
    host.mount(app.mounts(&areas));
    assert_eq!(host.mounts().len(), 4);

    // Primary, Small, Large; Disabled is skipped
    host.focus_next();
    let dispatch = host.dispatch_key(key(KeyCode::Enter));
    app.update(dispatch.action);
    assert_eq!(app.button_presses, 1);

    for _ in 0..2 {
        host.focus_next();
    }
    host.focus_next();
    assert_eq!(host.focused().unwrap().tag(), Tag::Div);
    app.update(host.dispatch_key(key(KeyCode::Char(' '))).action);
    assert!(app.card_completed);

    host.focus_next();
    assert_eq!(host.focused().unwrap().text_content(), "Mark as Complete");
    app.update(host.dispatch_key(key(KeyCode::Enter)).action);
    assert!(app.toggle_completed);

    host.focus_next();
    app.update(host.dispatch_key(key(KeyCode::Enter)).action);
    assert!(app.verifying);

    // Re-render with the new state: the verify button left the tab order
    host.mount(app.mounts(&areas));
    let verify = &host.mounts()[3].tree;
    assert!(verify.find_by_tag(Tag::Button).unwrap().is_disabled());
    let toggle = &host.mounts()[2].tree;
    assert!(toggle.find_by_text("Mark as Incomplete").is_some());
}
