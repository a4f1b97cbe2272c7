use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use taskcards::style::palette::lookup;
use taskcards::style::Theme;
use taskcards::ui::components::task_card::{indicator_classes, status_label};
use taskcards::ui::components::TaskCard;
use taskcards::ui::core::{Action, Component, Host, KeyInput, Mount, Role};
use taskcards::ui::paint::DOT;

use crate::support::{contains, counting, find_text, key, left_click, render};

#[test]
fn test_defaults() {
    let card = TaskCard::new();
    assert_eq!(card.title, "Test Task");
    assert_eq!(card.description, "This is a test to verify automation");
    assert!(!card.is_completed);
    assert!(card.class_name.is_empty());
    assert!(card.on_click.is_none());
}

#[test]
fn test_label_is_pure_function_of_completion() {
    assert_eq!(status_label(true), "Completed");
    assert_eq!(status_label(false), "In Progress");

    for completed in [true, false] {
        let view = TaskCard::new().completed(completed).view();
        let dot = view.find(|e| e.get_aria_label().is_some()).unwrap();
        assert_eq!(dot.get_aria_label(), Some(status_label(completed)));
        assert!(view.find_by_text(status_label(completed)).is_some());
        assert!(view.find_by_text(status_label(!completed)).is_none());
    }
}

#[test]
fn test_indicator_colors() {
    assert!(indicator_classes(true).contains("bg-green-500"));
    assert!(indicator_classes(true).contains("dark:bg-green-400"));
    assert!(indicator_classes(false).contains("bg-yellow-500"));
    assert!(!indicator_classes(false).contains("bg-green-500"));
}

#[test]
fn test_not_interactive_without_handler() {
    let view = TaskCard::new().completed(true).view();

    assert_eq!(view.get_role(), None);
    assert_eq!(view.get_tab_index(), None);
    assert!(!view.has_click_handler());
    assert!(!view.has_key_handler());
    assert!(view.focusable_paths().is_empty());
    assert!(!view.classes().contains("cursor-pointer"));

    let mut input = KeyInput::from_code(KeyCode::Enter);
    assert_eq!(view.key_down(&mut input), Action::None);
    assert!(!input.is_default_prevented());
}

#[test]
fn test_interactive_with_handler() {
    let (callback, _) = counting(Action::CardActivated);
    let view = TaskCard::new().on_click(callback).view();

    assert_eq!(view.get_role(), Some(Role::Button));
    assert_eq!(view.get_tab_index(), Some(0));
    assert!(view.is_focusable());
    assert!(view.classes().contains("cursor-pointer"));
    assert!(view.classes().contains("hover:bg-gray-50"));
}

#[test]
fn test_class_name_is_appended_last() {
    let (callback, _) = counting(Action::CardActivated);
    let classes = TaskCard::new().class_name("mt-8 extra").on_click(callback).container_classes();
    let tokens: Vec<&str> = classes.iter().collect();
    assert_eq!(&tokens[tokens.len() - 2..], ["mt-8", "extra"]);

    let plain = TaskCard::new().container_classes();
    assert!(plain.as_string().starts_with("max-w-md mx-auto p-6"));
}

#[test]
fn test_enter_and_space_activate_once_with_default_prevented() {
    for code in [KeyCode::Enter, KeyCode::Char(' ')] {
        let (callback, count) = counting(Action::CardActivated);
        let view = TaskCard::new().on_click(callback).view();

        let mut input = KeyInput::from_code(code);
        assert_eq!(view.key_down(&mut input), Action::CardActivated);
        assert!(input.is_default_prevented());
        assert_eq!(count.get(), 1);
    }
}

#[test]
fn test_other_keys_do_nothing() {
    let (callback, count) = counting(Action::CardActivated);
    let view = TaskCard::new().on_click(callback).view();

    let mut input = KeyInput::from_code(KeyCode::Char('x'));
    assert_eq!(view.key_down(&mut input), Action::None);
    assert!(!input.is_default_prevented());
    assert_eq!(count.get(), 0);
}

#[test]
fn test_host_keyboard_activation_does_not_double_fire() {
    let (callback, count) = counting(Action::CardActivated);
    let mut host = Host::new(Theme::Light);
    host.mount(vec![Mount::new(Rect::new(0, 0, 80, 20), TaskCard::new().on_click(callback).view())]);

    host.focus_next();
    let dispatch = host.dispatch_key(key(KeyCode::Enter));
    assert_eq!(dispatch.action, Action::CardActivated);
    assert!(dispatch.default_prevented);
    assert!(dispatch.consumed);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_mouse_click_activates_card() {
    let (callback, count) = counting(Action::CardActivated);
    let mut host = Host::new(Theme::Light);
    host.mount(vec![Mount::new(Rect::new(0, 0, 80, 20), TaskCard::new().on_click(callback).view())]);
    let mut buf = ratatui::buffer::Buffer::empty(Rect::new(0, 0, 80, 20));
    host.render(&mut buf);

    let (x, y) = find_text(&buf, "Test Task").unwrap();
    let dispatch = host.dispatch_mouse(left_click(x, y));
    assert_eq!(dispatch.action, Action::CardActivated);
    assert_eq!(count.get(), 1);
    assert_eq!(host.focus_index(), Some(0));
}

#[test]
fn test_render_completed_card() {
    let card = TaskCard::new().completed(true);
    let buf = render(&card, 80, 20, Theme::Light);

    assert!(contains(&buf, "Test Task"));
    assert!(contains(&buf, "This is a test to verify automation"));
    assert!(contains(&buf, "Completed"));
    assert!(contains(&buf, "Automation Test"));
    assert!(contains(&buf, "Active"));

    // The status dot is drawn in green
    let (x, y) = find_text(&buf, "Completed").unwrap();
    let dot = (0..x).rev().find(|&cx| buf[(cx, y)].symbol() == DOT).unwrap();
    assert_eq!(buf[(dot, y)].fg, lookup("green", 500).unwrap());
}

#[test]
fn test_render_in_progress_card_dark() {
    let buf = render(&TaskCard::new(), 80, 20, Theme::Dark);
    let (x, y) = find_text(&buf, "In Progress").unwrap();
    let dot = (0..x).rev().find(|&cx| buf[(cx, y)].symbol() == DOT).unwrap();
    assert_eq!(buf[(dot, y)].fg, lookup("yellow", 400).unwrap());
}

#[test]
fn test_oversized_class_name_spacing_renders() {
    // Out of range: skipped, the card renders as usual
    let buf = render(&TaskCard::new().class_name("p-40000"), 80, 20, Theme::Light);
    assert!(contains(&buf, "Test Task"));

    // In range but larger than the screen: layout saturates instead of wrapping
    let card = TaskCard::new().class_name("p-32767 m-32767 space-y-32767 space-x-32767");
    let buf = render(&card, 80, 20, Theme::Light);
    assert_eq!(buf.area, Rect::new(0, 0, 80, 20));
}
