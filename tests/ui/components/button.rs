use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use taskcards::style::Theme;
use taskcards::ui::components::button::{button_classes, BASE_STYLES};
use taskcards::ui::components::{Button, ButtonSize, ButtonVariant};
use taskcards::ui::core::{Action, Component, Element, Host, Mount, Node, Tag};

use crate::support::{contains, counting, key, render};

const PRIMARY: &str = "bg-blue-600 text-white hover:bg-blue-700 disabled:bg-gray-400";
const SECONDARY: &str = "bg-gray-200 text-gray-800 hover:bg-gray-300 disabled:bg-gray-100";
const SM: &str = "px-3 py-1.5 text-sm";
const MD: &str = "px-4 py-2 text-base";
const LG: &str = "px-6 py-3 text-lg";

#[test]
fn test_class_order_for_every_variant_and_size() {
    let cases = [
        (ButtonVariant::Primary, ButtonSize::Sm, PRIMARY, SM),
        (ButtonVariant::Primary, ButtonSize::Md, PRIMARY, MD),
        (ButtonVariant::Primary, ButtonSize::Lg, PRIMARY, LG),
        (ButtonVariant::Secondary, ButtonSize::Sm, SECONDARY, SM),
        (ButtonVariant::Secondary, ButtonSize::Md, SECONDARY, MD),
        (ButtonVariant::Secondary, ButtonSize::Lg, SECONDARY, LG),
    ];

    for (variant, size, variant_classes, size_classes) in cases {
        let expected = format!("{BASE_STYLES} {variant_classes} {size_classes}");
        let button = Button::new("x").variant(variant).size(size);
        assert_eq!(button.class_list().as_string(), expected);
        assert_eq!(button.view().classes().as_string(), expected);
        assert_eq!(button_classes(variant, size).as_string(), expected);
    }
}

#[test]
fn test_defaults_end_to_end() {
    let button = Button::new("Go");
    assert_eq!(button.variant, ButtonVariant::Primary);
    assert_eq!(button.size, ButtonSize::Md);

    let element = button.view();
    assert_eq!(element.tag(), Tag::Button);
    assert!(!element.is_disabled());
    assert_eq!(element.text_content(), "Go");
    assert_eq!(
        element.to_markup(),
        format!("<button class=\"{BASE_STYLES} {PRIMARY} {MD}\">Go</button>")
    );

    let buf = render(&button, 20, 5, Theme::Light);
    assert!(contains(&buf, "Go"));
}

#[test]
fn test_click_invokes_handler_once() {
    let (callback, count) = counting(Action::ButtonPressed("Go".to_string()));
    let element = Button::new("Go").on_click(callback).view();

    assert_eq!(element.click(), Action::ButtonPressed("Go".to_string()));
    assert_eq!(count.get(), 1);
}

#[test]
fn test_click_without_handler_is_harmless() {
    let element = Button::new("Go").view();
    assert!(!element.has_click_handler());
    assert_eq!(element.click(), Action::None);
}

#[test]
fn test_disabled_button_never_fires() {
    let (callback, count) = counting(Action::ButtonPressed("Go".to_string()));
    let button = Button::new("Go").on_click(callback).disabled(true);
    let element = button.view();

    assert!(element.is_disabled());
    assert!(!element.is_focusable());
    assert_eq!(element.click(), Action::None);

    // Keyboard cannot reach it either
    let mut host = Host::new(Theme::Light);
    host.mount(vec![Mount::new(Rect::new(0, 0, 20, 5), button.view())]);
    host.focus_next();
    assert!(host.focused().is_none());
    let dispatch = host.dispatch_key(key(KeyCode::Enter));
    assert_eq!(dispatch.action, Action::None);
    assert!(!dispatch.consumed);

    assert_eq!(count.get(), 0);
}

#[test]
fn test_keyboard_activation_of_native_button() {
    let (callback, count) = counting(Action::ButtonPressed("Go".to_string()));
    let mut host = Host::new(Theme::Light);
    host.mount(vec![Mount::new(
        Rect::new(0, 0, 20, 5),
        Button::new("Go").on_click(callback).view(),
    )]);

    host.focus_next();
    let dispatch = host.dispatch_key(key(KeyCode::Enter));
    assert_eq!(dispatch.action, Action::ButtonPressed("Go".to_string()));
    assert!(dispatch.consumed);
    assert!(!dispatch.default_prevented);

    host.dispatch_key(key(KeyCode::Char(' ')));
    assert_eq!(count.get(), 2);
}

#[test]
fn test_rich_children() {
    let button = Button::with_children([Node::from(Element::span().child("Save")), Node::from(" all")]);
    let element = button.view();
    assert_eq!(element.get_children().len(), 2);
    assert_eq!(element.text_content(), "Save all");
}

#[test]
fn test_variant_serde_names() {
    assert_eq!(toml::from_str::<Wrapper>("variant = \"secondary\"\nsize = \"sm\"").unwrap(), Wrapper {
        variant: ButtonVariant::Secondary,
        size: ButtonSize::Sm,
    });
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Wrapper {
    variant: ButtonVariant,
    size: ButtonSize,
}
