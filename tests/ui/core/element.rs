use crossterm::event::KeyCode;
use taskcards::ui::core::{Action, Callback, Element, KeyHandler, KeyInput, Node, Role, Tag};

fn sample() -> Element {
    Element::div()
        .class("p-4")
        .child(Element::heading().child("Title"))
        .child(
            Element::div()
                .child(Element::span().child("a"))
                .child(Element::button().child("Go").on_click(Callback::new(|()| Action::Quit))),
        )
        .child(Element::button().disabled(true).child("Off"))
}

#[test]
fn test_builder_and_getters() {
    let element = Element::div()
        .class("a b")
        .class("c")
        .role(Role::Button)
        .tab_index(0)
        .aria_label("label");
    assert_eq!(element.tag(), Tag::Div);
    assert_eq!(element.classes().as_string(), "a b c");
    assert_eq!(element.get_role(), Some(Role::Button));
    assert_eq!(element.get_tab_index(), Some(0));
    assert_eq!(element.get_aria_label(), Some("label"));
    assert!(!element.is_disabled());
}

#[test]
fn test_text_content_concatenates_descendants() {
    assert_eq!(sample().text_content(), "TitleaGoOff");
}

#[test]
fn test_queries() {
    let tree = sample();
    assert_eq!(tree.find_by_tag(Tag::Heading).unwrap().text_content(), "Title");
    assert_eq!(tree.find_by_text("Go").unwrap().tag(), Tag::Button);
    assert!(tree.find_by_role(Role::Status).is_none());
    assert_eq!(tree.find_all(|e| e.tag() == Tag::Button).len(), 2);
    assert_eq!(tree.at_path(&[1, 0]).unwrap().text_content(), "a");
    assert!(tree.at_path(&[0, 0]).is_none());
}

#[test]
fn test_focusable_paths_skip_disabled() {
    assert_eq!(sample().focusable_paths(), vec![vec![1, 1]]);

    let negative = Element::div().tab_index(-1);
    assert!(!negative.is_focusable());
    let explicit = Element::div().tab_index(0);
    assert!(explicit.is_focusable());
}

#[test]
fn test_key_handler_can_prevent_default() {
    let element = Element::div().on_key_down(KeyHandler::new(|input: &mut KeyInput| {
        input.prevent_default();
        Action::ToggleTheme
    }));
    let mut input = KeyInput::from_code(KeyCode::Char('t'));
    assert_eq!(element.key_down(&mut input), Action::ToggleTheme);
    assert!(input.is_default_prevented());
}

#[test]
fn test_markup_escapes_text() {
    let element = Element::paragraph()
        .class("text-sm")
        .aria_label("a \"b\"")
        .child("<x> & y");
    assert_eq!(
        element.to_markup(),
        "<p class=\"text-sm\" aria-label=\"a &quot;b&quot;\">&lt;x&gt; &amp; y</p>"
    );

    let disabled = Element::button().disabled(true).child(Node::from("Off"));
    assert_eq!(disabled.to_markup(), "<button disabled>Off</button>");
}
