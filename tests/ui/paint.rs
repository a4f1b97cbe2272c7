use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use taskcards::style::{Stylesheet, Theme};
use taskcards::ui::core::{Action, Callback, Element};
use taskcards::ui::paint::{text_width, wrap, Painter, DOT, SPINNER_FRAMES};

use crate::support::{find_text, lines};

fn paint(element: &Element, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let sheet = Stylesheet::new();
    Painter::new(&sheet, Theme::Light).paint(element, area, &mut buf);
    buf
}

#[test]
fn test_block_flow_stacks_children() {
    let element = Element::div().child(Element::paragraph().child("one")).child(Element::paragraph().child("two"));
    let buf = paint(&element, 10, 3);
    let rows = lines(&buf);
    assert!(rows[0].starts_with("one"));
    assert!(rows[1].starts_with("two"));
}

#[test]
fn test_justify_between_pushes_to_edges() {
    let element = Element::div()
        .class("flex justify-between")
        .child(Element::span().child("left"))
        .child(Element::span().child("right"));
    let buf = paint(&element, 20, 1);
    assert_eq!(lines(&buf)[0], "left           right");
}

#[test]
fn test_justify_center_and_text_center() {
    let row = Element::div().class("flex justify-center").child(Element::span().child("mid"));
    assert_eq!(find_text(&paint(&row, 11, 1), "mid"), Some((4, 0)));

    let text = Element::paragraph().class("text-center").child("mid");
    assert_eq!(find_text(&paint(&text, 11, 1), "mid"), Some((4, 0)));
}

#[test]
fn test_max_width_centers_with_auto_margin() {
    let element = Element::div().class("max-w-xs mx-auto border").child("x");
    let buf = paint(&element, 80, 3);
    // 40 columns wide, centered in 80
    assert_eq!(buf[(20, 0)].symbol(), "┌");
    assert_eq!(buf[(59, 0)].symbol(), "┐");
}

#[test]
fn test_text_wraps_inside_padding() {
    let element = Element::div().class("px-2").child("This is a test to verify automation");
    let painter_sheet = Stylesheet::new();
    let painter = Painter::new(&painter_sheet, Theme::Light);
    assert_eq!(painter.measure_height(&element, 14), 4);

    let buf = paint(&element, 14, 4);
    let rows = lines(&buf);
    assert_eq!(rows[0], " This is a    ");
    assert_eq!(rows[3], " automation   ");
}

#[test]
fn test_hidden_elements_are_skipped() {
    let element = Element::div().child(Element::span().class("hidden").child("secret")).child("shown");
    let buf = paint(&element, 10, 2);
    assert!(find_text(&buf, "secret").is_none());
    assert_eq!(find_text(&buf, "shown"), Some((0, 0)));
}

#[test]
fn test_glyphs() {
    let dot = Element::div().class("w-2 h-2 rounded-full bg-green-500 animate-pulse");
    let buf = paint(&dot, 4, 1);
    assert_eq!(buf[(0, 0)].symbol(), DOT);
    assert!(buf[(0, 0)].modifier.contains(Modifier::SLOW_BLINK));

    let spinner = Element::div().class("animate-spin h-4 w-4 rounded-full");
    let sheet = Stylesheet::new();
    for frame in 0..4u64 {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        Painter::new(&sheet, Theme::Light)
            .with_frame(frame)
            .paint(&spinner, buf.area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), SPINNER_FRAMES[frame as usize]);
    }
}

#[test]
fn test_hit_regions_for_interactive_elements() {
    let element = Element::div()
        .child(Element::paragraph().child("text"))
        .child(Element::button().child("Go").on_click(Callback::new(|()| Action::Quit)));
    let area = Rect::new(0, 0, 10, 2);
    let mut buf = Buffer::empty(area);
    let sheet = Stylesheet::new();
    let hits = Painter::new(&sheet, Theme::Light).paint(&element, area, &mut buf);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, vec![1]);
    assert_eq!(hits[0].area, Rect::new(0, 1, 2, 1));
}

#[test]
fn test_painting_is_clipped() {
    let element = Element::div().child("a very long line of text that cannot fit");
    let buf = paint(&element, 5, 1);
    assert_eq!(lines(&buf)[0], "a    ");
    assert_eq!(text_width("Verifying..."), 12);
    assert_eq!(wrap("a b", 1), vec!["a", "b"]);
}
