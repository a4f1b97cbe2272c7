#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect};
use taskcards::style::{Stylesheet, Theme};
use taskcards::ui::core::{Action, Callback, Component};
use taskcards::ui::paint::Painter;

/// A callback counting its invocations.
pub fn counting(action: Action) -> (Callback, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let calls = Rc::clone(&count);
    let callback = Callback::new(move |()| {
        calls.set(calls.get() + 1);
        action.clone()
    });
    (callback, count)
}

/// A callback recording every value it receives.
pub fn recording() -> (Callback<bool>, Rc<RefCell<Vec<bool>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let callback = Callback::new(move |value: bool| {
        log.borrow_mut().push(value);
        Action::StatusChangeRequested(value)
    });
    (callback, seen)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Paint a component into a fresh buffer.
pub fn render(component: &impl Component, width: u16, height: u16, theme: Theme) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let sheet = Stylesheet::new();
    component.render(&mut buf, area, &Painter::new(&sheet, theme));
    buf
}

/// Buffer rows as strings.
pub fn lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Position of the first cell where `text` starts.
pub fn find_text(buf: &Buffer, text: &str) -> Option<(u16, u16)> {
    let area = buf.area;
    let len = text.chars().count() as u16;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right().saturating_sub(len - 1) {
            let candidate: String = (x..x + len).map(|cx| buf[(cx, y)].symbol()).collect();
            if candidate == text {
                return Some((x, y));
            }
        }
    }
    None
}

pub fn contains(buf: &Buffer, text: &str) -> bool {
    find_text(buf, text).is_some()
}
