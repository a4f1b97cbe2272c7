//! Mounting element trees and routing input into them.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect};

use super::actions::Action;
use super::element::{Element, Tag};
use super::events::KeyInput;
use crate::style::{Stylesheet, Theme};
use crate::ui::paint::{HitRegion, Painter};

/// A tree placed in a screen area.
#[derive(Debug, Clone)]
pub struct Mount {
    pub area: Rect,
    pub tree: Element,
}

impl Mount {
    #[must_use]
    pub fn new(area: Rect, tree: Element) -> Self {
        Self { area, tree }
    }
}

/// Outcome of routing one input event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub action: Action,
    /// A handler called `prevent_default` on the key event.
    pub default_prevented: bool,
    /// The host or a handler dealt with the event; it must not bubble to
    /// application shortcuts.
    pub consumed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FocusTarget {
    mount: usize,
    path: Vec<usize>,
}

/// Host runtime for mounted trees: painting, focus and event dispatch.
#[derive(Debug)]
pub struct Host {
    mounts: Vec<Mount>,
    focusables: Vec<FocusTarget>,
    focus: Option<FocusTarget>,
    hits: Vec<(usize, HitRegion)>,
    sheet: Stylesheet,
    theme: Theme,
    frame: u64,
}

impl Host {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            mounts: Vec::new(),
            focusables: Vec::new(),
            focus: None,
            hits: Vec::new(),
            sheet: Stylesheet::new(),
            theme,
            frame: 0,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Replace all mounted trees. Focus stays on the same element (mount and
    /// path) while it is still focusable, otherwise it is dropped. Hit regions
    /// from the previous render are discarded.
    pub fn mount(&mut self, mounts: Vec<Mount>) {
        self.focusables = mounts
            .iter()
            .enumerate()
            .flat_map(|(mount, m)| {
                m.tree
                    .focusable_paths()
                    .into_iter()
                    .map(move |path| FocusTarget { mount, path })
            })
            .collect();
        self.mounts = mounts;
        self.hits.clear();
        let lost = self.focus.as_ref().is_some_and(|target| !self.focusables.contains(target));
        if lost {
            log::debug!("Focused element {:?} is no longer focusable", self.focus);
            self.focus = None;
        }
    }

    #[must_use]
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    /// Paint every mount into `buf` and remember the interactive regions.
    pub fn render(&mut self, buf: &mut Buffer) {
        self.hits.clear();
        for (index, mount) in self.mounts.iter().enumerate() {
            let focused = self
                .focus
                .as_ref()
                .filter(|target| target.mount == index)
                .map(|target| target.path.as_slice());
            let painter = Painter::new(&self.sheet, self.theme)
                .with_frame(self.frame)
                .with_focus(focused);
            let regions = painter.paint(&mount.tree, mount.area, buf);
            self.hits.extend(regions.into_iter().map(|region| (index, region)));
        }
    }

    #[must_use]
    pub fn focus_index(&self) -> Option<usize> {
        let focus = self.focus.as_ref()?;
        self.focusables.iter().position(|target| target == focus)
    }

    #[must_use]
    pub fn focused(&self) -> Option<&Element> {
        let target = self.focus.as_ref()?;
        self.mounts.get(target.mount)?.tree.at_path(&target.path)
    }

    pub fn focus_next(&mut self) {
        if self.focusables.is_empty() {
            return;
        }
        let next = match self.focus_index() {
            Some(index) => (index + 1) % self.focusables.len(),
            None => 0,
        };
        self.focus_ordinal(next);
    }

    pub fn focus_previous(&mut self) {
        if self.focusables.is_empty() {
            return;
        }
        let len = self.focusables.len();
        let previous = match self.focus_index() {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.focus_ordinal(previous);
    }

    fn focus_ordinal(&mut self, ordinal: usize) {
        self.focus = self.focusables.get(ordinal).cloned();
        log::debug!("Focus moved to {:?}", self.focus);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    /// Route a key press.
    ///
    /// Tab and BackTab move focus. Other keys go to the focused element's key
    /// handler; unless it prevents the default, Enter or Space on an enabled
    /// native button clicks it.
    pub fn dispatch_key(&mut self, key: KeyEvent) -> Dispatch {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return Dispatch {
                    consumed: true,
                    ..Dispatch::default()
                };
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return Dispatch {
                    consumed: true,
                    ..Dispatch::default()
                };
            }
            _ => {}
        }

        let Some(element) = self.focused() else {
            return Dispatch::default();
        };

        let mut input = KeyInput::new(key);
        let mut action = element.key_down(&mut input);
        let default_prevented = input.is_default_prevented();
        let mut consumed = default_prevented || !action.is_none();

        if !default_prevented && input.is_activation() && element.tag() == Tag::Button && !element.is_disabled() {
            action = element.click();
            consumed = true;
        }

        Dispatch {
            action,
            default_prevented,
            consumed,
        }
    }

    /// Route a mouse event. A left press clicks the innermost interactive
    /// element under the pointer and focuses it when focusable.
    pub fn dispatch_mouse(&mut self, event: MouseEvent) -> Dispatch {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return Dispatch::default();
        }

        let Some((mount, path)) = self.hit_test(event.column, event.row) else {
            return Dispatch::default();
        };

        let target = FocusTarget { mount, path };
        let action = self
            .mounts
            .get(target.mount)
            .and_then(|m| m.tree.at_path(&target.path))
            .map(Element::click)
            .unwrap_or_default();

        if self.focusables.contains(&target) {
            self.focus = Some(target);
        }

        Dispatch {
            action,
            default_prevented: false,
            consumed: true,
        }
    }

    /// Innermost interactive element at a screen position.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(usize, Vec<usize>)> {
        self.hits
            .iter()
            .filter(|(_, region)| {
                let area = region.area;
                column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
            })
            .max_by_key(|(_, region)| region.path.len())
            .map(|(mount, region)| (*mount, region.path.clone()))
    }
}
