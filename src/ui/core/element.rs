//! Declarative element tree produced by components.
//!
//! An [`Element`] carries what a browser node would: a tag, utility classes,
//! the accessibility attributes the components care about, children and event
//! handlers. Trees are rebuilt from props on every render and never mutated
//! by event dispatch.

use std::fmt::Write as _;

use super::actions::Action;
use super::callback::{Callback, KeyHandler};
use super::events::KeyInput;
use crate::style::ClassList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Button,
    Heading,
    Paragraph,
    Span,
}

impl Tag {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Button => "button",
            Self::Heading => "h3",
            Self::Paragraph => "p",
            Self::Span => "span",
        }
    }

    /// Inline elements size to their content instead of filling the row.
    #[must_use]
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Button | Self::Span)
    }
}

/// Semantic role exposed on non-native interactive elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Status,
}

impl Role {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Status => "status",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: Tag,
    classes: ClassList,
    role: Option<Role>,
    tab_index: Option<i32>,
    aria_label: Option<String>,
    disabled: bool,
    children: Vec<Node>,
    on_click: Option<Callback>,
    on_key_down: Option<KeyHandler>,
}

impl Element {
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            role: None,
            tab_index: None,
            aria_label: None,
            disabled: false,
            children: Vec::new(),
            on_click: None,
            on_key_down: None,
        }
    }

    #[must_use]
    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    #[must_use]
    pub fn button() -> Self {
        Self::new(Tag::Button)
    }

    #[must_use]
    pub fn heading() -> Self {
        Self::new(Tag::Heading)
    }

    #[must_use]
    pub fn paragraph() -> Self {
        Self::new(Tag::Paragraph)
    }

    #[must_use]
    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    /// Append classes after any already present.
    #[must_use]
    pub fn class(mut self, classes: impl Into<ClassList>) -> Self {
        self.classes.extend(&classes.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn tab_index(mut self, index: i32) -> Self {
        self.tab_index = Some(index);
        self
    }

    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn on_click(mut self, callback: Callback) -> Self {
        self.on_click = Some(callback);
        self
    }

    #[must_use]
    pub fn on_key_down(mut self, handler: KeyHandler) -> Self {
        self.on_key_down = Some(handler);
        self
    }

    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    #[must_use]
    pub fn get_role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn get_tab_index(&self) -> Option<i32> {
        self.tab_index
    }

    #[must_use]
    pub fn get_aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn get_children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    #[must_use]
    pub fn has_key_handler(&self) -> bool {
        self.on_key_down.is_some()
    }

    /// Reachable with Tab: an explicit non-negative tabindex, or an enabled
    /// native button without one.
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        match self.tab_index {
            Some(index) => index >= 0 && !self.disabled,
            None => self.tag == Tag::Button && !self.disabled,
        }
    }

    /// Pointer activation. Disabled elements swallow the click.
    pub fn click(&self) -> Action {
        if self.disabled {
            log::debug!("Ignoring click on disabled <{}>", self.tag.name());
            return Action::None;
        }
        match &self.on_click {
            Some(callback) => callback.emit(()),
            None => Action::None,
        }
    }

    /// Deliver a key press to this element's key handler.
    pub fn key_down(&self, input: &mut KeyInput) -> Action {
        match &self.on_key_down {
            Some(handler) => handler.handle(input),
            None => Action::None,
        }
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Depth-first search including `self`.
    pub fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|child| child.find(predicate))
    }

    /// Every matching element in document order, `self` included.
    pub fn find_all<P>(&self, predicate: P) -> Vec<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a, P>(&'a self, predicate: P, found: &mut Vec<&'a Element>)
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children.iter().filter_map(Node::as_element) {
            child.collect_matching(predicate, found);
        }
    }

    #[must_use]
    pub fn find_by_tag(&self, tag: Tag) -> Option<&Element> {
        self.find(|e| e.tag == tag)
    }

    #[must_use]
    pub fn find_by_role(&self, role: Role) -> Option<&Element> {
        self.find(|e| e.role == Some(role))
    }

    /// Innermost element whose text content equals `text`.
    #[must_use]
    pub fn find_by_text(&self, text: &str) -> Option<&Element> {
        self.find_all(|e| e.text_content() == text).into_iter().last()
    }

    /// Follow child indexes (positions in the children list) from `self`.
    #[must_use]
    pub fn at_path(&self, path: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &index in path {
            current = current.children.get(index)?.as_element()?;
        }
        Some(current)
    }

    /// Paths of focusable elements in document order.
    #[must_use]
    pub fn focusable_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        self.collect_focusable(&mut current, &mut paths);
        paths
    }

    fn collect_focusable(&self, current: &mut Vec<usize>, paths: &mut Vec<Vec<usize>>) {
        if self.is_focusable() {
            paths.push(current.clone());
        }
        for (index, child) in self.children.iter().enumerate() {
            if let Node::Element(element) = child {
                current.push(index);
                element.collect_focusable(current, paths);
                current.pop();
            }
        }
    }

    /// HTML-like serialization, handlers omitted.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let name = self.tag.name();
        let _ = write!(out, "<{name}");
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.as_string()));
        }
        if let Some(role) = self.role {
            let _ = write!(out, " role=\"{}\"", role.name());
        }
        if let Some(index) = self.tab_index {
            let _ = write!(out, " tabindex=\"{index}\"");
        }
        if let Some(label) = &self.aria_label {
            let _ = write!(out, " aria-label=\"{}\"", escape(label));
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(element) => element.write_markup(out),
            }
        }
        let _ = write!(out, "</{name}>");
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
