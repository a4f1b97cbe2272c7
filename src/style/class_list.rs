//! Ordered composition of utility class names.

use std::fmt;

/// An ordered list of utility class tokens.
///
/// Fragments are split on whitespace when pushed, so a multi-class string such
/// as `"px-4 py-2 text-base"` contributes three tokens. Order is preserved:
/// later tokens override earlier ones when the list is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every whitespace-separated token of `fragment`.
    pub fn push(&mut self, fragment: &str) {
        self.tokens
            .extend(fragment.split_whitespace().map(str::to_string));
    }

    /// Append `fragment` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, fragment: &str) {
        if condition {
            self.push(fragment);
        }
    }

    /// Builder form of [`ClassList::push`].
    #[must_use]
    pub fn with(mut self, fragment: &str) -> Self {
        self.push(fragment);
        self
    }

    /// Builder form of [`ClassList::push_if`].
    #[must_use]
    pub fn with_if(mut self, condition: bool, fragment: &str) -> Self {
        self.push_if(condition, fragment);
        self
    }

    pub fn extend(&mut self, other: &ClassList) {
        self.tokens.extend(other.tokens.iter().cloned());
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The space-joined class attribute value.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&str> for ClassList {
    fn from(value: &str) -> Self {
        Self::new().with(value)
    }
}

impl From<String> for ClassList {
    fn from(value: String) -> Self {
        Self::new().with(&value)
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for fragment in iter {
            list.push(fragment);
        }
        list
    }
}
