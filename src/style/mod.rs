//! Utility-class styling.
//!
//! Components describe their look as ordered lists of utility classes
//! (`bg-blue-600 text-white px-4 py-2`). This module composes those lists
//! ([`ClassList`]), decodes individual classes ([`ParsedClass`]) and resolves
//! a list against the element's state into a [`ComputedStyle`] the painter
//! can draw with.

pub mod class_list;
pub mod error;
pub mod palette;
pub mod sheet;
pub mod theme;
pub mod utility;

pub use class_list::ClassList;
pub use error::StyleError;
pub use sheet::{ComputedStyle, Edges, ElementState, Stylesheet};
pub use theme::Theme;
pub use utility::{ParsedClass, Utility, Variant};
