//! UI module for taskcards
//!
//! This module holds the components, the host runtime they render into, and
//! the gallery application that drives them.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod paint;
pub mod renderer;

pub use app::App;
pub use layout::LayoutManager;
pub use renderer::run_app;
