//! taskcards - styled task card components for the terminal
//!
//! This library provides a generic button and three task card widgets that
//! render from caller-owned props into an element tree, styled with
//! utility classes and painted through Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`style`] - Utility class parsing and style resolution
//! * [`ui`] - Components, host runtime and the gallery application

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Utility class engine turning class lists into terminal styles
pub mod style;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the components for convenient access
pub use ui::components::{Button, ButtonSize, ButtonVariant, TaskCard, ToggleTaskCard, VerifyTaskCard};
