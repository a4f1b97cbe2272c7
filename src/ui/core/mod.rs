//! Core UI functionality: the host runtime the components render into.
//!
//! # Module Components
//!
//! - [`actions`] - Messages produced by callbacks and shortcuts
//! - [`callback`] - Shareable click and key handlers
//! - [`component`] - The trait every component implements
//! - [`element`] - Declarative element tree
//! - [`event_handler`] - Terminal event polling
//! - [`events`] - Key events with default-prevention
//! - [`host`] - Mounting, focus and dispatch
//!
//! # Architecture
//!
//! 1. **Components** turn props into an [`Element`] tree ([`Component::view`])
//! 2. The [`Host`] paints mounted trees and keeps focus across renders
//! 3. Input is routed to element handlers, which return an [`Action`]
//! 4. The caller applies the action to its own state and renders again

pub mod actions;
pub mod callback;
pub mod component;
pub mod element;
pub mod event_handler;
pub mod events;
pub mod host;

pub use actions::Action;
pub use callback::{Callback, KeyHandler};
pub use component::Component;
pub use element::{Element, Node, Role, Tag};
pub use event_handler::{EventHandler, EventType};
pub use events::KeyInput;
pub use host::{Dispatch, Host, Mount};
