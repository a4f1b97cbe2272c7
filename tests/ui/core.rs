#[path = "core/actions.rs"]
mod actions;

#[path = "core/element.rs"]
mod element;

#[path = "core/event_handler.rs"]
mod event_handler;
