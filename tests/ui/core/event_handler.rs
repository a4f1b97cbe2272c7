use taskcards::ui::core::{EventHandler, EventType};
use tokio::time::Duration;

#[test]
fn test_event_handler_creation() {
    let _handler = EventHandler::new(Duration::from_millis(50));
    let _default = EventHandler::default();
}

#[test]
fn test_event_type_is_cloneable() {
    let tick = EventType::Tick;
    assert!(matches!(tick.clone(), EventType::Tick));
    assert!(matches!(EventType::Resize(80, 24), EventType::Resize(80, 24)));
}
