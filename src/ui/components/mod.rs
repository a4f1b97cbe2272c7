//! Reusable UI components

// Styled components
pub mod button;
pub mod task_card;
pub mod toggle_task_card;
pub mod verify_task_card;

// Gallery chrome
pub mod log_panel;
pub mod status_bar;

// Component exports
pub use button::{Button, ButtonSize, ButtonVariant};
pub use log_panel::LogPanel;
pub use status_bar::StatusBar;
pub use task_card::TaskCard;
pub use toggle_task_card::ToggleTaskCard;
pub use verify_task_card::VerifyTaskCard;
