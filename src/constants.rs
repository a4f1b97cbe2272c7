//! Constants used throughout the application
//!
//! This module centralizes UI text, defaults and limits.

// Task card defaults
pub const DEFAULT_TASK_TITLE: &str = "Test Task";
pub const DEFAULT_TASK_DESCRIPTION: &str = "This is a test to verify automation";

// Status labels
pub const LABEL_COMPLETED: &str = "Completed";
pub const LABEL_IN_PROGRESS: &str = "In Progress";
pub const LABEL_STATUS: &str = "Status:";
pub const LABEL_AUTOMATION_TEST: &str = "Automation Test";
pub const LABEL_ACTIVE: &str = "Active";
pub const LABEL_AUTOMATION_VERIFIED: &str = "Automation Verified";
pub const LABEL_READY_FOR_VERIFICATION: &str = "Ready for verification";

// Button labels
pub const BUTTON_MARK_COMPLETE: &str = "Mark as Complete";
pub const BUTTON_MARK_INCOMPLETE: &str = "Mark as Incomplete";
pub const BUTTON_VERIFY: &str = "Verify Automation";
pub const BUTTON_VERIFYING: &str = "Verifying...";

// Gallery
pub const GALLERY_TITLE: &str = "taskcards";
pub const GALLERY_HINTS: &str = "Tab: focus • Enter/Space: activate • t: theme • g: logs • q: quit";
pub const LOG_PANEL_TITLE: &str = "Logs";
pub const STATUS_VERIFYING: &str = "Verifying automation...";
pub const STATUS_VERIFIED: &str = "✅ Automation verified";

// Config
pub const CONFIG_FILE_NAME: &str = "taskcards.toml";
pub const CONFIG_DIR_NAME: &str = "taskcards";
pub const CONFIG_GENERATED: &str = "Generated default configuration";
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
pub const VERIFY_DELAY_DEFAULT_MS: u64 = 1500;
pub const VERIFY_DELAY_MAX_MS: u64 = 60_000;

// Logging
pub const LOG_FILE_NAME: &str = "taskcards.log";
pub const LOG_BUFFER_LIMIT: usize = 500;
