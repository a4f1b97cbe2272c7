/// Messages produced by component callbacks and global shortcuts.
///
/// Components never mutate the state they render; they hand one of these back
/// to the caller, which updates its own state and renders again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    // Component callbacks
    ButtonPressed(String),
    CardActivated,
    StatusChangeRequested(bool),
    VerifyRequested,
    VerifyFinished,

    // UI operations
    ToggleTheme,
    ShowLogs(bool),

    // App control
    Quit,
    #[default]
    None,
}

impl Action {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
