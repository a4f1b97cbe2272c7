use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press travelling through the element tree.
///
/// Handlers call [`KeyInput::prevent_default`] to stop the host from applying
/// its own behaviour for the key (native button activation, global shortcuts).
#[derive(Debug, Clone)]
pub struct KeyInput {
    key: KeyEvent,
    default_prevented: bool,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: KeyEvent) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    #[must_use]
    pub fn from_code(code: KeyCode) -> Self {
        Self::new(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[must_use]
    pub fn key(&self) -> KeyEvent {
        self.key
    }

    #[must_use]
    pub fn code(&self) -> KeyCode {
        self.key.code
    }

    /// Enter or Space.
    #[must_use]
    pub fn is_activation(&self) -> bool {
        matches!(self.key.code, KeyCode::Enter | KeyCode::Char(' '))
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
