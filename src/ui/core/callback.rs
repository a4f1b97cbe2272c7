use std::fmt;
use std::rc::Rc;

use super::actions::Action;
use super::events::KeyInput;

/// A shareable event callback taking `In` and producing an [`Action`].
///
/// Cloning is cheap; clones invoke the same closure.
pub struct Callback<In = ()> {
    func: Rc<dyn Fn(In) -> Action>,
}

impl<In> Callback<In> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(In) -> Action + 'static,
    {
        Self { func: Rc::new(func) }
    }

    /// Invoke the callback.
    pub fn emit(&self, input: In) -> Action {
        (self.func)(input)
    }
}

impl<In> Clone for Callback<In> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<In> fmt::Debug for Callback<In> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<In, F> From<F> for Callback<In>
where
    F: Fn(In) -> Action + 'static,
{
    fn from(func: F) -> Self {
        Self::new(func)
    }
}

/// A key-down handler. It may mark the event default-prevented.
#[derive(Clone)]
pub struct KeyHandler {
    func: Rc<dyn Fn(&mut KeyInput) -> Action>,
}

impl KeyHandler {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&mut KeyInput) -> Action + 'static,
    {
        Self { func: Rc::new(func) }
    }

    pub fn handle(&self, input: &mut KeyInput) -> Action {
        (self.func)(input)
    }
}

impl fmt::Debug for KeyHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyHandler(..)")
    }
}
