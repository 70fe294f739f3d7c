//! Display surfaces the calculator writes to.

/// Text shown when there is nothing else to show.
pub const ZERO_TEXT: &str = "0";

/// Text shown after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

/// Write-only sink for the calculator's display text.
///
/// The engine calls [`Surface::show`] after every operation with either a
/// decimal string or [`ERROR_TEXT`].
pub trait Surface {
    fn show(&mut self, text: &str);
}

/// Surface that discards everything; callers read
/// [`Calculator::display`](super::Calculator::display) instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Surface for Headless {
    fn show(&mut self, _text: &str) {}
}

/// Records every write, oldest first.
impl Surface for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }
}
