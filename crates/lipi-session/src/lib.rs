//! Stateful editing session around the pure transliterator.
//!
//! `Session` owns what a text-box frontend needs (current input, last output,
//! live/manual mode) and re-runs the full transform whenever the output has to
//! change. It never touches the clipboard or renders anything.

mod response;

#[cfg(test)]
mod tests;

use tracing::{debug_span, warn};

use lipi_core::settings::Example;
use lipi_core::unicode::char_count;
use lipi_core::{Scheme, Transliterator};

pub use response::{Counts, Response};

/// A user-facing operation on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The input box now holds this text.
    Input(String),
    /// Toggle live transliteration.
    SetAuto(bool),
    /// Explicit "transliterate" request.
    Transliterate,
    Clear,
    /// Replace the input with a preset and transliterate it.
    LoadExample(Example),
}

pub struct Session<'s> {
    /// `None` when no scheme could be loaded; output then mirrors the input.
    engine: Option<Transliterator<'s>>,
    auto: bool,
    input: String,
    output: String,
    warned_missing_scheme: bool,
}

impl<'s> Session<'s> {
    pub fn new(scheme: Option<&'s Scheme>) -> Self {
        Self {
            engine: scheme.map(Transliterator::new),
            auto: lipi_core::settings::settings().session.auto_transliterate,
            input: String::new(),
            output: String::new(),
            warned_missing_scheme: false,
        }
    }

    pub fn handle(&mut self, action: Action) -> Response {
        let _span = debug_span!("handle_action", ?action).entered();
        let before = self.output.clone();
        match action {
            Action::Input(text) => self.set_input(text),
            Action::SetAuto(enabled) => self.set_auto(enabled),
            Action::Transliterate => self.transliterate_now(),
            Action::Clear => self.clear(),
            Action::LoadExample(example) => self.load_example(&example),
        }
        Response {
            output_changed: before != self.output,
            counts: self.counts(),
        }
    }

    /// Store new input; retransliterates only in live mode.
    pub fn set_input(&mut self, text: String) {
        self.input = text;
        if self.auto {
            self.refresh();
        }
    }

    /// Switching live mode on refreshes whatever is already typed.
    pub fn set_auto(&mut self, enabled: bool) {
        let refresh = enabled && !self.auto && !self.input.is_empty();
        self.auto = enabled;
        if refresh {
            self.refresh();
        }
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn transliterate_now(&mut self) {
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    /// Presets always transliterate, regardless of live mode.
    pub fn load_example(&mut self, example: &Example) {
        self.input = example.text.clone();
        self.refresh();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn counts(&self) -> Counts {
        Counts {
            input_chars: char_count(&self.input),
            output_chars: char_count(&self.output),
        }
    }

    fn refresh(&mut self) {
        self.output = match &self.engine {
            Some(engine) => engine.transliterate(&self.input),
            None => {
                if !self.warned_missing_scheme {
                    warn!("no transliteration scheme loaded, passing input through");
                    self.warned_missing_scheme = true;
                }
                self.input.clone()
            }
        };
    }
}
