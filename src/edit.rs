//! Digit-only edit-in-place input for the duration field.
//!
//! A stripped-down cousin of a general text input: the buffer holds at most a
//! two digit minute count. Input is handled as a filtering contract rather
//! than validate-then-reject: a keystroke that would make the buffer invalid
//! is silently swallowed and the buffer stays as it was. The empty buffer is
//! allowed while typing; it simply fails to parse at commit time.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

use crate::mode::{MAX_MINUTES, MIN_MINUTES};

/// Edit buffer model for the minute field.
#[derive(Debug, Clone, Default)]
pub struct Model {
    value: String,
}

impl Model {
    /// An empty edit buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the buffer with the textual form of `minutes`, bypassing the
    /// keystroke filter. Used when the session seeds the buffer on mode
    /// switches and on entering edit.
    pub fn set_minutes(&mut self, minutes: u16) {
        self.value = minutes.to_string();
    }

    /// Applies raw input through the filtering contract.
    ///
    /// Non-digit characters are stripped first. The stripped result replaces
    /// the buffer only when it is empty or parses into the valid minute
    /// range; otherwise the buffer is left untouched and the input vanishes
    /// without an error.
    pub fn set_input(&mut self, raw: &str) {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            self.value.clear();
            return;
        }
        match digits.parse::<u16>() {
            Ok(n) if (MIN_MINUTES..=MAX_MINUTES).contains(&n) => self.value = digits,
            _ => {}
        }
    }

    /// Routes a key press into the buffer. Characters append through the
    /// filter, backspace removes the last digit. Everything else is ignored.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) {
        match key_msg.key {
            KeyCode::Char(c) => {
                let mut proposed = self.value.clone();
                proposed.push(c);
                self.set_input(&proposed);
            }
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
    }

    /// The buffer parsed as minutes, if it holds a value in range.
    pub fn minutes(&self) -> Option<u16> {
        match self.value.parse::<u16>() {
            Ok(n) if (MIN_MINUTES..=MAX_MINUTES).contains(&n) => Some(n),
            _ => None,
        }
    }

    /// Renders the buffer with a trailing block cursor.
    pub fn view(&self) -> String {
        format!("{}█", self.value)
    }
}
