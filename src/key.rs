//! Key bindings with help metadata.
//!
//! A [`Binding`] pairs the key codes that trigger an action with the short
//! help text shown for it. Components expose their bindings through the
//! [`KeyMap`] trait so the help line can be generated rather than hand
//! written.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single action's key binding and its help entry.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger the action.
    pub keys: Vec<KeyCode>,
    /// Modifiers that must be held, `NONE` for plain keys.
    pub modifiers: KeyModifiers,
    help_key: String,
    help_desc: String,
}

impl Binding {
    /// A binding for the given plain key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            modifiers: KeyModifiers::NONE,
            help_key: String::new(),
            help_desc: String::new(),
        }
    }

    /// Requires `modifiers` to be held alongside the key codes.
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the help entry, e.g. `("space", "start/pause")`.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help_key = key.into();
        self.help_desc = desc.into();
        self
    }

    /// Whether the pressed key triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.contains(&key_msg.key) && key_msg.modifiers == self.modifiers
    }

    /// The help column text, as `(key, description)`.
    pub fn help(&self) -> (&str, &str) {
        (&self.help_key, &self.help_desc)
    }
}

/// Bindings a component wants listed on the help line.
pub trait KeyMap {
    /// Bindings for the compact one-line help view, in display order.
    fn short_help(&self) -> Vec<&Binding>;
}
