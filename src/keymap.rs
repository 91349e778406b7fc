//! The application's key bindings.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::key::{Binding, KeyMap};

/// Every key the app responds to, with help text for the footer.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    /// Select deep work.
    pub deep_work: Binding,
    /// Select a short break.
    pub short_break: Binding,
    /// Select a long break.
    pub long_break: Binding,
    /// Start or pause the countdown.
    pub toggle: Binding,
    /// Reset the countdown to the configured duration.
    pub reset: Binding,
    /// Edit the duration in place.
    pub edit: Binding,
    /// Commit the duration being edited.
    pub commit: Binding,
    /// Leave edit mode, committing like losing focus would.
    pub blur: Binding,
    /// Toggle light/dark theme.
    pub theme: Binding,
    /// Quit.
    pub quit: Binding,
    /// Force quit.
    pub force_quit: Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            deep_work: Binding::new(vec![KeyCode::Char('1')]).with_help("1/2/3", "mode"),
            short_break: Binding::new(vec![KeyCode::Char('2')]),
            long_break: Binding::new(vec![KeyCode::Char('3')]),
            toggle: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start/pause"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            edit: Binding::new(vec![KeyCode::Char('e')]).with_help("e", "edit minutes"),
            commit: Binding::new(vec![KeyCode::Enter]),
            blur: Binding::new(vec![KeyCode::Esc]),
            theme: Binding::new(vec![KeyCode::Char('t')]).with_help("t", "theme"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: Binding::new(vec![KeyCode::Char('c')])
                .with_modifiers(KeyModifiers::CONTROL),
        }
    }
}

impl KeyMap for AppKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.deep_work,
            &self.toggle,
            &self.reset,
            &self.edit,
            &self.theme,
            &self.quit,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;

    #[test]
    fn test_mode_keys_are_distinct() {
        let keymap = AppKeyMap::default();
        let press = KeyMsg {
            key: KeyCode::Char('2'),
            modifiers: KeyModifiers::NONE,
        };
        assert!(!keymap.deep_work.matches(&press));
        assert!(keymap.short_break.matches(&press));
        assert!(!keymap.long_break.matches(&press));
    }

    #[test]
    fn test_short_help_has_labels() {
        let keymap = AppKeyMap::default();
        for binding in keymap.short_help() {
            assert!(!binding.help().0.is_empty());
        }
    }
}
