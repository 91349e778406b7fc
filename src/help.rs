//! Compact one-line help view generated from key bindings.

use lipgloss_extras::lipgloss::Style;

use crate::key::KeyMap;

/// Styles for the three parts of a help entry.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for key names.
    pub key: Style,
    /// Style for descriptions.
    pub desc: Style,
    /// Style for the separator between entries.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            key: Style::new(),
            desc: Style::new(),
            separator: Style::new(),
        }
    }
}

/// Renderer for the short help line.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Styling applied while rendering.
    pub styles: Styles,
}

impl Model {
    /// A help renderer using the given styles.
    pub fn new(styles: Styles) -> Self {
        Self { styles }
    }

    /// Renders the keymap's short help as `key desc • key desc • …`.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        let separator = self.styles.separator.clone().inline(true).render(" • ");
        let mut line = String::new();
        for binding in keymap.short_help() {
            let (key, desc) = binding.help();
            if key.is_empty() {
                continue;
            }
            if !line.is_empty() {
                line.push_str(&separator);
            }
            line.push_str(&self.styles.key.clone().inline(true).render(key));
            line.push(' ');
            line.push_str(&self.styles.desc.clone().inline(true).render(desc));
        }
        line
    }
}
