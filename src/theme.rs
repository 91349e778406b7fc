//! Light and dark presentation palettes.
//!
//! The theme is presentation-only state owned by the app; flipping it never
//! touches the timer. Each theme maps to a [`Styles`] set built once per
//! toggle and used by the view.

use lipgloss_extras::lipgloss::{Color, Style};

use crate::help;

/// The two presentation themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark text on the terminal's light background.
    Light,
    /// Light text on the terminal's dark background.
    Dark,
}

impl Theme {
    /// Flips to the other theme.
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    /// The indicator shown in the title bar.
    pub fn badge(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }

    /// The style set for this theme.
    pub fn styles(&self) -> Styles {
        let (primary, muted, subtle, separator) = match self {
            Theme::Light => ("#2D2D2D", "#6B7280", "#B2B2B2", "#DDDADA"),
            Theme::Dark => ("#FFFFFF", "#D1D5DB", "#6B7280", "#3C3C3C"),
        };

        Styles {
            title: Style::new().bold(true).foreground(Color::from(primary)),
            tab: Style::new().foreground(Color::from(muted)).padding(0, 1, 0, 1),
            tab_active: Style::new()
                .bold(true)
                .foreground(Color::from(primary))
                .padding(0, 1, 0, 1),
            clock: Style::new().bold(true).foreground(Color::from(primary)),
            status: Style::new().foreground(Color::from(muted)),
            flavor: Style::new().italic(true).foreground(Color::from(muted)),
            footer: Style::new().foreground(Color::from(subtle)),
            help: help::Styles {
                key: Style::new().foreground(Color::from(muted)),
                desc: Style::new().foreground(Color::from(subtle)),
                separator: Style::new().foreground(Color::from(separator)),
            },
        }
    }
}

/// Styles the view draws with, rebuilt whenever the theme flips.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Application title.
    pub title: Style,
    /// Inactive mode selector tab.
    pub tab: Style,
    /// Active mode selector tab.
    pub tab_active: Style,
    /// The big countdown display.
    pub clock: Style,
    /// Running/paused/editing status line.
    pub status: Style,
    /// Flavor line under the timer.
    pub flavor: Style,
    /// Footer text.
    pub footer: Style,
    /// Help line styling.
    pub help: help::Styles,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut theme = Theme::Light;
        theme.toggle();
        assert_eq!(theme, Theme::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_badges_differ() {
        assert_ne!(Theme::Light.badge(), Theme::Dark.badge());
    }
}
