#![warn(missing_docs)]

//! # pomowork
//!
//! A single-screen Pomodoro timer for the terminal, built on
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs) following the
//! Elm Architecture: every component is a model with `update()` and `view()`
//! methods, driven by downcastable messages.
//!
//! Pick one of three interval types (deep work, short break, long break),
//! run the countdown, edit the duration in place while idle, and get an
//! audible + desktop notification when the interval elapses. Deep work
//! auto-advances into a short break; finishing any break returns to deep
//! work. A theme key flips between light and dark palettes.
//!
//! The interesting behavior lives in [`timer`]: the session state machine
//! owning mode, remaining time, the per-mode duration table, and the
//! edit-in-place state. [`app`] is the presentation layer that routes key
//! presses into it and renders the screen.

pub mod alert;
pub mod app;
pub mod edit;
pub mod help;
pub mod key;
pub mod keymap;
pub mod mode;
pub mod theme;
pub mod timer;

pub use app::App;
pub use mode::{Durations, Mode};

/// Prelude of the most commonly used types.
pub mod prelude {
    pub use crate::app::App;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::keymap::AppKeyMap;
    pub use crate::mode::{Durations, Mode};
    pub use crate::theme::Theme;
    pub use crate::timer::{format_clock, ExpiredMsg, Model as Timer, TickMsg};
}
