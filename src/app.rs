//! Top-level application model: input routing and rendering.
//!
//! The app owns the session model, the theme flag, and the key map. Its
//! `update` routes key presses into session commands and forwards tick
//! plumbing to the session; its `view` draws the whole screen from current
//! state. All timer behavior lives in [`crate::timer`]; this layer only
//! wires it to the terminal.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

use crate::alert;
use crate::help;
use crate::keymap::AppKeyMap;
use crate::mode::{Mode, ALL_MODES};
use crate::theme::{Styles, Theme};
use crate::timer::{self, ExpiredMsg};

const TITLE: &str = "PomoWork";
const FLAVOR: &str = "Your next breakthrough is 25 minutes away.";
const FOOTER: &str =
    "There is no To Do list feature. Grab a notebook and a pen, write down what you need to get done, then do it.";

/// The application state.
pub struct App {
    timer: timer::Model,
    keymap: AppKeyMap,
    theme: Theme,
    styles: Styles,
    help: help::Model,
}

impl App {
    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.force_quit.matches(key_msg) {
            return Some(quit());
        }

        if self.timer.is_editing() {
            // Both confirm and escape leave edit mode through the commit
            // path; an incomplete buffer is dropped there, not reported.
            if self.keymap.commit.matches(key_msg) || self.keymap.blur.matches(key_msg) {
                self.timer.commit_edit();
            } else {
                self.timer.edit_key(key_msg);
            }
            return None;
        }

        if self.keymap.quit.matches(key_msg) {
            return Some(quit());
        }
        if self.keymap.deep_work.matches(key_msg) {
            self.timer.switch_mode(Mode::DeepWork);
            return None;
        }
        if self.keymap.short_break.matches(key_msg) {
            self.timer.switch_mode(Mode::ShortBreak);
            return None;
        }
        if self.keymap.long_break.matches(key_msg) {
            self.timer.switch_mode(Mode::LongBreak);
            return None;
        }
        if self.keymap.toggle.matches(key_msg) {
            return self.timer.toggle();
        }
        if self.keymap.reset.matches(key_msg) {
            self.timer.reset();
            return None;
        }
        if self.keymap.edit.matches(key_msg) {
            self.timer.begin_edit();
            return None;
        }
        if self.keymap.theme.matches(key_msg) {
            self.theme.toggle();
            self.styles = self.theme.styles();
            self.help = help::Model::new(self.styles.help.clone());
            return None;
        }

        None
    }

    fn status_line(&self) -> &'static str {
        if self.timer.is_editing() {
            "editing minutes — enter to confirm"
        } else if self.timer.is_running() {
            "running"
        } else {
            "paused"
        }
    }

    fn tabs(&self) -> String {
        let mut parts = Vec::with_capacity(ALL_MODES.len());
        for mode in ALL_MODES {
            let style = if mode == self.timer.mode() {
                &self.styles.tab_active
            } else {
                &self.styles.tab
            };
            parts.push(style.clone().render(mode.label()));
        }
        parts.join(" ")
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let theme = Theme::Light;
        let styles = theme.styles();
        let help = help::Model::new(styles.help.clone());
        let app = App {
            timer: timer::new(),
            keymap: AppKeyMap::default(),
            theme,
            styles,
            help,
        };
        // The countdown starts paused; no command until the user does.
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(expired) = msg.downcast_ref::<ExpiredMsg>() {
            if expired.id == self.timer.id() {
                alert::ring(expired.finished);
            }
            return None;
        }

        self.timer.update(msg)
    }

    fn view(&self) -> String {
        let title = format!(
            "{}  {}",
            self.styles.title.clone().render(TITLE),
            self.styles.status.clone().render(self.theme.badge())
        );

        format!(
            "\n {}\n\n {}\n\n   {}\n   {}\n\n {}\n\n {}\n {}\n",
            title,
            self.tabs(),
            self.styles.clock.clone().render(&self.timer.view()),
            self.styles.status.clone().render(self.status_line()),
            self.help.view(&self.keymap),
            self.styles.flavor.clone().render(FLAVOR),
            self.styles.footer.clone().render(FOOTER),
        )
    }
}
