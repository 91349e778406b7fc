//! The countdown state machine at the heart of the app.
//!
//! The session model owns the current [`Mode`], the remaining seconds, the
//! run flag, the per-mode [`Durations`] table and the edit-in-place buffer.
//! It is driven by a once-per-second [`TickMsg`] command chain and by the
//! commands the presentation layer routes in (mode switch, start/pause,
//! reset, edit). When a countdown crosses from 1 to 0 it stops itself, emits
//! a single [`ExpiredMsg`] and auto-advances to the next interval type.
//!
//! ### Tick lifetime
//!
//! Each tick command carries the model's instance `id` and a generation
//! `tag`. Every transition out of the running state bumps the generation, so
//! a tick that was already in flight when the user paused or switched modes
//! is rejected on arrival. This is what keeps orphaned pulses from
//! accumulating across start/stop cycles: there is never more than one live
//! tick chain.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use crate::edit;
use crate::mode::{Durations, Mode};

// Instance IDs keep tick messages addressed even if more than one session
// model ever exists (tests create many).
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// One second of countdown. Carries the instance id and the tick generation
/// it belongs to; stale generations are ignored.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Instance the tick is addressed to.
    pub id: i64,
    tag: i64,
}

/// Emitted exactly once when a countdown reaches zero while running.
///
/// By the time this message is observed the model has already stopped and
/// auto-advanced; `finished` names the interval that just elapsed so the
/// notification text can be chosen from it.
#[derive(Debug, Clone)]
pub struct ExpiredMsg {
    /// Instance that expired.
    pub id: i64,
    /// The interval type that just ran out.
    pub finished: Mode,
}

/// The live Pomodoro session.
#[derive(Debug, Clone)]
pub struct Model {
    mode: Mode,
    durations: Durations,
    remaining_secs: u32,
    running: bool,
    editing: bool,
    edit: edit::Model,
    id: i64,
    tag: i64,
}

/// Creates a session in its initial state: deep work, 25:00, idle.
pub fn new() -> Model {
    let durations = Durations::new();
    let mode = Mode::DeepWork;
    let mut edit = edit::Model::new();
    edit.set_minutes(durations.get(mode));
    Model {
        mode,
        remaining_secs: durations.seconds(mode),
        durations,
        running: false,
        editing: false,
        edit,
        id: next_id(),
        tag: 0,
    }
}

impl Model {
    /// Unique identifier of this session instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The active interval type.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left on the countdown.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether the countdown is advancing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the duration field is being edited.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The per-mode duration table.
    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    /// Selects `new_mode`, from any state.
    ///
    /// Stops the countdown, resets the entire duration table to defaults
    /// (including entries edited for other modes), loads the new mode's
    /// default duration and returns to idle.
    pub fn switch_mode(&mut self, new_mode: Mode) {
        self.stop_ticks();
        self.editing = false;
        self.durations.reset();
        self.mode = new_mode;
        self.remaining_secs = self.durations.seconds(new_mode);
        self.edit.set_minutes(self.durations.get(new_mode));
    }

    /// Starts or pauses the countdown. A no-op while editing, and starting
    /// from zero is not a supported transition; reset or switch modes
    /// first.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.editing {
            return None;
        }
        if !self.running {
            if self.remaining_secs == 0 {
                return None;
            }
            self.running = true;
            return Some(self.tick_cmd());
        }
        self.stop_ticks();
        None
    }

    /// Restores the countdown to the full configured duration for the active
    /// mode. Idle only; the duration table is untouched.
    pub fn reset(&mut self) {
        if self.running || self.editing {
            return;
        }
        self.remaining_secs = self.durations.seconds(self.mode);
    }

    /// Enters edit mode, seeding the buffer with the whole minutes left on
    /// the clock. Only reachable while idle.
    pub fn begin_edit(&mut self) {
        if self.running || self.editing {
            return;
        }
        self.editing = true;
        self.edit.set_minutes((self.remaining_secs / 60) as u16);
    }

    /// Routes a key press into the edit buffer while editing.
    pub fn edit_key(&mut self, key_msg: &KeyMsg) {
        if self.editing {
            self.edit.handle_key(key_msg);
        }
    }

    /// Leaves edit mode. A buffer holding a valid minute count overwrites
    /// the active mode's duration and reloads the clock; anything else is
    /// dropped without a word and the previous duration stands.
    pub fn commit_edit(&mut self) {
        if !self.editing {
            return;
        }
        if let Some(minutes) = self.edit.minutes() {
            self.durations.set(self.mode, minutes);
            self.remaining_secs = u32::from(minutes) * 60;
        }
        self.editing = false;
    }

    /// Current contents of the edit buffer.
    pub fn edit_value(&self) -> &str {
        self.edit.value()
    }

    /// Handles tick and expiry plumbing. Tick messages from a stale
    /// generation, a different instance, or a paused session are rejected
    /// without touching state.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if !self.running || tick_msg.id != self.id || tick_msg.tag != self.tag {
                return None;
            }

            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            if self.remaining_secs == 0 {
                // Edge-triggered: stop, advance, and notify exactly once.
                let finished = self.mode;
                self.switch_mode(finished.next_after_expiry());
                return Some(expired_cmd(self.id, finished));
            }
            return Some(self.tick_cmd());
        }

        None
    }

    /// Renders the clock as zero-padded `mm:ss`, or the edit buffer while
    /// editing.
    pub fn view(&self) -> String {
        if self.editing {
            self.edit.view()
        } else {
            format_clock(self.remaining_secs)
        }
    }

    // Invalidates any in-flight tick by bumping the generation.
    fn stop_ticks(&mut self) {
        self.running = false;
        self.tag += 1;
    }

    fn tick_cmd(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(Duration::from_secs(1), move |_| {
            Box::new(TickMsg { id, tag }) as Msg
        })
    }
}

fn expired_cmd(id: i64, finished: Mode) -> Cmd {
    bubbletea_tick(Duration::from_nanos(1), move |_| {
        Box::new(ExpiredMsg { id, finished }) as Msg
    })
}

/// Formats seconds as `mm:ss` with both fields zero-padded. Durations cap at
/// 60 minutes, so two digits never overflow.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ALL_MODES;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_minutes(timer: &mut Model, minutes: u16) {
        timer.begin_edit();
        // Clear the seeded buffer, then type the digits.
        timer.edit_key(&key(KeyCode::Backspace));
        timer.edit_key(&key(KeyCode::Backspace));
        for c in minutes.to_string().chars() {
            timer.edit_key(&key(KeyCode::Char(c)));
        }
        timer.commit_edit();
    }

    fn deliver_tick(timer: &mut Model) -> Option<Cmd> {
        let msg = Box::new(TickMsg {
            id: timer.id,
            tag: timer.tag,
        }) as Msg;
        timer.update(msg)
    }

    #[test]
    fn test_initial_state() {
        let timer = new();
        assert_eq!(timer.mode(), Mode::DeepWork);
        assert_eq!(timer.remaining_secs(), 25 * 60);
        assert!(!timer.is_running());
        assert!(!timer.is_editing());
        assert_eq!(timer.edit_value(), "25");
    }

    #[test]
    fn test_edit_commit_sets_duration_and_clock() {
        for mode in ALL_MODES {
            for minutes in [1u16, 30, 60] {
                let mut timer = new();
                timer.switch_mode(mode);
                type_minutes(&mut timer, minutes);
                assert_eq!(timer.remaining_secs(), u32::from(minutes) * 60);
                assert_eq!(timer.durations().get(mode), minutes);
                assert!(!timer.is_editing());
            }
        }
    }

    #[test]
    fn test_invalid_commit_is_discarded() {
        let mut timer = new();
        let before_remaining = timer.remaining_secs();
        let before_durations = *timer.durations();

        // Empty the buffer, then commit: nothing changes but edit mode ends.
        timer.begin_edit();
        timer.edit_key(&key(KeyCode::Backspace));
        timer.edit_key(&key(KeyCode::Backspace));
        assert_eq!(timer.edit_value(), "");
        timer.commit_edit();

        assert!(!timer.is_editing());
        assert_eq!(timer.remaining_secs(), before_remaining);
        assert_eq!(*timer.durations(), before_durations);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut timer = new();
        let before = timer.remaining_secs();
        assert!(deliver_tick(&mut timer).is_none());
        assert_eq!(timer.remaining_secs(), before);
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut timer = new();
        assert!(timer.toggle().is_some());
        let cmd = deliver_tick(&mut timer);
        assert!(cmd.is_some()); // chain continues
        assert_eq!(timer.remaining_secs(), 25 * 60 - 1);
    }

    #[test]
    fn test_stale_tick_rejected_after_pause() {
        let mut timer = new();
        timer.toggle();
        let stale = Box::new(TickMsg {
            id: timer.id,
            tag: timer.tag,
        }) as Msg;

        timer.toggle(); // pause bumps the generation
        assert!(!timer.is_running());
        assert!(timer.update(stale).is_none());
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn test_tick_for_other_instance_rejected() {
        let mut timer = new();
        timer.toggle();
        let foreign = Box::new(TickMsg {
            id: timer.id + 1,
            tag: timer.tag,
        }) as Msg;
        assert!(timer.update(foreign).is_none());
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn test_expiry_from_deep_work() {
        let mut timer = new();
        timer.remaining_secs = 1;
        timer.toggle();

        let cmd = deliver_tick(&mut timer);
        assert!(cmd.is_some()); // the one-shot expiry notification
        assert!(!timer.is_running());
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_secs(), 300);

        // No re-trigger: the session is idle and the old chain is stale.
        assert!(deliver_tick(&mut timer).is_none());
        assert_eq!(timer.remaining_secs(), 300);
    }

    #[test]
    fn test_expiry_from_breaks_returns_to_deep_work() {
        for mode in [Mode::ShortBreak, Mode::LongBreak] {
            let mut timer = new();
            timer.switch_mode(mode);
            timer.remaining_secs = 1;
            timer.toggle();

            assert!(deliver_tick(&mut timer).is_some());
            assert_eq!(timer.mode(), Mode::DeepWork);
            assert_eq!(timer.remaining_secs(), 25 * 60);
        }
    }

    #[test]
    fn test_expiry_resets_edited_duration() {
        // An edited deep-work duration does not survive the auto-advance,
        // because switching modes resets the whole table.
        let mut timer = new();
        type_minutes(&mut timer, 1);
        timer.toggle();
        for _ in 0..60 {
            deliver_tick(&mut timer);
        }
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.durations().get(Mode::DeepWork), 25);
    }

    #[test]
    fn test_switch_mode_resets_whole_table() {
        let mut timer = new();
        type_minutes(&mut timer, 50); // edit deep work
        assert_eq!(timer.durations().get(Mode::DeepWork), 50);

        timer.switch_mode(Mode::LongBreak);
        assert_eq!(timer.durations().get(Mode::DeepWork), 25);
        assert_eq!(timer.durations().get(Mode::ShortBreak), 5);
        assert_eq!(timer.durations().get(Mode::LongBreak), 15);
        assert_eq!(timer.remaining_secs(), 15 * 60);
        assert_eq!(timer.edit_value(), "15");
    }

    #[test]
    fn test_switch_mode_stops_countdown() {
        let mut timer = new();
        timer.toggle();
        timer.switch_mode(Mode::ShortBreak);
        assert!(!timer.is_running());
        assert!(deliver_tick(&mut timer).is_none());
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut timer = new();
        timer.remaining_secs = 100;
        timer.reset();
        assert_eq!(timer.remaining_secs(), 25 * 60);
        assert_eq!(timer.durations().get(Mode::DeepWork), 25);
    }

    #[test]
    fn test_reset_ignored_while_running() {
        let mut timer = new();
        timer.toggle();
        timer.remaining_secs = 100;
        timer.reset();
        assert_eq!(timer.remaining_secs(), 100);
    }

    #[test]
    fn test_toggle_from_zero_unsupported() {
        let mut timer = new();
        timer.remaining_secs = 0;
        assert!(timer.toggle().is_none());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_toggle_noop_while_editing() {
        let mut timer = new();
        timer.begin_edit();
        assert!(timer.toggle().is_none());
        assert!(!timer.is_running());
        assert!(timer.is_editing());
    }

    #[test]
    fn test_begin_edit_only_while_idle() {
        let mut timer = new();
        timer.toggle();
        timer.begin_edit();
        assert!(!timer.is_editing());
    }

    #[test]
    fn test_begin_edit_floors_remaining() {
        let mut timer = new();
        timer.remaining_secs = 125; // mid-countdown, paused
        timer.begin_edit();
        assert_eq!(timer.edit_value(), "2");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(60 * 60), "60:00");
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn test_view_shows_buffer_while_editing() {
        let mut timer = new();
        assert_eq!(timer.view(), "25:00");
        timer.begin_edit();
        assert_eq!(timer.view(), "25█");
    }

    #[test]
    fn test_unique_ids() {
        let a = new();
        let b = new();
        assert_ne!(a.id(), b.id());
    }
}
