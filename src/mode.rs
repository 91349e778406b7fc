//! Interval types and the per-mode duration table.
//!
//! A Pomodoro session is always in exactly one [`Mode`]. The mode decides
//! which entry of the [`Durations`] table applies and what the countdown
//! advances to when it expires: deep work rolls into a short break, and both
//! break kinds roll back into deep work. A long break is only ever entered by
//! explicit selection.

/// The three interval types a session can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A focused work interval (25 minutes by default).
    DeepWork,
    /// A short recovery break (5 minutes by default).
    ShortBreak,
    /// A long recovery break (15 minutes by default). Never auto-entered.
    LongBreak,
}

/// All modes in selector order.
pub const ALL_MODES: [Mode; 3] = [Mode::DeepWork, Mode::ShortBreak, Mode::LongBreak];

impl Mode {
    /// The label shown on the mode selector tab.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::DeepWork => "deep work",
            Mode::ShortBreak => "short break",
            Mode::LongBreak => "long break",
        }
    }

    /// The mode the session auto-advances to when this interval expires.
    ///
    /// Deep work leads into a short break; finishing any break leads back
    /// into deep work. Long breaks are reachable only by user selection.
    pub fn next_after_expiry(&self) -> Mode {
        match self {
            Mode::DeepWork => Mode::ShortBreak,
            Mode::ShortBreak | Mode::LongBreak => Mode::DeepWork,
        }
    }
}

/// Smallest duration a mode may be set to, in minutes.
pub const MIN_MINUTES: u16 = 1;
/// Largest duration a mode may be set to, in minutes. Caps the clock display
/// at two digits.
pub const MAX_MINUTES: u16 = 60;

const DEFAULT_DEEP_WORK: u16 = 25;
const DEFAULT_SHORT_BREAK: u16 = 5;
const DEFAULT_LONG_BREAK: u16 = 15;

/// Per-mode durations in minutes, each within `MIN_MINUTES..=MAX_MINUTES`.
///
/// Entries are overwritten individually when the user commits an edit for the
/// active mode, and the whole table snaps back to defaults on every mode
/// switch. Nothing is persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    deep_work: u16,
    short_break: u16,
    long_break: u16,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            deep_work: DEFAULT_DEEP_WORK,
            short_break: DEFAULT_SHORT_BREAK,
            long_break: DEFAULT_LONG_BREAK,
        }
    }
}

impl Durations {
    /// The duration table with all entries at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minutes configured for `mode`.
    pub fn get(&self, mode: Mode) -> u16 {
        match mode {
            Mode::DeepWork => self.deep_work,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Seconds configured for `mode`.
    pub fn seconds(&self, mode: Mode) -> u32 {
        u32::from(self.get(mode)) * 60
    }

    /// Overwrites the entry for `mode`. Out-of-range values are ignored; the
    /// edit path filters before it ever calls this.
    pub fn set(&mut self, mode: Mode, minutes: u16) {
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            return;
        }
        match mode {
            Mode::DeepWork => self.deep_work = minutes,
            Mode::ShortBreak => self.short_break = minutes,
            Mode::LongBreak => self.long_break = minutes,
        }
    }

    /// Resets every entry to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let d = Durations::new();
        assert_eq!(d.get(Mode::DeepWork), 25);
        assert_eq!(d.get(Mode::ShortBreak), 5);
        assert_eq!(d.get(Mode::LongBreak), 15);
    }

    #[test]
    fn test_set_and_reset() {
        let mut d = Durations::new();
        d.set(Mode::ShortBreak, 10);
        assert_eq!(d.get(Mode::ShortBreak), 10);
        assert_eq!(d.seconds(Mode::ShortBreak), 600);

        d.reset();
        assert_eq!(d, Durations::default());
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut d = Durations::new();
        d.set(Mode::DeepWork, 0);
        assert_eq!(d.get(Mode::DeepWork), 25);
        d.set(Mode::DeepWork, 61);
        assert_eq!(d.get(Mode::DeepWork), 25);
        d.set(Mode::DeepWork, 60);
        assert_eq!(d.get(Mode::DeepWork), 60);
    }

    #[test]
    fn test_expiry_sequencing() {
        assert_eq!(Mode::DeepWork.next_after_expiry(), Mode::ShortBreak);
        assert_eq!(Mode::ShortBreak.next_after_expiry(), Mode::DeepWork);
        // A long break also returns to deep work; long break is never the
        // target of an auto-advance.
        assert_eq!(Mode::LongBreak.next_after_expiry(), Mode::DeepWork);
        for mode in ALL_MODES {
            assert_ne!(mode.next_after_expiry(), Mode::LongBreak);
        }
    }
}
