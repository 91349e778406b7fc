//! Fire-and-forget expiry notification.
//!
//! Rings the terminal bell and posts a desktop notification when an interval
//! elapses. Delivery is best effort: a failed bell write or a notification
//! daemon that is not running must never affect timer state, so every error
//! here is swallowed.

use std::io::{self, Write};

use notify_rust::Notification;

use crate::mode::Mode;

/// Notifies that the `finished` interval has elapsed.
pub fn ring(finished: Mode) {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();

    let _ = Notification::new()
        .summary("PomoWork")
        .body(body_for(finished))
        .show();
}

fn body_for(finished: Mode) -> &'static str {
    match finished {
        Mode::DeepWork => "Deep work done. Time for a short break.",
        Mode::ShortBreak | Mode::LongBreak => "Break is over. Back to deep work.",
    }
}
