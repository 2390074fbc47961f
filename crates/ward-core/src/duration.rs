//! Elapsed-time formatting.
//!
//! Two formats exist on purpose and must not be unified:
//!
//! - the *live* elapsed display (how long a bed has been occupied so far)
//!   shows whole hours and minutes only: `"2h 05min"` is never produced,
//!   the minutes are unpadded: `"2h 5min"`;
//! - the *finalized* dwell recorded at release appends the whole-seconds
//!   remainder, but only when it is nonzero: `"1h 30min"` or
//!   `"0h 0min 42s"`.
//!
//! Negative durations (clock skew between writes) clamp to zero.

use chrono::Duration;

/// Formats a live elapsed duration as `{h}h {m}min`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{hours}h {minutes}min")
}

/// Formats a finalized dwell duration as `{h}h {m}min`, with ` {s}s`
/// appended when the seconds remainder is nonzero.
pub fn format_dwell(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if seconds > 0 {
        format!("{hours}h {minutes}min {seconds}s")
    } else {
        format!("{hours}h {minutes}min")
    }
}
