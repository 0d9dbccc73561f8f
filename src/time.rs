//! Time

use jiff::Timestamp;

/// Returns the current wall-clock instant in milliseconds since the epoch.
///
/// All persisted instants (item added-at, snapshot saved-at) use this unit.
#[must_use]
pub fn now_ms() -> i64 {
    Timestamp::now().as_millisecond()
}

/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;
