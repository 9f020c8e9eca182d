use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// `strftime` layout for RFC 1123 dates (`Mon, 02 Jan 2006 15:04:05 GMT`).
const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A UTC wall-clock instant.
///
/// Commits use two renderings of it: a nanosecond-precision RFC 3339 string
/// that feeds the commit digest, and an RFC 1123 string shown in the history
/// log. `Display` produces the latter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build from milliseconds since the UNIX epoch. `None` if out of range.
    pub fn from_unix_millis(ms: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(ms).map(Self)
    }

    /// Rendering mixed into commit digests.
    pub fn to_digest_input(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }

    /// RFC 1123 rendering used in history records.
    pub fn to_rfc1123(&self) -> String {
        self.0.format(RFC1123_FORMAT).to_string()
    }

    /// This instant moved forward by `step`.
    pub fn advanced_by(&self, step: TimeDelta) -> Self {
        Self(self.0 + step)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_digest_input())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc1123())
    }
}

/// Source of timestamps.
///
/// The commit engine reads the clock twice per commit (once for the digest,
/// once for the log record), so implementations must not assume one call
/// per operation.
pub trait Clock: Send + Sync {
    /// The current instant according to this clock.
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Deterministic clock that returns `start`, then advances by `step` on
/// every read.
pub struct SteppingClock {
    next: Mutex<Timestamp>,
    step: TimeDelta,
}

impl SteppingClock {
    /// Create a clock starting at `start`.
    pub fn new(start: Timestamp, step: TimeDelta) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// A clock that never advances.
    pub fn fixed(at: Timestamp) -> Self {
        Self::new(at, TimeDelta::zero())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let mut next = self.next.lock().expect("clock mutex poisoned");
        let current = *next;
        *next = current.advanced_by(self.step);
        current
    }
}

impl fmt::Debug for SteppingClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteppingClock")
            .field("step", &self.step)
            .finish()
    }
}
