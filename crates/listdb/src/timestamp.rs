use std::{
    fmt,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Point in time relative to the Unix epoch, used for `date` elements.
///
/// `nanoseconds` always carries the sign of `seconds` (or is zero), so the
/// derived ordering is chronological.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    seconds: i64,
    nanoseconds: i32,
}

impl Timestamp {
    pub const EPOCH: Self = Self {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Builds a timestamp, normalizing `nanoseconds` into `(-1s, 1s)` with the
    /// sign of the total. Seconds saturate at the `i64` bounds.
    pub fn new(seconds: i64, nanoseconds: i32) -> Self {
        let mut seconds = seconds.saturating_add(i64::from(nanoseconds / NANOS_PER_SECOND));
        let mut nanoseconds = nanoseconds % NANOS_PER_SECOND;
        if seconds > 0 && nanoseconds < 0 {
            seconds -= 1;
            nanoseconds += NANOS_PER_SECOND;
        } else if seconds < 0 && nanoseconds > 0 {
            seconds += 1;
            nanoseconds -= NANOS_PER_SECOND;
        }
        Self {
            seconds,
            nanoseconds,
        }
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            nanoseconds: 0,
        }
    }

    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    #[inline]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    #[inline]
    pub fn nanoseconds(&self) -> i32 {
        self.nanoseconds
    }
}

impl From<SystemTime> for Timestamp {
    fn from(value: SystemTime) -> Self {
        match value.duration_since(UNIX_EPOCH) {
            Ok(after) => Self::new(
                i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
                after.subsec_nanos() as i32,
            ),
            Err(before) => {
                let before = before.duration();
                Self::new(
                    i64::try_from(before.as_secs()).map_or(i64::MIN, |s| -s),
                    -(before.subsec_nanos() as i32),
                )
            }
        }
    }
}

impl From<Timestamp> for SystemTime {
    fn from(value: Timestamp) -> Self {
        let seconds = Duration::from_secs(value.seconds.unsigned_abs());
        let nanos = Duration::from_nanos(u64::from(value.nanoseconds.unsigned_abs()));
        if value.seconds < 0 || value.nanoseconds < 0 {
            UNIX_EPOCH - seconds - nanos
        } else {
            UNIX_EPOCH + seconds + nanos
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds < 0 || self.nanoseconds < 0 {
            write!(
                f,
                "-{}.{:09}",
                self.seconds.unsigned_abs(),
                self.nanoseconds.unsigned_abs()
            )
        } else {
            write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
        }
    }
}
