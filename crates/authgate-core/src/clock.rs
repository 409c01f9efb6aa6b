//! Injectable time source.

use time::OffsetDateTime;

/// Source of the current time.
///
/// Used for assertion `auth_time` and for secret expiry checks. Tests inject
/// a [`FixedClock`] to make results deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> OffsetDateTime;

    /// Returns the current time as integer seconds since the Unix epoch.
    fn now_epoch_secs(&self) -> i64 {
        self.now().unix_timestamp()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    /// Creates a clock that always returns `at`.
    #[must_use]
    pub fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }

    /// Creates a clock frozen at the given Unix timestamp.
    ///
    /// Timestamps outside the representable range clamp to the Unix epoch.
    #[must_use]
    pub fn from_epoch_secs(secs: i64) -> Self {
        Self(OffsetDateTime::from_unix_timestamp(secs).unwrap_or(OffsetDateTime::UNIX_EPOCH))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
