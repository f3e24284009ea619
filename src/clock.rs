use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

/// Source of "now" and the zone used to turn instants into local date-times.
pub trait Clock: Send + Sync {
    /// Current local date-time, full precision.
    fn now(&self) -> NaiveDateTime;

    /// Local date-time of `secs` seconds after the Unix epoch, or `None` when
    /// the instant is out of range.
    fn from_epoch_seconds(&self, secs: i64) -> Option<NaiveDateTime>;
}

/// The system clock in the system's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn from_epoch_seconds(&self, secs: i64) -> Option<NaiveDateTime> {
        let utc = DateTime::from_timestamp(secs, 0)?.naive_utc();
        let offset = Local.offset_from_utc_datetime(&utc).fix();
        utc.checked_add_offset(offset)
    }
}

/// A clock frozen at one local date-time in a fixed-offset zone.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// Frozen at `now` in UTC.
    pub fn utc(now: NaiveDateTime) -> Self {
        Self::new(now, Utc.fix())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn from_epoch_seconds(&self, secs: i64) -> Option<NaiveDateTime> {
        // Shifting by the offset can leave chrono's range even when the
        // instant itself is representable.
        DateTime::from_timestamp(secs, 0)?
            .naive_utc()
            .checked_add_offset(self.offset)
    }
}
