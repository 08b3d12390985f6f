//! Time source and local calendar-day helpers.
//!
//! Timestamps are stored in UTC. Everything that asks "which day is this?"
//! goes through a [`Clock`], so the day boundary follows the caller's local
//! time zone and tests can pin both the instant and the offset.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

/// Source of the current instant and of local calendar dates.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The local calendar date an instant falls on.
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate;

    /// Today's local calendar date.
    fn today(&self) -> NaiveDate {
        self.local_date(self.now())
    }

    /// True if `instant` falls on today's local calendar date.
    fn is_today(&self, instant: DateTime<Utc>) -> bool {
        self.local_date(instant) == self.today()
    }

    /// The instant of a local wall-clock time. `None` if it does not exist
    /// (skipped by a DST change).
    fn at_local(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>>;
}

/// Wall clock in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }

    fn at_local(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        Local
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

/// A clock pinned to one instant in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// A clock pinned to `now` whose calendar days are UTC days.
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, Utc.fix())
    }

    /// The same instant shifted back by whole days.
    pub fn days_ago(&self, days: i64) -> DateTime<Utc> {
        self.now - Duration::days(days)
    }

    /// A new clock moved forward by `by`.
    pub fn advanced(&self, by: Duration) -> Self {
        Self::new(self.now + by, self.offset)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    fn at_local(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        self.offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|local| local.with_timezone(&Utc))
    }
}
