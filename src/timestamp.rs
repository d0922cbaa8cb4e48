// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `chrono` timestamp adapter and clock.
//!
//! `chrono::DateTime` is always proleptic Gregorian, so timestamps enter
//! through [`calendar_gregorian_to_jd`] and leave through
//! [`jd_to_calendar_gregorian`](crate::jd_to_calendar_gregorian), never
//! through the reform-aware converters. A timestamp is decomposed into `(year, month,
//! fractional day-of-month)` in UTC; any offset on the input only selects
//! the instant, it never shifts the resulting Julian Day.
//!
//! The wall clock is a collaborator ([`Clock`]) rather than a global, so the
//! conversions stay pure and can be driven by a fixed clock in tests.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use qtty::{Day, Days, Second, Seconds};

use super::calendar::{calendar_gregorian_to_jd, try_jd_to_calendar_gregorian};
use super::instant::{Time, TimeScale};
use super::scales::JD;

/// Source of the current UTC time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the operating system's wall clock.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<S: TimeScale> Time<S> {
    /// Build an instant from a UTC timestamp.
    ///
    /// The timestamp is read as proleptic Gregorian civil time with zero
    /// offset.
    ///
    /// ```
    /// use chrono::DateTime;
    /// use jdcal::JulianDate;
    ///
    /// let j2000 = DateTime::from_timestamp(946_728_000, 0).unwrap();
    /// assert_eq!(JulianDate::from_utc(j2000), JulianDate::J2000);
    /// ```
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let since_midnight = Seconds::new(f64::from(datetime.num_seconds_from_midnight()))
            + Seconds::new(f64::from(datetime.nanosecond()) / 1e9);
        let day = f64::from(datetime.day()) + since_midnight.to::<Day>().value();
        let jd = calendar_gregorian_to_jd(datetime.year(), datetime.month(), day);
        tracing::trace!(%datetime, jd = jd.value(), "timestamp to julian day");
        jd.to::<S>()
    }

    /// Build an instant from a timestamp in any time zone.
    ///
    /// The offset is normalised away first: `12:00+05:00` and `07:00Z` give
    /// the same instant.
    #[inline]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_utc(datetime.with_timezone(&Utc))
    }

    /// Convert to a `chrono::DateTime<Utc>`, at nanosecond resolution.
    ///
    /// Returns `None` if the value is not finite or falls outside chrono's
    /// representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let jd = self.to::<JD>();
        let date = match try_jd_to_calendar_gregorian(jd) {
            Ok(date) => date,
            Err(err) => {
                tracing::warn!(%err, "julian day outside timestamp range");
                return None;
            }
        };
        let Some(start_of_month) = NaiveDate::from_ymd_opt(date.year, date.month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        else {
            tracing::warn!(jd = jd.value(), year = date.year, "julian day outside timestamp range");
            return None;
        };

        let seconds = Days::new(date.day - 1.0).to::<Second>().value();
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9).round() as i64;
        let offset = TimeDelta::seconds(whole as i64) + TimeDelta::nanoseconds(nanos);

        let naive = start_of_month.checked_add_signed(offset)?;
        let datetime = DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);
        tracing::trace!(jd = jd.value(), %datetime, "julian day to timestamp");
        Some(datetime)
    }

    /// Current instant as read from `clock`.
    #[inline]
    pub fn now_from<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::from_utc(clock.now())
    }

    /// Current instant from the system clock.
    #[inline]
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }
}
