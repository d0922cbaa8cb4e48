// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian and Gregorian calendar dates and their Julian Day numbers.
//!
//! The algorithms are those of Meeus, *Astronomical Algorithms* (2nd ed.)
//! ch. 7, with every `INT()` of the book expressed as an integer
//! [floor division](crate::floor_div) so that proleptic (negative) years
//! are handled exactly.
//!
//! # Calendar selection
//!
//! Calendar→JD conversion is explicit: the caller states which calendar the
//! date belongs to. JD→calendar conversion ([`jd_to_calendar`]) picks the
//! calendar itself: Julian before the 1582 reform, Gregorian from
//! 1582-10-15 (JD 2 299 160.5) onwards, so that the day after Julian
//! 1582-10-04 is Gregorian 1582-10-15. [`jd_to_calendar_gregorian`]
//! always answers in the (proleptic) Gregorian calendar, which is what
//! Gregorian-only timestamp types such as `chrono::DateTime` need.
//!
//! # Domain
//!
//! Results are only meaningful for JD ≥ 0, i.e. from 4713 BCE January 1
//! (proleptic Julian) onwards. The unchecked functions do not validate this;
//! they only refuse (by panicking) values whose year cannot be represented,
//! `|JD| >` [`Calendar::MAX_ABS_JD`]. Use [`CalendarDate::try_new`] and
//! [`JulianDate::try_to_calendar`](crate::JulianDate::try_to_calendar) for
//! checked access.
//!
//! ```
//! use jdcal::{calendar_gregorian_to_jd, jd_to_calendar};
//!
//! let jd = calendar_gregorian_to_jd(1957, 10, 4.81);
//! assert!((jd.value() - 2_436_116.31).abs() < 1e-6);
//!
//! let date = jd_to_calendar(jd);
//! assert_eq!((date.year, date.month), (1957, 10));
//! ```

use std::fmt;

use crate::day_of_year::{day_of_year, days_in_month};
use crate::error::CalendarError;
use crate::floor_div::{floor_div, floor_div_i64};
use crate::leap::{is_leap_year_gregorian, is_leap_year_julian};
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer day number (`⌊JD + 0.5⌋`) of Gregorian 1582-10-15.
const GREGORIAN_FIRST_DAY: i64 = 2_299_161;

/// Offset between JD and the day count used internally by the formulas.
const JD_OFFSET: f64 = 1_524.5;

// ═══════════════════════════════════════════════════════════════════════════
// Calendar tag
// ═══════════════════════════════════════════════════════════════════════════

/// Civil calendar a [`CalendarDate`] is expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Calendar {
    /// Julian calendar, leap year every fourth year.
    Julian,
    /// Gregorian calendar, century years leap only when divisible by 400.
    Gregorian,
}

impl Calendar {
    /// Midnight starting Gregorian 1582-10-15, the first day of the
    /// Gregorian calendar (JD 2 299 160.5).
    pub const REFORM: JulianDate = JulianDate::new(2_299_160.5);

    /// Largest Julian Day magnitude accepted by the JD→calendar
    /// conversions, about ±273 million years. Beyond it the intermediate
    /// products overflow `i64` or the year leaves `i32`.
    pub const MAX_ABS_JD: f64 = 1.0e11;

    /// Leap-year rule of this calendar.
    #[inline]
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Julian => is_leap_year_julian(year),
            Calendar::Gregorian => is_leap_year_gregorian(year),
        }
    }

    /// Calendar [`jd_to_calendar`] uses for `jd`.
    #[inline]
    pub fn for_julian_date(jd: JulianDate) -> Self {
        if split_day(jd).0 >= GREGORIAN_FIRST_DAY {
            Calendar::Gregorian
        } else {
            Calendar::Julian
        }
    }

    /// Julian Day of `year`/`month`/`day` read in this calendar.
    #[inline]
    pub fn to_julian_date(self, year: i32, month: u32, day: f64) -> JulianDate {
        match self {
            Calendar::Julian => calendar_julian_to_jd(year, month, day),
            Calendar::Gregorian => calendar_gregorian_to_jd(year, month, day),
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calendar::Julian => f.write_str("Julian"),
            Calendar::Gregorian => f.write_str("Gregorian"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate
// ═══════════════════════════════════════════════════════════════════════════

/// A civil date with fractional day.
///
/// `year` uses astronomical numbering (1 BCE is `0`). `day` counts from
/// midnight: `4.81` is the 4th of the month at 19:26:24. The calendar the
/// date is written in is not stored; see [`Calendar`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

impl CalendarDate {
    /// Create a date without validation.
    #[inline]
    pub const fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Create a date, checking month and day against `calendar`.
    ///
    /// `day` may be anywhere in `[1, n + 1)` where `n` is the length of the
    /// month, so the fractional last day is accepted. The "day 0"
    /// convention (midnight ending the previous month) is only available
    /// through the unchecked [`CalendarDate::new`].
    pub fn try_new(
        year: i32,
        month: u32,
        day: f64,
        calendar: Calendar,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            tracing::debug!(year, month, "rejecting calendar date");
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, calendar.is_leap_year(year));
        if !day.is_finite() || day < 1.0 || day >= f64::from(max_day + 1) {
            tracing::debug!(year, month, day, max_day, "rejecting calendar date");
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self::new(year, month, day))
    }

    /// Julian Day of this date read in `calendar`.
    #[inline]
    pub fn to_julian_date(&self, calendar: Calendar) -> JulianDate {
        calendar.to_julian_date(self.year, self.month, self.day)
    }

    /// Whether this date's year is a leap year in `calendar`.
    #[inline]
    pub const fn is_leap_year(&self, calendar: Calendar) -> bool {
        calendar.is_leap_year(self.year)
    }

    /// Ordinal day within the year; the fraction of `day` is dropped.
    ///
    /// In `1..=366` for dates built by [`try_new`](Self::try_new). An
    /// unchecked "day 0" date yields the ordinal of the previous month's
    /// last day, `0` for January.
    #[inline]
    pub fn day_of_year(&self, calendar: Calendar) -> u32 {
        day_of_year(
            self.month,
            self.day.floor() as u32,
            self.is_leap_year(calendar),
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:05.2}", self.year, self.month, self.day)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar → JD
// ═══════════════════════════════════════════════════════════════════════════

/// Shift January and February to months 13 and 14 of the previous year.
#[inline]
const fn march_based(year: i32, month: u32) -> (i64, i32) {
    let (year, month) = (year as i64, month as i32);
    if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    }
}

/// `⌊365.25 (y + 4716)⌋ + ⌊30.6001 (m + 1)⌋` in integer arithmetic.
#[inline]
const fn day_count(year: i64, month: i32) -> i64 {
    floor_div_i64(36_525 * (year + 4_716), 100) + floor_div(306 * (month + 1), 10) as i64
}

/// Julian Day of a Gregorian calendar date.
///
/// Negative years are valid back to JD 0; earlier dates give undefined
/// results.
///
/// ```
/// use jdcal::calendar_gregorian_to_jd;
///
/// assert_eq!(calendar_gregorian_to_jd(2000, 1, 1.5).value(), 2_451_545.0);
/// ```
pub fn calendar_gregorian_to_jd(year: i32, month: u32, day: f64) -> JulianDate {
    let (y, m) = march_based(year, month);
    let a = floor_div_i64(y, 100);
    let b = 2 - a + floor_div_i64(a, 4);
    JulianDate::new((day_count(y, m) + b) as f64 + day - JD_OFFSET)
}

/// Julian Day of a Julian calendar date.
///
/// Negative years are valid back to JD 0; earlier dates give undefined
/// results.
///
/// ```
/// use jdcal::calendar_julian_to_jd;
///
/// assert_eq!(calendar_julian_to_jd(-4712, 1, 1.5).value(), 0.0);
/// ```
pub fn calendar_julian_to_jd(year: i32, month: u32, day: f64) -> JulianDate {
    let (y, m) = march_based(year, month);
    JulianDate::new(day_count(y, m) as f64 + day - JD_OFFSET)
}

// ═══════════════════════════════════════════════════════════════════════════
// JD → Calendar
// ═══════════════════════════════════════════════════════════════════════════

/// Split `JD + 0.5` into the civil day number and the fraction of day
/// elapsed since midnight.
#[inline]
fn split_day(jd: JulianDate) -> (i64, f64) {
    let shifted = jd.value() + 0.5;
    let whole = shifted.floor();
    (whole as i64, shifted - whole)
}

fn to_calendar(jd: JulianDate, gregorian: bool) -> Result<CalendarDate, CalendarError> {
    let value = jd.value();
    if !value.is_finite() || value.abs() > Calendar::MAX_ABS_JD {
        return Err(CalendarError::OutOfRange { jd: value });
    }

    let (z, f) = split_day(jd);
    let a = if gregorian {
        let alpha = floor_div_i64(z * 100 - 186_721_625, 3_652_425);
        z + 1 + alpha - floor_div_i64(alpha, 4)
    } else {
        z
    };
    let b = a + 1_524;
    let c = floor_div_i64(b * 100 - 12_210, 36_525);
    let d = floor_div_i64(36_525 * c, 100);
    let e = floor_div_i64((b - d) * 10_000, 306_001);

    let day = (b - d - floor_div_i64(306_001 * e, 10_000)) as f64 + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4_716 } else { c - 4_715 };
    let year = i32::try_from(year).map_err(|_| CalendarError::OutOfRange { jd: value })?;
    Ok(CalendarDate::new(year, month as u32, day))
}

fn expect_in_range(date: Result<CalendarDate, CalendarError>) -> CalendarDate {
    match date {
        Ok(date) => date,
        Err(err) => panic!("{err}"),
    }
}

/// Checked form of [`jd_to_calendar`]; only the representable range is
/// enforced here, not JD ≥ 0.
pub(crate) fn try_jd_to_calendar(jd: JulianDate) -> Result<CalendarDate, CalendarError> {
    let gregorian = Calendar::for_julian_date(jd) == Calendar::Gregorian;
    to_calendar(jd, gregorian)
}

/// Checked form of [`jd_to_calendar_gregorian`].
pub(crate) fn try_jd_to_calendar_gregorian(
    jd: JulianDate,
) -> Result<CalendarDate, CalendarError> {
    to_calendar(jd, true)
}

/// Calendar date of `jd`, Julian before the 1582 reform and Gregorian from
/// 1582-10-15 onwards.
///
/// Results are undefined for JD < 0.
///
/// # Panics
///
/// Panics if `jd` is not finite or `|jd| >` [`Calendar::MAX_ABS_JD`].
///
/// ```
/// use jdcal::{jd_to_calendar, JulianDate};
///
/// let date = jd_to_calendar(JulianDate::new(1_842_713.0));
/// assert_eq!((date.year, date.month, date.day), (333, 1, 27.5));
/// ```
pub fn jd_to_calendar(jd: JulianDate) -> CalendarDate {
    expect_in_range(try_jd_to_calendar(jd))
}

/// Proleptic Gregorian calendar date of `jd`, even before 1582.
///
/// Results are undefined for JD < 0.
///
/// # Panics
///
/// Panics if `jd` is not finite or `|jd| >` [`Calendar::MAX_ABS_JD`].
pub fn jd_to_calendar_gregorian(jd: JulianDate) -> CalendarDate {
    expect_in_range(try_jd_to_calendar_gregorian(jd))
}

// ═══════════════════════════════════════════════════════════════════════════
// Weekday
// ═══════════════════════════════════════════════════════════════════════════

/// Day of the week of `jd`, `0` for Sunday through `6` for Saturday.
///
/// The `+ 1.5` moves the noon-based JD boundary to civil midnight.
///
/// ```
/// use jdcal::{day_of_week, JulianDate};
///
/// // 1954-06-30 was a Wednesday.
/// assert_eq!(day_of_week(JulianDate::new(2_434_923.5)), 3);
/// ```
#[inline]
pub fn day_of_week(jd: JulianDate) -> u32 {
    ((jd.value() + 1.5).floor() as i64).rem_euclid(7) as u32
}
