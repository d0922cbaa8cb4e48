// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day Calendar
//!
//! Conversions between Julian / Gregorian calendar dates and the Julian Day
//! timeline, plus the calendar attributes derived from them.
//!
//! # Core types
//!
//! - [`JulianDate`] — type alias for `Time<JD>`, a continuous day count from
//!   noon, 4713 BCE January 1 (proleptic Julian).
//! - [`ModifiedJulianDate`] — type alias for `Time<MJD>`.
//! - [`CalendarDate`] — `(year, month, fractional day)` in astronomical
//!   year numbering.
//! - [`Calendar`] — which civil calendar a date is written in.
//!
//! # Conversions
//!
//! | From | To | Function |
//! |------|----|----------|
//! | Gregorian date | JD | [`calendar_gregorian_to_jd`] |
//! | Julian date | JD | [`calendar_julian_to_jd`] |
//! | JD | Julian / Gregorian date (reform-aware) | [`jd_to_calendar`] |
//! | JD | proleptic Gregorian date | [`jd_to_calendar_gregorian`] |
//! | JD | weekday | [`day_of_week`] |
//! | `(month, day)` | day of year | [`day_of_year`] |
//! | day of year | `(month, day)` | [`day_of_year_to_calendar`] |
//! | `chrono::DateTime` | JD | [`Time::from_utc`], [`Time::from_datetime`] |
//! | JD | `chrono::DateTime<Utc>` | [`Time::to_utc`] |
//!
//! # Quick example
//!
//! ```rust
//! use jdcal::{Calendar, CalendarDate, JulianDate};
//!
//! let sputnik = CalendarDate::new(1957, 10, 4.81);
//! let jd = JulianDate::from_calendar(sputnik, Calendar::Gregorian);
//! assert!((jd.value() - 2_436_116.31).abs() < 1e-6);
//!
//! let back = jd.to_calendar();
//! assert_eq!((back.year, back.month), (1957, 10));
//! ```
//!
//! All functions are pure and thread-safe, except [`Time::now`], which reads
//! the system clock.

mod calendar;
mod day_of_year;
mod error;
mod floor_div;
pub(crate) mod instant;
mod julian_date_ext;
mod leap;
pub(crate) mod scales;
mod timestamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    calendar_gregorian_to_jd, calendar_julian_to_jd, day_of_week, jd_to_calendar,
    jd_to_calendar_gregorian, Calendar, CalendarDate,
};
pub use day_of_year::{
    day_of_year, day_of_year_gregorian, day_of_year_julian, day_of_year_to_calendar,
    days_in_month, days_in_year,
};
pub use error::CalendarError;
pub use floor_div::{floor_div, floor_div_i64};
pub use instant::{Time, TimeScale};
pub use leap::{is_leap_year_gregorian, is_leap_year_julian};
pub use scales::{JD, MJD};
pub use timestamp::{Clock, SystemClock};

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
