// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-of-year codec.
//!
//! Maps `(month, day)` to the ordinal day within the year and back, using
//! the closed-form cumulative month lengths from Meeus, *Astronomical
//! Algorithms* ch. 7, instead of a month-length table:
//!
//! ```text
//! whole_months(m, k) = ⌊275·m / 9⌋ − k·⌊(m + 9) / 12⌋ − 30
//! ```
//!
//! where `k = 1` in leap years and `k = 2` otherwise. `whole_months(m, k)`
//! is the number of days in the months preceding `m`; evaluated at
//! `m = 13` it gives the length of the whole year.
//!
//! The codec is calendar-agnostic: callers pass the leap-year flag, or use
//! [`day_of_year_gregorian`] / [`day_of_year_julian`] to have it derived.
//!
//! ```
//! use jdcal::{day_of_year, day_of_year_to_calendar};
//!
//! assert_eq!(day_of_year(11, 14, false), 318);
//! assert_eq!(day_of_year_to_calendar(113, true), (4, 22));
//! ```

use crate::floor_div::floor_div;
use crate::leap::{is_leap_year_gregorian, is_leap_year_julian};

#[inline]
const fn leap_k(leap: bool) -> i32 {
    if leap {
        1
    } else {
        2
    }
}

/// Days in the months strictly before `month`.
#[inline]
const fn whole_months(month: i32, k: i32) -> i32 {
    floor_div(275 * month, 9) - k * floor_div(month + 9, 12) - 30
}

/// Ordinal day within the year (1-based) of `month`/`day`.
///
/// `month` must be in `1..=12` and `day` within that month; other inputs
/// produce meaningless results.
#[inline]
pub const fn day_of_year(month: u32, day: u32, leap: bool) -> u32 {
    debug_assert!(month >= 1 && month <= 12);
    (whole_months(month as i32, leap_k(leap)) + day as i32) as u32
}

/// Ordinal day within a Gregorian calendar year.
#[inline]
pub const fn day_of_year_gregorian(year: i32, month: u32, day: u32) -> u32 {
    day_of_year(month, day, is_leap_year_gregorian(year))
}

/// Ordinal day within a Julian calendar year.
#[inline]
pub const fn day_of_year_julian(year: i32, month: u32, day: u32) -> u32 {
    day_of_year(month, day, is_leap_year_julian(year))
}

/// Inverse of [`day_of_year`]: the `(month, day)` of the `n`-th day of the
/// year.
///
/// `n` must be in `1..=365` (`1..=366` for leap years).
pub const fn day_of_year_to_calendar(n: u32, leap: bool) -> (u32, u32) {
    debug_assert!(n >= 1 && n <= days_in_year(leap));
    let k = leap_k(leap);
    let n = n as i32;
    let month = if n < 32 {
        1
    } else {
        floor_div(900 * (k + n) + 98 * 275, 27_500)
    };
    (month as u32, (n - whole_months(month, k)) as u32)
}

/// Number of days in `month` (`1..=12`).
#[inline]
pub const fn days_in_month(month: u32, leap: bool) -> u32 {
    let k = leap_k(leap);
    let month = month as i32;
    (whole_months(month + 1, k) - whole_months(month, k)) as u32
}

/// Number of days in a year: 366 if `leap`, else 365.
#[inline]
pub const fn days_in_year(leap: bool) -> u32 {
    whole_months(13, leap_k(leap)) as u32
}
