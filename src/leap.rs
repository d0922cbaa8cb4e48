// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Leap-year rules of the Julian and Gregorian calendars.
//!
//! Years use astronomical numbering (1 BCE is year `0`, 2 BCE is `-1`), and
//! both rules are applied proleptically with Euclidean remainders so that
//! negative years follow the same 4/100/400 pattern as positive ones.

/// `true` if `year` is a leap year in the Julian calendar.
///
/// ```
/// use jdcal::is_leap_year_julian;
///
/// assert!(is_leap_year_julian(900));
/// assert!(is_leap_year_julian(-4));
/// assert!(!is_leap_year_julian(1429));
/// ```
#[inline]
pub const fn is_leap_year_julian(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

/// `true` if `year` is a leap year in the Gregorian calendar.
#[inline]
pub const fn is_leap_year_gregorian(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}
