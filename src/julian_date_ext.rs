// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions: calendar conversion and
//! weekday.

use chrono::Weekday;

use super::calendar::{self, Calendar, CalendarDate};
use super::error::CalendarError;
use super::instant::Time;
use super::scales::{JD, MJD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Start of the Julian Period: noon, 4713 BCE January 1 (proleptic
    /// Julian), JD 0.
    pub const EPOCH: Self = Self::new(0.0);

    /// Julian Day of `date` read in `calendar`.
    #[inline]
    pub fn from_calendar(date: CalendarDate, calendar: Calendar) -> Self {
        date.to_julian_date(calendar)
    }

    /// Julian Day of a Gregorian calendar date.
    #[inline]
    pub fn from_gregorian(year: i32, month: u32, day: f64) -> Self {
        calendar::calendar_gregorian_to_jd(year, month, day)
    }

    /// Julian Day of a Julian calendar date.
    #[inline]
    pub fn from_julian(year: i32, month: u32, day: f64) -> Self {
        calendar::calendar_julian_to_jd(year, month, day)
    }

    /// Calendar date, Julian before the 1582 reform and Gregorian after.
    ///
    /// Undefined for values before [`EPOCH`](Self::EPOCH); see
    /// [`try_to_calendar`](Self::try_to_calendar).
    #[inline]
    pub fn to_calendar(&self) -> CalendarDate {
        calendar::jd_to_calendar(*self)
    }

    /// Like [`to_calendar`](Self::to_calendar), rejecting values before JD 0
    /// and values beyond [`Calendar::MAX_ABS_JD`] instead of panicking.
    pub fn try_to_calendar(&self) -> Result<CalendarDate, CalendarError> {
        if *self < Self::EPOCH {
            return Err(CalendarError::BeforeEpoch { jd: self.value() });
        }
        calendar::try_jd_to_calendar(*self)
    }

    /// Proleptic Gregorian calendar date, even before 1582.
    #[inline]
    pub fn to_calendar_gregorian(&self) -> CalendarDate {
        calendar::jd_to_calendar_gregorian(*self)
    }

    /// Calendar this instant falls in under the reform cutover.
    #[inline]
    pub fn calendar(&self) -> Calendar {
        Calendar::for_julian_date(*self)
    }

    /// Day of the week, `0` = Sunday through `6` = Saturday.
    #[inline]
    pub fn day_of_week(&self) -> u32 {
        calendar::day_of_week(*self)
    }

    /// Day of the week as a [`chrono::Weekday`].
    pub fn weekday(&self) -> Weekday {
        match self.day_of_week() {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Convenience wrapper for `self.to::<MJD>()`.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}
