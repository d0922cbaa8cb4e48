// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors returned by the checked calendar operations.

/// Error type for the checked constructors and conversions.
///
/// The unchecked conversion functions never return this; they document
/// their valid domain instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Day-of-month outside `[0, max_day + 1)` or not finite.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The rejected day value.
        day: f64,
        /// Month the day was checked against.
        month: u32,
        /// Number of days in that month.
        max_day: u32,
    },

    /// Julian Day before JD 0, where the calendar algorithms are undefined.
    #[error("julian day {jd} is before the epoch JD 0")]
    BeforeEpoch {
        /// The rejected Julian Day value.
        jd: f64,
    },

    /// Julian Day not finite, or so large that its calendar year cannot be
    /// represented (see [`Calendar::MAX_ABS_JD`](crate::Calendar::MAX_ABS_JD)).
    #[error("julian day {jd} is outside the supported calendar range")]
    OutOfRange {
        /// The rejected Julian Day value.
        jd: f64,
    },
}
