// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Integer floor division.
//!
//! The calendar formulas are written in terms of `INT(x)` applied to
//! quotients that may be negative (proleptic years before year 0).
//! Rust's `/` truncates toward zero, so every such quotient goes through
//! these helpers instead, which round toward negative infinity.
//!
//! Both helpers stay in integer arithmetic: the `36525 × year` product of
//! the Julian Day formula overflows `i32` for extreme years, hence the
//! 64-bit variant.
//!
//! Division by zero panics, exactly as the built-in operator does.

/// `floor(x / y)` for 32-bit operands.
///
/// # Panics
///
/// Panics if `y == 0`.
///
/// ```
/// use jdcal::floor_div;
///
/// assert_eq!(floor_div(-7, 2), -4);
/// assert_eq!(floor_div(7, 2), 3);
/// ```
#[inline]
pub const fn floor_div(x: i32, y: i32) -> i32 {
    let q = x / y;
    if (x < 0) != (y < 0) && x % y != 0 {
        q - 1
    } else {
        q
    }
}

/// `floor(x / y)` for 64-bit operands.
///
/// # Panics
///
/// Panics if `y == 0`.
#[inline]
pub const fn floor_div_i64(x: i64, y: i64) -> i64 {
    let q = x / y;
    if (x < 0) != (y < 0) && x % y != 0 {
        q - 1
    } else {
        q
    }
}
