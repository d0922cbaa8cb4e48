//! Cross-checks the integer floor-division converter against the textbook
//! floating-point form of the same formula.

use jdcal::calendar_gregorian_to_jd;

/// Meeus (7.1) evaluated directly in `f64`, Gregorian correction always
/// applied. Only trustworthy for positive years, where truncation and floor
/// coincide.
fn gregorian_to_jd_f64(year: i32, month: u32, day: f64) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

#[test]
fn integer_form_matches_float_form_for_positive_years() {
    for year in (1..=3000).step_by(3) {
        for month in 1..=12 {
            for day in [1.0, 14.5, 28.9] {
                let expected = gregorian_to_jd_f64(year, month, day);
                let actual = calendar_gregorian_to_jd(year, month, day).value();
                assert!(
                    (actual - expected).abs() < 1e-9,
                    "{year}-{month}-{day}: {actual} vs {expected}"
                );
            }
        }
    }
}
