use chrono::{DateTime, Utc};
use qtty::Days;
use jdcal::{
    calendar_gregorian_to_jd, calendar_julian_to_jd, day_of_week, day_of_year,
    day_of_year_to_calendar, floor_div, is_leap_year_gregorian, is_leap_year_julian,
    jd_to_calendar, Calendar, CalendarDate, CalendarError, JulianDate, ModifiedJulianDate,
};

#[test]
fn known_fixed_points() {
    assert_eq!(calendar_gregorian_to_jd(2000, 1, 1.5), JulianDate::J2000);
    assert!((calendar_gregorian_to_jd(1957, 10, 4.81).value() - 2_436_116.31).abs() < 1e-6);
    assert_eq!(calendar_julian_to_jd(-4712, 1, 1.5).value(), 0.0);
}

#[test]
fn leap_years() {
    for year in [1700, 1800, 1900, 2100] {
        assert!(!is_leap_year_gregorian(year));
    }
    for year in [1600, 2000, 2400] {
        assert!(is_leap_year_gregorian(year));
    }
    assert!(is_leap_year_julian(900) && is_leap_year_julian(1236));
    assert!(!is_leap_year_julian(750) && !is_leap_year_julian(1429));
}

#[test]
fn weekday_and_day_of_year() {
    assert_eq!(day_of_week(JulianDate::new(2_434_923.5)), 3);
    assert_eq!(day_of_year(11, 14, false), 318);
    assert_eq!(day_of_year(4, 22, true), 113);
    assert_eq!(day_of_year_to_calendar(318, false), (11, 14));
    assert_eq!(day_of_year_to_calendar(113, true), (4, 22));
}

#[test]
fn floor_division_boundaries() {
    assert_eq!(floor_div(-7, 2), -4);
    assert_eq!(floor_div(7, 2), 3);
    assert_eq!(floor_div(-7, -2), 3);
}

#[test]
fn reform_boundary_selects_calendar() {
    let before = jd_to_calendar(JulianDate::new(2_299_160.0));
    assert_eq!((before.year, before.month, before.day), (1582, 10, 4.5));
    let after = jd_to_calendar(JulianDate::new(2_299_161.0));
    assert_eq!((after.year, after.month, after.day), (1582, 10, 15.5));
}

#[test]
fn every_day_across_reform_round_trips() {
    // 1580-01-01 (Julian) through 1585-12-31 (Gregorian), at 06:00 each day.
    let start = calendar_julian_to_jd(1580, 1, 1.25);
    for offset in 0..(6 * 366) {
        let jd = start + Days::new(offset as f64);
        let date = jd.to_calendar();
        let back = date.to_julian_date(jd.calendar());
        assert!((back - jd).abs() < Days::new(1e-6), "{date} drifted");
    }
}

#[test]
fn utc_roundtrip_and_mjd() {
    let datetime = DateTime::<Utc>::from_timestamp(946_728_000, 0).unwrap();
    let jd = JulianDate::from_utc(datetime);
    assert_eq!(jd, JulianDate::J2000);
    assert_eq!(jd.to_utc(), Some(datetime));

    let mjd: ModifiedJulianDate = jd.into();
    assert_eq!(mjd.value(), 51_544.5);
    assert_eq!(ModifiedJulianDate::from_utc(datetime), mjd);
}

#[test]
fn checked_paths_report_errors() {
    assert!(CalendarDate::try_new(2023, 2, 29.0, Calendar::Gregorian).is_err());
    assert!(CalendarDate::try_new(2024, 1, 0.5, Calendar::Gregorian).is_err());
    assert!(matches!(
        JulianDate::new(-10.0).try_to_calendar(),
        Err(CalendarError::BeforeEpoch { .. })
    ));
    assert!(matches!(
        JulianDate::new(1.0e12).try_to_calendar(),
        Err(CalendarError::OutOfRange { .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn serde_calendar_date_and_julian_date() {
    let date = CalendarDate::new(1957, 10, 4.81);
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#"{"year":1957,"month":10,"day":4.81}"#);
    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);

    let jd = JulianDate::J2000;
    assert_eq!(serde_json::to_string(&jd).unwrap(), "2451545.0");
    assert_eq!(serde_json::to_string(&Calendar::Julian).unwrap(), r#""Julian""#);
}
