use chrono::Utc;
use jdcal::{Calendar, JulianDate, ModifiedJulianDate};

fn main() {
    let now = JulianDate::from_utc(Utc::now());
    let now_mjd: ModifiedJulianDate = now.into();
    let date = now.to_calendar();

    println!("{now}");
    println!("{now_mjd}");
    println!("Gregorian: {date} ({:?})", now.weekday());
    println!("Day of year: {}", date.day_of_year(Calendar::Gregorian));

    let reform = Calendar::REFORM;
    let last_julian = reform - qtty::Days::new(1.0);
    println!(
        "Reform: {} (Julian) -> {} (Gregorian)",
        last_julian.to_calendar(),
        reform.to_calendar()
    );
}
