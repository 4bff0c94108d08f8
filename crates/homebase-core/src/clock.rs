//! Clock header text.

use chrono::{Datelike, NaiveDateTime, Timelike};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thur", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "March", "April", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Format a timestamp for the two-line clock header, e.g.
/// `"Mon Jan 8, 2024\n3:07 PM"`.
pub fn format_date_time(now: NaiveDateTime) -> String {
    let hour = match now.hour() % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if now.hour() < 12 { "AM" } else { "PM" };
    let weekday = WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[now.month0() as usize];

    format!(
        "{} {} {}, {}\n{}:{:02} {}",
        weekday,
        month,
        now.day(),
        now.year(),
        hour,
        now.minute(),
        meridiem
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(format_date_time(at(2024, 1, 8, 15, 7)), "Mon Jan 8, 2024\n3:07 PM");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_date_time(at(2023, 9, 3, 0, 30)), "Sun Sept 3, 2023\n12:30 AM");
        assert_eq!(format_date_time(at(2023, 9, 7, 12, 0)), "Thur Sept 7, 2023\n12:00 PM");
    }
}
