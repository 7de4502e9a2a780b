//! Fixed-locale date rendering.

#[cfg(test)]
#[path = "date_format_test.rs"]
mod date_format_test;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render an ISO `YYYY-MM-DD` date as English `"Month D, YYYY"`.
///
/// RFC 3339 timestamps are accepted and truncated to their date part.
/// Returns `None` for anything that is not a real calendar date.
#[must_use]
pub fn format_date(input: &str) -> Option<String> {
    let (year, month, day) = parse_ymd(input)?;
    Some(format!(
        "{} {}, {}",
        MONTHS[usize::from(month) - 1],
        day,
        year
    ))
}

fn parse_ymd(input: &str) -> Option<(i32, u8, u8)> {
    let date = input.trim().split(['T', ' ']).next()?;
    let mut parts = date.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return None;
    }
    Some((year, month, day))
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
