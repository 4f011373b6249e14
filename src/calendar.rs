use crate::errors::Error;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use std::cmp::Ordering;

/// Whether the two timestamps fall on the same calendar day, ignoring
/// hours, minutes and seconds.  Each timestamp is interpreted in its
/// own timezone.
pub fn same_day<T1: TimeZone, T2: TimeZone>(
    a: &DateTime<T1>,
    b: &DateTime<T2>,
) -> bool {
    a.date_naive() == b.date_naive()
}

/// Compare the calendar days of two timestamps, ignoring the time of
/// day.  Two timestamps on the same day compare equal even when one is
/// at 00:00 and the other at 23:59.
pub fn cmp_day<T1: TimeZone, T2: TimeZone>(
    a: &DateTime<T1>,
    b: &DateTime<T2>,
) -> Ordering {
    a.date_naive().cmp(&b.date_naive())
}

/// A date that recurs every year: a month and a day, with no year.
/// February 29 is allowed, and only matches in leap years.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Anniversary {
    month: u32,
    day: u32,
}

impl Anniversary {
    /// Build an anniversary, validating that the day can occur in the
    /// month in at least some year.
    pub fn new(month: u32, day: u32) -> Result<Self, Error> {
        let last = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 29,
            _ => return Err(Error::InvalidMonthDay { month, day }),
        };
        if day == 0 || day > last {
            return Err(Error::InvalidMonthDay { month, day });
        }
        Ok(Anniversary { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether the date falls on this anniversary, whatever its year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// The concrete date of this anniversary in the given year.  None
    /// for February 29 in a non-leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// The first occurrence of this anniversary strictly after the
    /// given date.  A February 29 anniversary skips ahead to the next
    /// leap year.
    pub fn next_after(&self, date: NaiveDate) -> NaiveDate {
        if let Some(d) = self.in_year(date.year()) {
            if d > date {
                return d;
            }
        }
        let mut year = date.year() + 1;
        loop {
            match self.in_year(year) {
                Some(d) => return d,
                None => year += 1,
            }
        }
    }
}

impl std::fmt::Display for Anniversary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// The date of Easter Sunday in the Gregorian calendar, using the
/// anonymous Gregorian computus.  Supported from 1583 (the first full
/// year of the Gregorian calendar) through 4099.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, Error> {
    if !(1583..=4099).contains(&year) {
        return Err(Error::EasterOutOfRange(year));
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    //  month is 3 or 4, day fits its month: always a valid date
    Ok(NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap())
}

/// The date of Easter Sunday in the Julian calendar, using the Julian
/// computus.  The year, month and day of the result are Julian calendar
/// components; no conversion to the Gregorian calendar is applied.
/// Supported from 326 (the year after the computus was adopted) through
/// 4099.
pub fn julian_easter_sunday(year: i32) -> Result<NaiveDate, Error> {
    if !(326..=4099).contains(&year) {
        return Err(Error::EasterOutOfRange(year));
    }
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    Ok(NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap())
}

/// Whether the date is the Easter Sunday of its year, in the Gregorian
/// calendar.  False for years outside the supported computus range.
pub fn is_easter_sunday(date: NaiveDate) -> bool {
    match easter_sunday(date.year()) {
        Ok(easter) => easter == date,
        Err(_) => false,
    }
}
