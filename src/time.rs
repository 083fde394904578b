//! Calendar date ↔ Julian date conversions.
//!
//! The arithmetic works on the proleptic Gregorian calendar with integer
//! division only (Explanatory Supplement to the Astronomical Almanac, §15.11).
//! [`hifitime`] only appears at the boundary, for callers that already hold an
//! [`Epoch`].

use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::{JulianDate, JDTOMJD, MJD},
    orbit_errors::OrbitError,
};

/// A civil date whose fractional day carries the time of day (UTC).
///
/// `day = 1.5` is noon on the first day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: f64,
}

impl CalendarDate {
    pub fn to_julian_date(&self) -> Result<JulianDate, OrbitError> {
        calendar_to_julian_date(self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:09.6}", self.year, self.month, self.day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Largest `|jd|` accepted by [`julian_date_to_calendar`], about 2.7 × 10⁸ years.
pub const JULIAN_DATE_LIMIT: f64 = 1e11;

/// Julian day number of the civil date starting at noon (integer part of the JD).
fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let janfeb = i64::from(month < 3);

    (1461 * (year + 4800 - janfeb)).div_euclid(4)
        + (367 * (month - 2 + 12 * janfeb)).div_euclid(12)
        - (3 * (year + 4900 - janfeb).div_euclid(100)).div_euclid(4)
        - 32075
        + day
}

/// Convert a Gregorian calendar date to a Julian date.
///
/// Arguments
/// -----------------
/// * `year`: astronomical year (1 BC is year 0).
/// * `month`: 1 to 12.
/// * `day`: day of the month, the fractional part is the time of day.
///
/// Return
/// ----------
/// * The Julian date. `2000-01-01.0` gives `2451544.5`.
///
/// Errors
/// ----------
/// * [`OrbitError::InvalidCalendarDate`] for a month outside 1..=12, a
///   non-finite day or a day outside the month.
pub fn calendar_to_julian_date(year: i32, month: u8, day: f64) -> Result<JulianDate, OrbitError> {
    let Some(month_length) = days_in_month(year, month) else {
        return Err(OrbitError::InvalidCalendarDate(format!(
            "month must be in 1..=12, got {month}"
        )));
    };
    if !day.is_finite() || day < 1.0 || day >= f64::from(month_length) + 1.0 {
        return Err(OrbitError::InvalidCalendarDate(format!(
            "day {day} is outside {year:04}-{month:02} (1 to {month_length})"
        )));
    }

    let whole_day = day.floor();
    let jdn = julian_day_number(i64::from(year), i64::from(month), whole_day as i64);
    Ok(jdn as f64 - 0.5 + (day - whole_day))
}

/// Convert a Julian date to a Gregorian calendar date.
///
/// Errors
/// ----------
/// * [`OrbitError::InvalidCalendarDate`] if `jd` is not finite or `|jd|`
///   exceeds [`JULIAN_DATE_LIMIT`].
pub fn julian_date_to_calendar(jd: JulianDate) -> Result<CalendarDate, OrbitError> {
    if !jd.is_finite() {
        return Err(OrbitError::InvalidCalendarDate(format!(
            "julian date is not finite ({jd})"
        )));
    }
    if jd.abs() > JULIAN_DATE_LIMIT {
        return Err(OrbitError::InvalidCalendarDate(format!(
            "julian date {jd} is outside ±{JULIAN_DATE_LIMIT:e}"
        )));
    }

    // Civil days start at midnight, half a day before the JD integer
    let shifted = jd + 0.5;
    let jdn = shifted.floor();
    let fraction = shifted - jdn;
    let jdn = jdn as i64;

    let f = jdn + 1401 + ((4 * jdn + 274277).div_euclid(146097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (14 - month).div_euclid(12);

    Ok(CalendarDate {
        year: year as i32,
        month: month as u8,
        day: day as f64 + fraction,
    })
}

pub fn jd_to_mjd(jd: JulianDate) -> MJD {
    jd - JDTOMJD
}

pub fn mjd_to_jd(mjd: MJD) -> JulianDate {
    mjd + JDTOMJD
}

/// Julian date (UTC) of a [`hifitime::Epoch`].
pub fn epoch_to_julian_date(epoch: &Epoch) -> JulianDate {
    epoch.to_jde_utc_days()
}

/// [`hifitime::Epoch`] at a Julian date (UTC).
pub fn julian_date_to_epoch(jd: JulianDate) -> Epoch {
    Epoch::from_jde_utc(jd)
}
