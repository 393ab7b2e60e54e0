use std::ops::{Add, Sub};

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::*;

/// MJD of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const MJD_UNIX_EPOCH: f64 = 40587.0;

/// Offset between Julian Day and Modified Julian Date
pub const MJD_JD_OFFSET: f64 = 2_400_000.5;

/// Julian Day of the J2000.0 epoch
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Modified Julian Date representation, always on the UTC scale.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(qtty::Days);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Midnight UTC at the start of the given calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        Some(Self::from_datetime(midnight.and_utc()))
    }

    /// Midnight UTC on January 1 of `year`.
    pub fn start_of_year(year: i32) -> Option<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - MJD_UNIX_EPOCH) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86400.0 + MJD_UNIX_EPOCH)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        DateTime::from_timestamp(secs_i64, nanos).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }

    /// Julian Day (UTC).
    pub fn julian_day(&self) -> f64 {
        self.value() + MJD_JD_OFFSET
    }

    /// Approximate decimal year, good enough to pick a ΔT.
    pub fn decimal_year(&self) -> f64 {
        2000.0 + (self.julian_day() - J2000_JD) / 365.25
    }

    /// Julian Ephemeris Day (TT) for this UTC instant.
    pub fn tt_julian_day(&self) -> f64 {
        self.julian_day() + delta_t_seconds(self.decimal_year()) / 86400.0
    }

    /// Julian centuries of TT since J2000.0.
    pub fn julian_centuries_tt(&self) -> f64 {
        (self.tt_julian_day() - J2000_JD) / DAYS_PER_CENTURY
    }

    /// UTC instant for a Julian Ephemeris Day (TT).
    pub fn from_tt_julian_day(jde: f64) -> Self {
        let approx = Self::new(jde - MJD_JD_OFFSET);
        Self::new(jde - MJD_JD_OFFSET - delta_t_seconds(approx.decimal_year()) / 86400.0)
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl Add<qtty::Days> for ModifiedJulianDate {
    type Output = ModifiedJulianDate;

    fn add(self, rhs: qtty::Days) -> Self::Output {
        ModifiedJulianDate(self.0 + rhs)
    }
}

impl Sub for ModifiedJulianDate {
    type Output = qtty::Days;

    fn sub(self, rhs: ModifiedJulianDate) -> Self::Output {
        self.0 - rhs.0
    }
}

/// ΔT = TT − UT1 in seconds (Espenak & Meeus polynomials).
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Calendar date of `instant` as seen on a wall clock at `offset`.
///
/// Events are computed in UTC; a phase at 20:00 UTC is already the next day in
/// a UTC+05:30 zone, so every event date must go through this projection.
pub fn local_date(instant: ModifiedJulianDate, offset: FixedOffset) -> NaiveDate {
    instant.to_datetime().with_timezone(&offset).date_naive()
}

/// Format a date as `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a UTC offset such as `+05:30`, `-0800`, `UTC` or `Z`.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, String> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(|| "Invalid zero offset".to_string());
    }

    let (sign, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(format!("UTC offset must start with '+' or '-': {:?}", raw));
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => match (rest.get(..2), rest.get(2..)) {
            (Some(h), Some(m)) => (h, m),
            _ => return Err(format!("Invalid UTC offset: {:?}", raw)),
        },
        None => (rest, "0"),
    };

    let hours: i32 = hours
        .parse()
        .map_err(|_| format!("Invalid hours in UTC offset: {:?}", raw))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| format!("Invalid minutes in UTC offset: {:?}", raw))?;

    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(format!("UTC offset out of range: {:?}", raw));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| format!("UTC offset out of range: {:?}", raw))
}
