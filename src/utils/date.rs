//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct used as the build date of a
//! site configuration. The date is always passed in explicitly; reading the
//! clock happens at the outer edge (CLI) through [`DateTimeUtc::now`].
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//! let dt = DateTimeUtc::from_unix_secs(1_704_067_200); // 2024-01-01
//! ```

use anyhow::{Result, bail};
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 86_400;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Current system time.
    ///
    /// A clock set before the Unix epoch reads as 1970-01-01.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    /// Convert seconds since the Unix epoch.
    ///
    /// Years past 65535 saturate.
    #[allow(clippy::cast_possible_truncation)] // Components are range-checked by construction
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / SECS_PER_DAY;
        let rem = secs % SECS_PER_DAY;
        let (year, month, day) = civil_from_days(days);

        Self::new(
            u16::try_from(year).unwrap_or(u16::MAX),
            month,
            day,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Parse a `SOURCE_DATE_EPOCH` value (decimal seconds since the epoch).
    pub fn from_epoch_str(s: &str) -> Option<Self> {
        s.trim().parse::<u64>().ok().map(Self::from_unix_secs)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Check for time part (RFC3339)
        let (hour, minute, second) = if bytes.len() == 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as `YYYY-MM-DD`.
    pub fn to_date_string(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
///
/// Era-based conversion: a 400-year era has exactly 146097 days.
#[allow(clippy::cast_possible_truncation)] // month and day are < 32
fn civil_from_days(days: u64) -> (u64, u8, u8) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of a year
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month as u8, day as u8)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_secs_epoch() {
        assert_eq!(
            DateTimeUtc::from_unix_secs(0),
            DateTimeUtc::from_ymd(1970, 1, 1)
        );
    }

    #[test]
    fn test_from_unix_secs_known_dates() {
        assert_eq!(
            DateTimeUtc::from_unix_secs(1_704_067_200),
            DateTimeUtc::from_ymd(2024, 1, 1)
        );
        // Leap day in a year divisible by 400
        assert_eq!(
            DateTimeUtc::from_unix_secs(951_782_400),
            DateTimeUtc::from_ymd(2000, 2, 29)
        );
        // Last second of 2024
        assert_eq!(
            DateTimeUtc::from_unix_secs(1_735_689_599),
            DateTimeUtc::new(2024, 12, 31, 23, 59, 59)
        );
    }

    #[test]
    fn test_from_epoch_str() {
        assert_eq!(
            DateTimeUtc::from_epoch_str(" 1704067200\n").map(|d| d.year),
            Some(2024)
        );
        assert!(DateTimeUtc::from_epoch_str("yesterday").is_none());
        assert!(DateTimeUtc::from_epoch_str("-5").is_none());
    }

    #[test]
    fn test_now_is_after_2024() {
        assert!(DateTimeUtc::now().year >= 2024);
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15"),
            Some(DateTimeUtc::from_ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15T14:30:45Z"),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DateTimeUtc::parse("2024-6-15"), None);
        assert_eq!(DateTimeUtc::parse("2024/06/15"), None);
        assert_eq!(DateTimeUtc::parse("2023-02-29"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15 trailing"), None);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 0, 60).validate().is_err());
        assert!(DateTimeUtc::new(2024, 13, 15, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_format() {
        let dt = DateTimeUtc::new(2024, 6, 5, 4, 3, 2);
        assert_eq!(dt.to_date_string(), "2024-06-05");
        assert_eq!(DateTimeUtc::from_ymd(987, 1, 2).to_date_string(), "0987-01-02");
    }
}
