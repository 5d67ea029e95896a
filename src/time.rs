//! Civil time handling and conversion to Julian Date.
//!
//! The entry point is [`CivilDateTime`], a validated immutable value carrying a
//! Gregorian calendar instant together with a whole-hour UTC offset. All the
//! ephemeris formulas downstream consume the derived [`JulianDate`] and the
//! Julian centuries elapsed since J2000.0.

use hifitime::{Duration, Epoch, TimeScale};

use crate::almagest_errors::AlmagestError;
use crate::angles::clamp360;
use crate::constants::{Degree, JulianCentury, JulianDate, DAYS_PER_CENTURY, JD2000};

/// A validated civil date and time, with a whole-hour offset from UTC.
///
/// Construction rejects impossible calendar fields (e.g. February 30th, the
/// ten days removed by the Gregorian reform in October 1582, an out-of-range
/// UTC offset), so that every existing `CivilDateTime` maps to a well-defined
/// [`JulianDate`]. The value is immutable after construction.
///
/// Dates on or after 1582-10-15 follow the Gregorian calendar; earlier dates
/// are interpreted in the Julian calendar, matching the branch of the Julian
/// Day formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawCivilDateTime")]
pub struct CivilDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    utc_offset_hours: i8,
}

/// Unvalidated field mirror of [`CivilDateTime`], the deserialization
/// gateway. Conversion runs the constructor checks, so a deserialized value
/// satisfies the same guarantees as a constructed one.
#[derive(serde::Deserialize)]
struct RawCivilDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    #[serde(default)]
    utc_offset_hours: i8,
}

impl TryFrom<RawCivilDateTime> for CivilDateTime {
    type Error = AlmagestError;

    fn try_from(raw: RawCivilDateTime) -> Result<Self, Self::Error> {
        Self::with_utc_offset(
            raw.year,
            raw.month,
            raw.day,
            raw.hour,
            raw.minute,
            raw.second,
            raw.utc_offset_hours,
        )
    }
}

impl CivilDateTime {
    /// Build a UTC instant from calendar fields.
    ///
    /// Arguments
    /// ---------
    /// * `year`, `month`, `day`: calendar date (Julian calendar before
    ///   1582-10-15, Gregorian from that day onward)
    /// * `hour`, `minute`, `second`: time of day
    ///
    /// Return
    /// ------
    /// * the validated instant, or [`AlmagestError`] if any field is impossible
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, AlmagestError> {
        Self::with_utc_offset(year, month, day, hour, minute, second, 0)
    }

    /// Build an instant expressed in a local civil time zone.
    ///
    /// The calendar fields are interpreted in the zone `utc_offset_hours`
    /// east of Greenwich (whole hours, in [-12, 12]); the derived Julian Date
    /// refers to the corresponding UTC instant.
    pub fn with_utc_offset(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        utc_offset_hours: i8,
    ) -> Result<Self, AlmagestError> {
        if !(-12..=12).contains(&utc_offset_hours) {
            return Err(AlmagestError::InvalidUtcOffset(utc_offset_hours));
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(AlmagestError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
            return Err(AlmagestError::InvalidDate { year, month, day });
        }
        // The ten days dropped by the Gregorian reform never existed.
        if year == 1582 && month == 10 && (5..=14).contains(&day) {
            return Err(AlmagestError::InvalidDate { year, month, day });
        }
        Ok(CivilDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Build a `CivilDateTime` from a [`hifitime::Epoch`], truncating
    /// sub-second precision.
    ///
    /// hifitime uses the proleptic Gregorian calendar, so this conversion is
    /// only meaningful for epochs after the 1582 calendar reform.
    pub fn from_epoch(epoch: &Epoch) -> Result<Self, AlmagestError> {
        let (year, month, day, hour, minute, second, _nanos) = epoch.to_gregorian_utc();
        Self::new(year, month, day, hour, minute, second)
    }

    /// Convert to a [`hifitime::Epoch`] of the corresponding UTC instant.
    ///
    /// Only meaningful for dates after the 1582 calendar reform, where the
    /// civil calendar and hifitime's proleptic Gregorian calendar agree.
    pub fn to_epoch(&self) -> Epoch {
        let local = Epoch::from_gregorian(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            0,
            TimeScale::UTC,
        );
        local - Duration::from_seconds(self.utc_offset_hours as f64 * 3600.0)
    }

    /// Julian Date of the instant, in the UTC time scale.
    ///
    /// Implements the classical calendar-to-JD algorithm (Meeus, chap. 7):
    /// January and February are shifted into the previous year, the Gregorian
    /// correction `B = 2 − A + ⌊A/4⌋` applies from 1582-10-15 onward, and the
    /// time of day enters as a fractional day. The UTC offset is folded into
    /// the hour term, so a zoned instant and its UTC equivalent produce the
    /// same Julian Date.
    pub fn julian_date(&self) -> JulianDate {
        let utc_hour = self.hour as f64 - self.utc_offset_hours as f64;
        let fractional_day = self.day as f64
            + (utc_hour + (self.minute as f64 + self.second as f64 / 60.0) / 60.0) / 24.0;

        let (mut year, mut month) = (self.year as f64, self.month as f64);
        if self.month <= 2 {
            year -= 1.0;
            month += 12.0;
        }

        let b = if (self.year, self.month, self.day) >= (1582, 10, 15) {
            let a = (year / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        } else {
            0.0
        };

        (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + fractional_day
            + b
            - 1524.5
    }

    /// Julian centuries elapsed since J2000.0 at this instant.
    pub fn julian_centuries(&self) -> JulianCentury {
        julian_centuries(self.julian_date())
    }
}

/// Julian centuries since J2000.0 for a given Julian Date.
pub fn julian_centuries(jd: JulianDate) -> JulianCentury {
    (jd - JD2000) / DAYS_PER_CENTURY
}

/// Fill the number of days of a month, honoring the leap rule in force.
///
/// Years up to 1582 use the Julian rule (every fourth year); later years use
/// the Gregorian century rule.
fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    if year <= 1582 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Greenwich mean sidereal time in degrees for a given Julian Date (UT).
///
/// Implements the polynomial of Meeus chap. 12 (12.4), reduced to [0, 360).
/// Combined with the observer longitude and a body's right ascension this
/// yields the local hour angle used by the horizontal transform.
pub fn gmst_degrees(jd: JulianDate) -> Degree {
    let t = julian_centuries(jd);
    clamp360(
        280.460_618_37 + 360.985_647_366_29 * (jd - JD2000) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_julian_date_j2000() {
        let dt = CivilDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(dt.julian_date(), 2451545.0);
        assert_eq!(dt.julian_centuries(), 0.0);
    }

    #[test]
    fn test_julian_date_known_epochs() {
        let dt = CivilDateTime::new(1991, 5, 19, 13, 0, 0).unwrap();
        assert_eq!(dt.julian_date(), 2448396.0416666665);

        let dt = CivilDateTime::new(1957, 10, 4, 19, 26, 24).unwrap();
        // Sputnik launch epoch, Meeus example 7.a gives JD 2436116.31
        assert!((dt.julian_date() - 2436116.31).abs() < 1e-8);
    }

    #[test]
    fn test_gregorian_reform_boundary() {
        // 1582-10-04 (Julian branch) and 1582-10-15 (Gregorian branch) are
        // consecutive days in the historical calendar.
        let julian_side = CivilDateTime::new(1582, 10, 4, 0, 0, 0).unwrap();
        let gregorian_side = CivilDateTime::new(1582, 10, 15, 0, 0, 0).unwrap();
        assert_eq!(julian_side.julian_date(), 2299159.5);
        assert_eq!(gregorian_side.julian_date(), 2299160.5);
        assert_eq!(
            gregorian_side.julian_date() - julian_side.julian_date(),
            1.0
        );
    }

    #[test]
    fn test_dropped_days_rejected() {
        for day in 5..=14 {
            assert_eq!(
                CivilDateTime::new(1582, 10, day, 0, 0, 0),
                Err(AlmagestError::InvalidDate {
                    year: 1582,
                    month: 10,
                    day
                })
            );
        }
    }

    #[test]
    fn test_invalid_calendar_fields() {
        assert!(CivilDateTime::new(2000, 2, 30, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2000, 13, 1, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2000, 0, 1, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2000, 4, 31, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2000, 1, 1, 24, 0, 0).is_err());
        assert!(CivilDateTime::new(2000, 1, 1, 0, 60, 0).is_err());
        assert!(CivilDateTime::with_utc_offset(2000, 1, 1, 0, 0, 0, 13).is_err());
        assert!(CivilDateTime::with_utc_offset(2000, 1, 1, 0, 0, 0, -13).is_err());
    }

    #[test]
    fn test_leap_year_rules() {
        // Gregorian century rule after the reform
        assert!(CivilDateTime::new(2000, 2, 29, 0, 0, 0).is_ok());
        assert!(CivilDateTime::new(1900, 2, 29, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2024, 2, 29, 0, 0, 0).is_ok());
        // Julian rule before: every fourth year, century years included
        assert!(CivilDateTime::new(1500, 2, 29, 0, 0, 0).is_ok());
        assert!(CivilDateTime::new(1501, 2, 29, 0, 0, 0).is_err());
    }

    #[test]
    fn test_deserialization_gate_validates() {
        // Deserialization goes through RawCivilDateTime, so impossible
        // calendar fields are rejected on that path too.
        let raw = RawCivilDateTime {
            year: 2000,
            month: 13,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_hours: 0,
        };
        assert_eq!(
            CivilDateTime::try_from(raw),
            Err(AlmagestError::InvalidDate {
                year: 2000,
                month: 13,
                day: 1
            })
        );
    }

    #[test]
    fn test_utc_offset_shifts_julian_date() {
        let local = CivilDateTime::with_utc_offset(2024, 6, 15, 13, 0, 0, 2).unwrap();
        let utc = CivilDateTime::new(2024, 6, 15, 11, 0, 0).unwrap();
        assert_eq!(local.julian_date(), utc.julian_date());

        let west = CivilDateTime::with_utc_offset(2024, 6, 15, 13, 0, 0, -5).unwrap();
        let utc = CivilDateTime::new(2024, 6, 15, 18, 0, 0).unwrap();
        assert_eq!(west.julian_date(), utc.julian_date());
    }

    #[test]
    fn test_julian_date_against_hifitime() {
        let cases = [
            (2021, 1, 1, 0, 0, 0),
            (2024, 6, 15, 9, 30, 0),
            (1991, 5, 19, 13, 0, 0),
            (2100, 12, 31, 23, 59, 59),
        ];
        for (y, mo, d, h, mi, s) in cases {
            let dt = CivilDateTime::new(y, mo, d, h, mi, s).unwrap();
            let jde = dt.to_epoch().to_jde_utc_days();
            assert!(
                (dt.julian_date() - jde).abs() < 1e-8,
                "JD mismatch for {y}-{mo}-{d}: {} vs {jde}",
                dt.julian_date()
            );
        }
    }

    #[test]
    fn test_epoch_round_trip() {
        let dt = CivilDateTime::new(2024, 6, 15, 9, 30, 42).unwrap();
        let back = CivilDateTime::from_epoch(&dt.to_epoch()).unwrap();
        assert_eq!(dt, back);

        // A zoned instant converts to its UTC equivalent.
        let local = CivilDateTime::with_utc_offset(2024, 6, 15, 13, 0, 0, 2).unwrap();
        let back = CivilDateTime::from_epoch(&local.to_epoch()).unwrap();
        assert_eq!(back, CivilDateTime::new(2024, 6, 15, 11, 0, 0).unwrap());
    }

    #[test]
    fn test_gmst_degrees() {
        assert_eq!(gmst_degrees(JD2000), 280.46061837);

        let jd = CivilDateTime::new(2024, 6, 15, 22, 0, 0).unwrap().julian_date();
        assert!((gmst_degrees(jd) - 234.6736036199145).abs() < 1e-9);

        // Meeus example 12.b: 1987-04-10 19:21:00 UT, GMST 8h34m57.0896s
        let jd = CivilDateTime::new(1987, 4, 10, 19, 21, 0).unwrap().julian_date();
        let expected = (8.0 + 34.0 / 60.0 + 57.0896 / 3600.0) * 15.0;
        assert!((gmst_degrees(jd) - expected).abs() < 1e-4);
    }
}
