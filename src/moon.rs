//! Truncated lunar position model (Meeus chap. 47, ELP2000-derived series).
//!
//! Five mean elements and three planetary perturbation angles feed the
//! 60-term periodic tables of `lunar_tables`; the summed corrections
//! give the geocentric ecliptic longitude, latitude and distance of the Moon.
//! The horizontal output applies the lunar parallax correction, which matters
//! here (up to ~1°) because of the Moon's proximity.

use crate::angles::{clamp360, safe_asin};
use crate::constants::{
    Degree, JulianCentury, Kilometer, EARTH_EQUATORIAL_RADIUS_KM, MOON_MEAN_DISTANCE_KM, RADEG,
};
use crate::coordinates::{
    equatorial_from_ecliptic, mean_obliquity, to_horizontal, HorizontalPosition,
};
use crate::lunar_tables::{LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS};
use crate::observer::Observer;
use crate::time::CivilDateTime;

/// Mean elements and auxiliary angles of the lunar theory at a given instant.
///
/// All angles are in degrees, reduced to [0, 360). `e` is the Earth-orbit
/// eccentricity correction factor, a near-1.0 multiplier, and is deliberately
/// not angle-reduced.
pub(crate) struct LunarElements {
    /// Mean longitude L′
    pub mean_longitude: Degree,
    /// Mean elongation from the Sun D
    pub mean_elongation: Degree,
    /// Sun mean anomaly M
    pub sun_mean_anomaly: Degree,
    /// Moon mean anomaly M′
    pub moon_mean_anomaly: Degree,
    /// Argument of latitude F
    pub argument_of_latitude: Degree,
    /// Venus perturbation angle A1
    pub a1: Degree,
    /// Jupiter perturbation angle A2
    pub a2: Degree,
    /// Third additive perturbation angle A3
    pub a3: Degree,
    /// Eccentricity correction factor E
    pub e: f64,
}

/// Propagate the lunar mean elements to the epoch `t` (Julian centuries
/// since J2000.0). Polynomials from Meeus 47.1–47.7.
pub(crate) fn lunar_elements(t: JulianCentury) -> LunarElements {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    LunarElements {
        mean_longitude: clamp360(
            218.3164477 + 481_267.881_234_21 * t - 0.0015786 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
        ),
        mean_elongation: clamp360(
            297.8501921 + 445_267.111_403_4 * t - 0.0018819 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
        ),
        sun_mean_anomaly: clamp360(
            357.5291092 + 35_999.050_290_9 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        ),
        moon_mean_anomaly: clamp360(
            134.9633964 + 477_198.867_505_5 * t + 0.0087414 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
        ),
        argument_of_latitude: clamp360(
            93.2720950 + 483_202.017_523_3 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        ),
        a1: clamp360(119.75 + 131.849 * t),
        a2: clamp360(53.09 + 479_264.290 * t),
        a3: clamp360(313.45 + 481_266.484 * t),
        e: 1.0 - 0.002516 * t - 0.0000074 * t2,
    }
}

/// Powers of the eccentricity factor keyed on the Sun-anomaly multiplier:
/// terms with |m| = 1 are scaled by E, |m| = 2 by E², others untouched.
fn eccentricity_factor(m: i8, e: f64) -> f64 {
    match m.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    }
}

/// Geocentric ecliptic coordinates of the Moon.
///
/// Sums the 60-row longitude/distance and latitude tables (with the
/// eccentricity rule applied to both), adds the fixed planetary correction
/// terms, and applies the −1.127527° reference-frame offset to the longitude.
///
/// Return
/// ------
/// * `(λ, β, Δ)`: ecliptic longitude in [0, 360), latitude in degrees,
///   Earth-Moon distance in km
pub(crate) fn lunar_ecliptic(t: JulianCentury) -> (Degree, Degree, Kilometer) {
    let el = lunar_elements(t);

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for term in &LONGITUDE_DISTANCE_TERMS {
        let argument = (term.d as f64 * el.mean_elongation
            + term.m as f64 * el.sun_mean_anomaly
            + term.mp as f64 * el.moon_mean_anomaly
            + term.f as f64 * el.argument_of_latitude)
            * RADEG;
        let factor = eccentricity_factor(term.m, el.e);
        sum_l += term.sin_coeff * factor * argument.sin();
        sum_r += term.cos_coeff * factor * argument.cos();
    }

    let mut sum_b = 0.0;
    for term in &LATITUDE_TERMS {
        let argument = (term.d as f64 * el.mean_elongation
            + term.m as f64 * el.sun_mean_anomaly
            + term.mp as f64 * el.moon_mean_anomaly
            + term.f as f64 * el.argument_of_latitude)
            * RADEG;
        sum_b += term.sin_coeff * eccentricity_factor(term.m, el.e) * argument.sin();
    }

    // Fixed additive terms: Venus (A1), Jupiter (A2) and the flattening term
    // in L′−F for the longitude; six literal terms for the latitude.
    sum_l += 3958.0 * (el.a1 * RADEG).sin()
        + 1962.0 * ((el.mean_longitude - el.argument_of_latitude) * RADEG).sin()
        + 318.0 * (el.a2 * RADEG).sin();

    sum_b += -2235.0 * (el.mean_longitude * RADEG).sin()
        + 382.0 * (el.a3 * RADEG).sin()
        + 175.0 * ((el.a1 - el.argument_of_latitude) * RADEG).sin()
        + 175.0 * ((el.a1 + el.argument_of_latitude) * RADEG).sin()
        + 127.0 * ((el.mean_longitude - el.moon_mean_anomaly) * RADEG).sin()
        - 115.0 * ((el.mean_longitude + el.moon_mean_anomaly) * RADEG).sin();

    let longitude = clamp360(el.mean_longitude + sum_l / 1e6 - 1.127527);
    let latitude = sum_b / 1e6;
    let distance = MOON_MEAN_DISTANCE_KM + sum_r / 1e3;

    (longitude, latitude, distance)
}

/// Apparent position of the Moon for a given instant and observer.
///
/// Arguments
/// ---------
/// * `dt`: the instant, as a validated [`CivilDateTime`]
/// * `observer`: the observing site (longitude east, latitude north)
///
/// Return
/// ------
/// * a [`HorizontalPosition`]: azimuth from north through east in [0, 360),
///   topocentric elevation in [-90, 90], Earth-Moon distance in km
///
/// The geocentric elevation is systematically too high by up to ~1° for a
/// surface observer; the horizontal parallax `asin(R⊕/Δ)` is subtracted from
/// it (and the result floored at -90°, which the flat subtraction can
/// otherwise undershoot with the Moon near the nadir).
pub fn moon_position(dt: &CivilDateTime, observer: &Observer) -> HorizontalPosition {
    let jd = dt.julian_date();
    let t = dt.julian_centuries();

    let (longitude, latitude, distance) = lunar_ecliptic(t);
    let equatorial = equatorial_from_ecliptic(longitude, latitude, mean_obliquity(t));
    let (azimuth, elevation) = to_horizontal(&equatorial, jd, observer);

    let parallax = safe_asin(EARTH_EQUATORIAL_RADIUS_KM / distance) / RADEG;

    HorizontalPosition {
        azimuth,
        elevation: (elevation - parallax).max(-90.0),
        distance,
    }
}
