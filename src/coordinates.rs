//! Coordinate systems and the transforms between them.
//!
//! The two position models produce geocentric ecliptic coordinates; this
//! module rotates them to the equatorial frame (right ascension and
//! declination) and projects them onto a given observer's local horizon
//! (azimuth and elevation). Both bodies go through the same horizontal
//! transform so their azimuth conventions are identical.

use nalgebra::Vector3;

use crate::angles::{clamp360, safe_asin};
use crate::constants::{Degree, JulianCentury, JulianDate, Kilometer, RADEG};
use crate::observer::Observer;
use crate::time::gmst_degrees;

/// Geocentric equatorial coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquatorialCoord {
    /// Right ascension in [0, 360)
    pub right_ascension: Degree,
    /// Declination in [-90, 90]
    pub declination: Degree,
}

/// Apparent position of a body on an observer's local sky.
///
/// Azimuth is measured from north through east, in [0, 360); elevation is the
/// angle above the horizon, in [-90, 90]. For the Moon the elevation is
/// topocentric (corrected for horizontal parallax); for the Sun it is
/// geocentric, the solar parallax being negligible at this precision.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HorizontalPosition {
    pub azimuth: Degree,
    pub elevation: Degree,
    pub distance: Kilometer,
}

impl HorizontalPosition {
    /// Unit vector pointing at the body in the observer's local frame
    /// (x east, y north, z up).
    ///
    /// Convenience for consumers orienting a light source or camera from the
    /// returned angles.
    pub fn direction(&self) -> Vector3<f64> {
        let az = self.azimuth * RADEG;
        let el = self.elevation * RADEG;
        Vector3::new(el.cos() * az.sin(), el.cos() * az.cos(), el.sin())
    }
}

/// Mean obliquity of the ecliptic in degrees (Meeus 22.2).
///
/// 23°26′21.448″ at J2000.0, with the secular polynomial in Julian centuries.
pub fn mean_obliquity(t: JulianCentury) -> Degree {
    23.0 + 26.0 / 60.0 + 21.448 / 3600.0
        - (46.8150 * t + 0.00059 * t * t - 0.001813 * t * t * t) / 3600.0
}

/// Rotate geocentric ecliptic coordinates to the equatorial frame.
///
/// Builds the direction cosines of the body, rotates them by the obliquity
/// and recovers right ascension through the half-angle form
/// `atan(Y / (X + R))`, which is quadrant-correct without sign branching.
///
/// Arguments
/// ---------
/// * `longitude`: ecliptic longitude λ in degrees
/// * `latitude`: ecliptic latitude β in degrees
/// * `obliquity`: obliquity of the ecliptic ε in degrees
///
/// Return
/// ------
/// * the corresponding [`EquatorialCoord`]
pub fn equatorial_from_ecliptic(
    longitude: Degree,
    latitude: Degree,
    obliquity: Degree,
) -> EquatorialCoord {
    let (sin_lam, cos_lam) = (longitude * RADEG).sin_cos();
    let (sin_bet, cos_bet) = (latitude * RADEG).sin_cos();
    let (sin_eps, cos_eps) = (obliquity * RADEG).sin_cos();

    let dir = Vector3::new(
        cos_bet * cos_lam,
        cos_eps * cos_bet * sin_lam - sin_eps * sin_bet,
        sin_eps * cos_bet * sin_lam + cos_eps * sin_bet,
    );
    let r = (1.0 - dir.z * dir.z).sqrt();

    let declination = (dir.z / r).atan() / RADEG;
    let ra_hours = (24.0 / std::f64::consts::PI) * (dir.y / (dir.x + r)).atan();

    EquatorialCoord {
        right_ascension: clamp360(ra_hours * 15.0),
        declination,
    }
}

/// Project equatorial coordinates onto an observer's local horizon.
///
/// Computes the Greenwich sidereal time for `jd`, derives the local hour
/// angle `H = θ₀ + longitude − α` and evaluates
///
/// - elevation = asin(sin δ sin φ + cos δ cos φ cos H)
/// - azimuth = atan2(−sin H, cos φ tan δ − sin φ cos H), reduced to [0, 360)
///
/// The atan2 form is continuous across the horizon and free of the
/// `cos(elevation)` singularity of the older arccos-based formula.
pub fn to_horizontal(
    equatorial: &EquatorialCoord,
    jd: JulianDate,
    observer: &Observer,
) -> (Degree, Degree) {
    let lha = gmst_degrees(jd) + observer.longitude - equatorial.right_ascension;

    let h = lha * RADEG;
    let phi = observer.latitude * RADEG;
    let delta = equatorial.declination * RADEG;

    let elevation =
        safe_asin(delta.sin() * phi.sin() + delta.cos() * phi.cos() * h.cos()) / RADEG;
    let azimuth = clamp360((-h.sin()).atan2(phi.cos() * delta.tan() - phi.sin() * h.cos()) / RADEG);

    (azimuth, elevation)
}

#[cfg(test)]
mod coordinates_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_obliquity_j2000() {
        assert_abs_diff_eq!(mean_obliquity(0.0), 23.43929111111111, epsilon = 1e-12);
        // Obliquity decreases slowly with time
        assert!(mean_obliquity(1.0) < mean_obliquity(0.0));
    }

    #[test]
    fn test_equatorial_from_ecliptic_meeus_13a() {
        // Meeus example 13.a: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // yields α = 116.328942°, δ = 28.026183°.
        let eq = equatorial_from_ecliptic(113.215630, 6.684170, 23.4392911);
        assert_abs_diff_eq!(eq.right_ascension, 116.328942, epsilon = 1e-6);
        assert_abs_diff_eq!(eq.declination, 28.026183, epsilon = 1e-6);
    }

    #[test]
    fn test_equatorial_from_ecliptic_degenerate_points() {
        // The equinox direction maps to the origin of both frames.
        let eq = equatorial_from_ecliptic(0.0, 0.0, 23.44);
        assert_abs_diff_eq!(eq.right_ascension, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.declination, 0.0, epsilon = 1e-12);

        // λ = 180° sits on the opposite node, still on the equator.
        let eq = equatorial_from_ecliptic(180.0, 0.0, 23.44);
        assert_abs_diff_eq!(eq.right_ascension, 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.declination, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_horizontal_meeus_13b() {
        // Meeus example 13.b: Venus from Washington, 1987-04-10 19:21:00 UT.
        // Apparent α = 347.3193°, δ = -6.719892°, observer at 77°03′56″ W,
        // 38°55′17″ N. Meeus gives A = 68.0337° from south, h = 15.1249°;
        // measured from north that azimuth is 248.0337°.
        let eq = EquatorialCoord {
            right_ascension: 347.3193,
            declination: -6.719892,
        };
        let observer = Observer::new(
            -(77.0 + 3.0 / 60.0 + 56.0 / 3600.0),
            38.0 + 55.0 / 60.0 + 17.0 / 3600.0,
            None,
        )
        .unwrap();
        let (azimuth, elevation) = to_horizontal(&eq, 2446896.30625, &observer);
        // Mean sidereal time is used here where Meeus uses apparent, hence
        // the few-millidegree slack.
        assert_abs_diff_eq!(azimuth, 248.0337, epsilon = 5e-3);
        assert_abs_diff_eq!(elevation, 15.1249, epsilon = 5e-3);
    }

    #[test]
    fn test_direction_unit_vector() {
        let pos = HorizontalPosition {
            azimuth: 90.0,
            elevation: 0.0,
            distance: 1.0,
        };
        let dir = pos.direction();
        assert_abs_diff_eq!(dir.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.z, 0.0, epsilon = 1e-12);

        let zenith = HorizontalPosition {
            azimuth: 123.0,
            elevation: 90.0,
            distance: 1.0,
        };
        assert_abs_diff_eq!(zenith.direction().z, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(zenith.direction().norm(), 1.0, epsilon = 1e-12);
    }
}
