//! Low-precision solar position model (Meeus chap. 25).
//!
//! Mean orbital elements as polynomials in Julian centuries, the equation of
//! center as a three-term sine series, then the shared ecliptic → equatorial →
//! horizontal pipeline. Accuracy is of the arc-minute class over several
//! centuries around J2000.

use crate::angles::{clamp360, safe_asin};
use crate::constants::{Degree, JulianCentury, AU, RADEG};
use crate::coordinates::{mean_obliquity, to_horizontal, EquatorialCoord, HorizontalPosition};
use crate::observer::Observer;
use crate::time::CivilDateTime;

/// Geometric elements of the Sun's apparent orbit at a given instant.
pub(crate) struct SolarElements {
    /// Geometric mean longitude L, degrees
    pub mean_longitude: Degree,
    /// Mean anomaly M, degrees
    pub mean_anomaly: Degree,
    /// Eccentricity of Earth's orbit (dimensionless)
    pub eccentricity: f64,
    /// Equation of center C, degrees
    pub equation_of_center: Degree,
    /// True longitude λ = L + C, degrees, reduced to [0, 360)
    pub true_longitude: Degree,
    /// True anomaly v = M + C, degrees
    pub true_anomaly: Degree,
}

/// Propagate the solar mean elements to the epoch `t` (Julian centuries
/// since J2000.0) and apply the equation of center.
pub(crate) fn solar_elements(t: JulianCentury) -> SolarElements {
    let mean_longitude = 280.46645 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly =
        357.52910 + 35999.05030 * t - 0.0001559 * t * t - 0.00000048 * t * t * t;
    let eccentricity = 0.016708617 - 0.000042037 * t - 0.0000001236 * t * t;

    let m = mean_anomaly * RADEG;
    let equation_of_center = (1.9146 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000290 * (3.0 * m).sin();

    SolarElements {
        mean_longitude,
        mean_anomaly,
        eccentricity,
        equation_of_center,
        true_longitude: clamp360(mean_longitude + equation_of_center),
        true_anomaly: mean_anomaly + equation_of_center,
    }
}

/// Apparent position of the Sun for a given instant and observer.
///
/// Arguments
/// ---------
/// * `dt`: the instant, as a validated [`CivilDateTime`]
/// * `observer`: the observing site (longitude east, latitude north)
///
/// Return
/// ------
/// * a [`HorizontalPosition`]: azimuth from north through east in [0, 360),
///   geocentric elevation in [-90, 90], Sun-Earth distance in km
pub fn sun_position(dt: &CivilDateTime, observer: &Observer) -> HorizontalPosition {
    let jd = dt.julian_date();
    let t = dt.julian_centuries();
    let elements = solar_elements(t);

    let epsilon = mean_obliquity(t) * RADEG;
    let lambda = elements.true_longitude * RADEG;

    // The Sun sits on the ecliptic (β = 0), so the equatorial conversion
    // collapses to the closed forms below; atan2 keeps the right ascension
    // quadrant-correct near λ = 0 and 180°.
    let declination = safe_asin(epsilon.sin() * lambda.sin()) / RADEG;
    let right_ascension =
        clamp360((epsilon.cos() * lambda.sin()).atan2(lambda.cos()) / RADEG);

    let equatorial = EquatorialCoord {
        right_ascension,
        declination,
    };
    let (azimuth, elevation) = to_horizontal(&equatorial, jd, observer);

    let e = elements.eccentricity;
    let v = elements.true_anomaly * RADEG;
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * v.cos());

    HorizontalPosition {
        azimuth,
        elevation,
        distance: distance_au * AU,
    }
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_solar_elements_meeus_25a() {
        // Meeus example 25.a: 1992 October 13.0 TD, T = -0.072183436.
        let t = -0.072183436;
        let elements = solar_elements(t);
        assert_abs_diff_eq!(clamp360(elements.mean_longitude), 201.80720, epsilon = 1e-4);
        assert_abs_diff_eq!(clamp360(elements.mean_anomaly), 278.99397, epsilon = 1e-4);
        assert_abs_diff_eq!(elements.eccentricity, 0.016711668, epsilon = 1e-7);
        assert_abs_diff_eq!(elements.equation_of_center, -1.89732, epsilon = 1e-5);
        assert_abs_diff_eq!(elements.true_longitude, 199.90988, epsilon = 1e-4);
    }

    #[test]
    fn test_sun_near_zenith_at_equinox_noon() {
        // At the Greenwich meridian on the 2000 March equinox, local solar
        // noon puts the Sun close to the zenith for an equatorial observer.
        let dt = CivilDateTime::new(2000, 3, 20, 12, 0, 0).unwrap();
        let observer = Observer::new(0.0, 0.0, None).unwrap();
        let pos = sun_position(&dt, &observer);
        assert!(
            pos.elevation > 87.0,
            "expected near-zenith Sun, got elevation {}",
            pos.elevation
        );
    }

    #[test]
    fn test_sun_distance_perihelion_vs_aphelion() {
        let observer = Observer::new(0.0, 0.0, None).unwrap();
        let perihelion = sun_position(
            &CivilDateTime::new(2000, 1, 3, 0, 0, 0).unwrap(),
            &observer,
        );
        let aphelion = sun_position(
            &CivilDateTime::new(2000, 7, 4, 0, 0, 0).unwrap(),
            &observer,
        );
        assert!(perihelion.distance < aphelion.distance);
        assert_abs_diff_eq!(perihelion.distance, 147.1e6, epsilon = 0.5e6);
        assert_abs_diff_eq!(aphelion.distance, 152.1e6, epsilon = 0.5e6);
    }

    #[test]
    fn test_sun_position_golden_boulder() {
        // Cross-check against the NREL SPA reference scenario:
        // 2003-10-17 12:30:30 local (UTC-7) at Boulder, CO (-105.1786, 39.742).
        // SPA reports topocentric azimuth 194.34°, elevation ~39.9°.
        let dt = CivilDateTime::with_utc_offset(2003, 10, 17, 12, 30, 30, -7).unwrap();
        let observer = Observer::new(-105.1786, 39.742, None).unwrap();
        let pos = sun_position(&dt, &observer);
        assert_abs_diff_eq!(pos.azimuth, 194.3278717905267, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.elevation, 39.87184280370979, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.distance, 149080201.14263025, epsilon = 1e-3);
    }
}
