//! # Almagest
//!
//! A self-contained, low-precision ephemeris engine: given an observer
//! location and a civil instant, it computes the apparent position (azimuth,
//! elevation, distance) of the Sun and the Moon as seen from the Earth's
//! surface.
//!
//! The pipeline has four layers, each depending only on the one below:
//!
//! 1. **Time conversion** — calendar fields + UTC offset → Julian Date and
//!    Julian centuries since J2000.0 ([`time`]).
//! 2. **Orbital element propagation** — low-order polynomials in centuries
//!    for the mean elements of the Sun and Moon ([`sun`], [`moon`]).
//! 3. **Periodic-term summation** — the fixed 60-row lunar perturbation
//!    tables combined with the propagated angles (Moon only).
//! 4. **Coordinate transform** — ecliptic → equatorial → horizontal, through
//!    sidereal time and the observer's longitude/latitude ([`coordinates`]).
//!
//! Every entry point is a deterministic, side-effect-free function of its
//! inputs; the only mutable-free shared data are the compile-time coefficient
//! tables, so concurrent invocation from any number of threads is safe by
//! construction. Fallibility is confined to the construction of the input
//! value types ([`CivilDateTime`], [`Observer`]).
//!
//! ```
//! use almagest::{sun_position, moon_position, CivilDateTime, Observer};
//!
//! let dt = CivilDateTime::new(1991, 5, 19, 13, 0, 0).unwrap();
//! let site = Observer::new(10.0, 50.0, None).unwrap();
//!
//! let sun = sun_position(&dt, &site);
//! let moon = moon_position(&dt, &site);
//! assert!(sun.elevation > 0.0 && moon.elevation > 0.0);
//! assert!((0.0..360.0).contains(&moon.azimuth));
//! ```

pub mod almagest_errors;
pub mod angles;
pub mod constants;
pub mod coordinates;
mod lunar_tables;
pub mod moon;
pub mod observer;
pub mod sun;
pub mod time;

pub use almagest_errors::AlmagestError;
pub use angles::clamp360;
pub use coordinates::{EquatorialCoord, HorizontalPosition};
pub use moon::moon_position;
pub use observer::Observer;
pub use sun::sun_position;
pub use time::CivilDateTime;
