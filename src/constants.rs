//! # Constants and type definitions for Almagest
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `Almagest` library.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants
//! - Unit conversions (degrees ↔ radians, AU ↔ km)
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules: time conversion, the solar and lunar
//! position models, and the coordinate transforms.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const JD2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Earth equatorial radius in kilometers, as used by the lunar horizontal
/// parallax correction
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.14;

/// Mean Earth-Moon distance in kilometers, baseline of the lunar distance series
pub const MOON_MEAN_DISTANCE_KM: f64 = 385_000.56;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Julian centuries since J2000.0
pub type JulianCentury = f64;
