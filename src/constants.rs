//! # Constants and unit aliases for orbitprop
//!
//! This module centralizes the **physical constants** and **conversion factors**
//! shared by the propagator, the element conversions and the planet catalog.
//!
//! ## Overview
//!
//! - Heliocentric gravitational parameter in AU³/day²
//! - Unit conversions (JD ↔ MJD)
//! - Reference epochs (J2000)
//! - Type aliases documenting the unit carried by a plain `f64`

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Heliocentric gravitational parameter μ (AU³/day²)
pub const GM_SUN: f64 = 2.959_122_082_855_9e-4;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², often used in Kepler’s third law
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Sidereal year in days
pub const SIDEREAL_YEAR: f64 = 365.25636;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Julian Date of J2000.0
pub const J2000_JD: f64 = 2_451_545.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
