//! # Constants for satplot
//!
//! This module centralizes the **physical constants** and **conversion factors**
//! used throughout the `satplot` crate.
//!
//! ## Overview
//!
//! - Geophysical constants for the altitude conversion
//! - Unit conversions (degrees ↔ radians, days ↔ minutes)
//!
//! These definitions are used by the orbital state derivation and the plot
//! builder.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of minutes in a solar day
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Earth equatorial reference radius in kilometers used for the altitude
/// conversion. Semi-major axes expressed in Earth radii are scaled by this
/// value and the same value is subtracted to obtain altitude above the
/// reference sphere.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.15;
