//! # Orbital State Deriver
//!
//! Converts 3LE element-line pairs into per-object **altitude** and
//! **inclination** samples.
//!
//! ## Overview
//! -----------------
//! The element-set model itself is a black box: parsing and mean-motion
//! recovery are delegated to the [`sgp4`] crate. This module reads exactly
//! two quantities from the recovered Brouwer orbit:
//!
//! - semi-major axis `a`, in **Earth radii**, obtained from the recovered
//!   mean motion via `a = (ke / n)^(2/3)`,
//! - inclination, in **radians**.
//!
//! and converts them into the sample pair rendered by the plot builder:
//!
//! - `altitude_km = a * 6378.15 - 6378.15` (linear; may be negative for
//!   sub-surface mean elements, not clamped),
//! - `inclination_deg = degrees(inclination)`.
//!
//! The WGS72 geopotential is used throughout, matching the convention of the
//! upstream element-set provider.
//!
//! ## Error Handling
//! -----------------
//! Malformed element lines surface as
//! [`SatplotError::ElementSetParsing`](crate::satplot_errors::SatplotError)
//! and abort the derivation of the whole sample set.

use crate::constants::{DPI, EARTH_EQUATORIAL_RADIUS_KM, MINUTES_PER_DAY, RADEG};
use crate::satplot_errors::SatplotError;
use crate::three_line::ThreeLineSet;

/// Physical orbital state read from one element-set pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// Semi-major axis in Earth radii.
    pub semi_major_axis: f64,
    /// Inclination in radians.
    pub inclination_rad: f64,
}

impl OrbitalState {
    /// Altitude above the reference radius, in kilometers.
    pub fn altitude_km(&self) -> f64 {
        self.semi_major_axis * EARTH_EQUATORIAL_RADIUS_KM - EARTH_EQUATORIAL_RADIUS_KM
    }

    /// Inclination in degrees.
    pub fn inclination_deg(&self) -> f64 {
        self.inclination_rad.to_degrees()
    }
}

/// One plotted sample: the derived altitude/inclination pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSample {
    pub altitude_km: f64,
    pub inclination_deg: f64,
}

/// The per-timestamp collection of samples, request-scoped.
pub type SampleSet = Vec<OrbitalSample>;

/// Construct the physical orbital state for one element-line pair.
///
/// Arguments
/// -----------------
/// * `line1`: first element line, fixed-column TLE format.
/// * `line2`: second element line, fixed-column TLE format.
///
/// Return
/// ----------
/// * The [`OrbitalState`] (semi-major axis in Earth radii, inclination in
///   radians), or [`SatplotError::ElementSetParsing`] if either line cannot
///   be parsed or the elements are out of the model's range.
pub fn derive_state(line1: &str, line2: &str) -> Result<OrbitalState, SatplotError> {
    let elements = sgp4::Elements::from_tle(None, line1.as_bytes(), line2.as_bytes())
        .map_err(|e| SatplotError::ElementSetParsing(e.to_string()))?;

    // Kozai mean elements are converted to Brouwer ones; the recovered mean
    // motion (rad/min) yields the semi-major axis in Earth radii.
    let orbit = sgp4::Orbit::from_kozai_elements(
        &sgp4::WGS72,
        elements.inclination * RADEG,
        elements.right_ascension * RADEG,
        elements.eccentricity,
        elements.argument_of_perigee * RADEG,
        elements.mean_anomaly * RADEG,
        elements.mean_motion * DPI / MINUTES_PER_DAY,
    )
    .map_err(|e| SatplotError::ElementSetParsing(e.to_string()))?;

    Ok(OrbitalState {
        semi_major_axis: (sgp4::WGS72.ke / orbit.mean_motion).powf(2.0 / 3.0),
        inclination_rad: orbit.inclination,
    })
}

/// Derive the altitude/inclination sample for every record of a parsed 3LE
/// payload, in payload order.
///
/// Arguments
/// -----------------
/// * `records`: the parsed payload from the record parser.
///
/// Return
/// ----------
/// * A [`SampleSet`] with one entry per record, or the first
///   [`SatplotError::ElementSetParsing`] encountered.
pub fn derive_samples(records: &ThreeLineSet) -> Result<SampleSet, SatplotError> {
    records
        .element_pairs()
        .map(|(line1, line2)| {
            let state = derive_state(line1, line2)?;
            Ok(OrbitalSample {
                altitude_km: state.altitude_km(),
                inclination_deg: state.inclination_deg(),
            })
        })
        .collect()
}
