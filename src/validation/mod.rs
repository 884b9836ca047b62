// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Checks on calculator inputs.
//!
//! The calculators themselves never validate; a zero focal length simply
//! produces an infinite result. Code that takes inputs from somewhere other
//! than a constrained form should run these checks first.

mod error;

pub use error::InputError;

use crate::constants::{MAX_DECLINATION_DEG, MIN_DECLINATION_DEG};

/// Ensure that a linear quantity (focal length, pixel size, ...) is finite
/// and strictly positive.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { name, value });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { name, value });
    }
    Ok(())
}

/// Ensure that a value is at least a number; used for declinations, which are
/// clamped rather than rejected.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NotFinite { name, value })
    }
}

/// Clamp a declination into [-90, 90] degrees. NaN is passed through.
#[inline]
pub fn clamp_declination(declination_deg: f64) -> f64 {
    declination_deg.clamp(MIN_DECLINATION_DEG, MAX_DECLINATION_DEG)
}
