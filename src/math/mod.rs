// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use crate::constants::{PI, RESULT_DECIMAL_PLACES};

/// Round a value to the number of decimal places that results are reported
/// with (2). Halves are rounded away from zero.
///
/// # Examples
///
/// `assert_abs_diff_eq!(round2(0.9281925), 0.93);`
#[inline]
pub fn round2(x: f64) -> f64 {
    let scale = 10_f64.powi(RESULT_DECIMAL_PLACES);
    (x * scale).round() / scale
}

/// Cosine of an angle given in degrees. The conversion is done explicitly
/// (d × π / 180) rather than with `to_radians`, so the same float operations
/// happen regardless of platform.
///
/// # Examples
///
/// `assert_abs_diff_eq!(cos_deg(60.0), 0.5);`
#[inline]
pub(crate) fn cos_deg(degrees: f64) -> f64 {
    (degrees * PI / 180.0).cos()
}

/// Is this value expressed with no more than the reported number of decimal
/// places?
#[cfg(test)]
pub(crate) fn has_at_most_two_decimals(x: f64) -> bool {
    let scaled = x * 10_f64.powi(RESULT_DECIMAL_PLACES);
    (scaled - scaled.round()).abs() < 1e-6
}
