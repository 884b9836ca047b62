// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Every calculation is done in double
precision; only the values reported to the user are rounded.
 */

pub use std::f64::consts::PI;

/// The aperture coefficient of the NPF rule [seconds × mm].
pub const NPF_APERTURE_COEFF: f64 = 35.0;

/// The pixel-size coefficient of the NPF rule [seconds × mm / µm].
pub const NPF_PIXEL_COEFF: f64 = 30.0;

/// Arcseconds per radian divided by 1000, i.e. the pixel scale [arcsec] of a
/// 1 µm pixel behind a 1 mm focal length.
pub const ARCSEC_PER_MICRON_PER_MM: f64 = 206.265;

/// Degrees per radian, as used by the field-of-view small-angle
/// approximation.
pub const DEG_PER_RAD_APPROX: f64 = 57.2958;

/// The lowest declination allowed [degrees]. Anything lower is clamped.
pub const MIN_DECLINATION_DEG: f64 = -90.0;

/// The highest declination allowed [degrees]. Anything higher is clamped.
pub const MAX_DECLINATION_DEG: f64 = 90.0;

/// Pixel scales below this value [arcsec/pixel] are "Excellent".
pub const SAMPLING_GOOD_THRESHOLD: f64 = 1.0;

/// Pixel scales at or above this value [arcsec/pixel] are no better than
/// "Fair".
pub const SAMPLING_FAIR_THRESHOLD: f64 = 2.0;

/// Pixel scales at or above this value [arcsec/pixel] are "Poor".
pub const SAMPLING_POOR_THRESHOLD: f64 = 3.0;

/// Reported values are rounded to this many decimal places.
pub const RESULT_DECIMAL_PLACES: i32 = 2;

/// The fractions of the NPF time recommended for sharper stars.
pub const SHARP_STAR_FRACTIONS: (f64, f64) = (0.7, 0.8);

// Form defaults.

/// [mm]
pub const DEFAULT_NPF_FOCAL_LENGTH_MM: f64 = 50.0;
pub const DEFAULT_NPF_APERTURE: f64 = 2.8;
/// [µm]
pub const DEFAULT_NPF_PIXEL_SIZE_UM: f64 = 4.5;
/// [degrees]
pub const DEFAULT_NPF_DECLINATION_DEG: f64 = 0.0;

/// [mm]
pub const DEFAULT_PS_FOCAL_LENGTH_MM: f64 = 1000.0;
/// [µm]
pub const DEFAULT_PS_PIXEL_SIZE_UM: f64 = 4.5;
/// [mm]
pub const DEFAULT_PS_SENSOR_WIDTH_MM: f64 = 36.0;
/// [mm]
pub const DEFAULT_PS_SENSOR_HEIGHT_MM: f64 = 24.0;
