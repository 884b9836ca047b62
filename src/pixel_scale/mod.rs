// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixel scale, field of view and sampling quality of a camera behind a
//! telescope.
//!
//! Pixel scale = (206.265 × p) / f [arcsec/pixel]
//! Field of view = (s × 57.2958) / f [degrees]
//!
//! where p is the pixel size [µm], s a sensor dimension [mm] and f the focal
//! length [mm]. The field of view uses the small-angle approximation.


use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::{
    constants::{
        ARCSEC_PER_MICRON_PER_MM, DEFAULT_PS_FOCAL_LENGTH_MM, DEFAULT_PS_PIXEL_SIZE_UM,
        DEFAULT_PS_SENSOR_HEIGHT_MM, DEFAULT_PS_SENSOR_WIDTH_MM, DEG_PER_RAD_APPROX,
        SAMPLING_FAIR_THRESHOLD, SAMPLING_GOOD_THRESHOLD, SAMPLING_POOR_THRESHOLD,
    },
    math::round2,
    validation::{check_positive, InputError},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelScaleInput {
    /// [mm]
    pub focal_length_mm: f64,

    /// [µm]
    pub pixel_size_microns: f64,

    /// [mm]
    pub sensor_width_mm: f64,

    /// [mm]
    pub sensor_height_mm: f64,
}

impl Default for PixelScaleInput {
    fn default() -> Self {
        Self {
            focal_length_mm: DEFAULT_PS_FOCAL_LENGTH_MM,
            pixel_size_microns: DEFAULT_PS_PIXEL_SIZE_UM,
            sensor_width_mm: DEFAULT_PS_SENSOR_WIDTH_MM,
            sensor_height_mm: DEFAULT_PS_SENSOR_HEIGHT_MM,
        }
    }
}

impl PixelScaleInput {
    /// Check that every quantity is finite and strictly positive.
    pub fn validate(&self) -> Result<(), InputError> {
        check_positive("focal length", self.focal_length_mm)?;
        check_positive("pixel size", self.pixel_size_microns)?;
        check_positive("sensor width", self.sensor_width_mm)?;
        check_positive("sensor height", self.sensor_height_mm)?;
        Ok(())
    }

    /// The pixel scale before any rounding [arcsec/pixel].
    pub fn unrounded_pixel_scale(&self) -> f64 {
        (ARCSEC_PER_MICRON_PER_MM * self.pixel_size_microns) / self.focal_length_mm
    }
}

/// The angular extent of the sky captured by the sensor [degrees].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    pub width_deg: f64,
    pub height_deg: f64,
}

/// How well the pixel scale matches typical seeing (1-3 arcsec). Ordered from
/// the finest to the coarsest sampling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum SamplingClass {
    #[strum(serialize = "Excellent (undersampled)")]
    #[serde(rename = "Excellent (undersampled)")]
    Excellent,

    #[strum(serialize = "Good")]
    #[serde(rename = "Good")]
    Good,

    #[strum(serialize = "Fair (oversampled)")]
    #[serde(rename = "Fair (oversampled)")]
    Fair,

    #[strum(serialize = "Poor (heavily oversampled)")]
    #[serde(rename = "Poor (heavily oversampled)")]
    Poor,
}

impl SamplingClass {
    /// Classify an *unrounded* pixel scale [arcsec/pixel]. Each class includes
    /// its lower bound.
    pub fn from_pixel_scale(arcsec_per_pixel: f64) -> SamplingClass {
        if arcsec_per_pixel < SAMPLING_GOOD_THRESHOLD {
            SamplingClass::Excellent
        } else if arcsec_per_pixel < SAMPLING_FAIR_THRESHOLD {
            SamplingClass::Good
        } else if arcsec_per_pixel < SAMPLING_POOR_THRESHOLD {
            SamplingClass::Fair
        } else {
            SamplingClass::Poor
        }
    }

    /// One line of advice for this class.
    pub fn guidance(self) -> &'static str {
        match self {
            SamplingClass::Excellent => "Excellent (< 1 arcsec/pixel): Undersampled - captures fine detail but may need longer exposures",
            SamplingClass::Good => "Good (1-2 arcsec/pixel): Well-sampled for most seeing conditions",
            SamplingClass::Fair => "Fair (2-3 arcsec/pixel): Oversampled - good for poor seeing conditions",
            SamplingClass::Poor => "Poor (> 3 arcsec/pixel): Heavily oversampled - consider shorter focal length or smaller pixels",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelScaleResult {
    /// Rounded to 2 decimal places [arcsec/pixel].
    pub pixel_scale_arcsec: f64,

    /// Derived from the unrounded pixel scale.
    pub sampling: SamplingClass,

    pub formula: String,

    /// Each dimension rounded to 2 decimal places. Kept last so that the
    /// struct serialises to toml as a trailing table.
    pub field_of_view: FieldOfView,
}

/// Calculate the pixel scale, field of view and sampling class. No validation
/// is done; use [`try_compute_pixel_scale`] for unchecked inputs.
pub fn compute_pixel_scale(input: &PixelScaleInput) -> PixelScaleResult {
    let scale = input.unrounded_pixel_scale();
    let width_deg = (input.sensor_width_mm * DEG_PER_RAD_APPROX) / input.focal_length_mm;
    let height_deg = (input.sensor_height_mm * DEG_PER_RAD_APPROX) / input.focal_length_mm;

    PixelScaleResult {
        pixel_scale_arcsec: round2(scale),
        field_of_view: FieldOfView {
            width_deg: round2(width_deg),
            height_deg: round2(height_deg),
        },
        // Classify before rounding.
        sampling: SamplingClass::from_pixel_scale(scale),
        formula: pixel_scale_formula(input),
    }
}

/// [`compute_pixel_scale`], but only after the input has been validated.
pub fn try_compute_pixel_scale(input: &PixelScaleInput) -> Result<PixelScaleResult, InputError> {
    input.validate()?;
    Ok(compute_pixel_scale(input))
}

/// Render the pixel-scale formula with the input values substituted and the
/// result rounded the same way as [`PixelScaleResult::pixel_scale_arcsec`], e.g.
/// `Pixel Scale = (206.265 × 4.5) / 1000 = 0.93 arcsec/pixel`.
pub fn pixel_scale_formula(input: &PixelScaleInput) -> String {
    format!(
        "Pixel Scale = ({ARCSEC_PER_MICRON_PER_MM} × {}) / {} = {:.2} arcsec/pixel",
        input.pixel_size_microns,
        input.focal_length_mm,
        round2(input.unrounded_pixel_scale())
    )
}
