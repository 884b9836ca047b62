// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The NPF rule: the longest exposure before stars visibly trail.
//!
//! t = (35 × N + 30 × p) / f × cos(d)
//!
//! where N is the f-number, p the pixel size [µm], f the focal length [mm] and
//! d the declination of the target. Sky rotation slows towards the celestial
//! poles, so the allowed exposure is scaled by the declination factor.


use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DEFAULT_NPF_APERTURE, DEFAULT_NPF_DECLINATION_DEG, DEFAULT_NPF_FOCAL_LENGTH_MM,
        DEFAULT_NPF_PIXEL_SIZE_UM, NPF_APERTURE_COEFF, NPF_PIXEL_COEFF, SHARP_STAR_FRACTIONS,
    },
    math::{cos_deg, round2},
    validation::{check_finite, check_positive, clamp_declination, InputError},
};

/// A snapshot of everything the NPF rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureInput {
    /// [mm]
    pub focal_length_mm: f64,

    /// The f-number of the lens, e.g. 2.8 for f/2.8.
    pub aperture_f_number: f64,

    /// [µm]
    pub pixel_size_microns: f64,

    /// The declination of the target [degrees]. 0 is the celestial equator, 90
    /// the north celestial pole. Values outside [-90, 90] are clamped.
    pub declination_deg: f64,
}

impl Default for ExposureInput {
    fn default() -> Self {
        Self {
            focal_length_mm: DEFAULT_NPF_FOCAL_LENGTH_MM,
            aperture_f_number: DEFAULT_NPF_APERTURE,
            pixel_size_microns: DEFAULT_NPF_PIXEL_SIZE_UM,
            declination_deg: DEFAULT_NPF_DECLINATION_DEG,
        }
    }
}

impl ExposureInput {
    /// The declination actually used in the calculation.
    pub fn clamped_declination(&self) -> f64 {
        clamp_declination(self.declination_deg)
    }

    /// Check that all linear quantities are strictly positive and that the
    /// declination is a number.
    pub fn validate(&self) -> Result<(), InputError> {
        check_positive("focal length", self.focal_length_mm)?;
        check_positive("aperture", self.aperture_f_number)?;
        check_positive("pixel size", self.pixel_size_microns)?;
        check_finite("declination", self.declination_deg)?;
        Ok(())
    }
}

/// The maximum exposure time and the formula that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureResult {
    /// Rounded to 2 decimal places [seconds].
    pub exposure_time_s: f64,

    pub formula: String,
}

impl ExposureResult {
    /// The range of exposure times [seconds] recommended for sharper stars,
    /// i.e. 70% to 80% of the maximum, rounded like the maximum.
    pub fn sharp_star_range(&self) -> (f64, f64) {
        let (low, high) = SHARP_STAR_FRACTIONS;
        (
            round2(self.exposure_time_s * low),
            round2(self.exposure_time_s * high),
        )
    }
}

/// Apply the NPF rule. No validation is done; a zero focal length gives an
/// infinite time. Use [`try_compute_exposure`] for unchecked inputs.
pub fn compute_exposure(input: &ExposureInput) -> ExposureResult {
    let ExposureInput {
        focal_length_mm,
        aperture_f_number,
        pixel_size_microns,
        declination_deg: _,
    } = *input;

    let declination_factor = cos_deg(input.clamped_declination());
    let base_time_s =
        (NPF_APERTURE_COEFF * aperture_f_number + NPF_PIXEL_COEFF * pixel_size_microns)
            / focal_length_mm;

    ExposureResult {
        exposure_time_s: round2(base_time_s * declination_factor),
        formula: exposure_formula(input),
    }
}

/// [`compute_exposure`], but only after the input has been validated.
pub fn try_compute_exposure(input: &ExposureInput) -> Result<ExposureResult, InputError> {
    input.validate()?;
    Ok(compute_exposure(input))
}

/// Render the NPF formula with the input values substituted, e.g.
/// `t = (35 × 2.8 + 30 × 4.5) / 50 × cos(0°)`.
pub fn exposure_formula(input: &ExposureInput) -> String {
    format!(
        "t = ({NPF_APERTURE_COEFF} × {} + {NPF_PIXEL_COEFF} × {}) / {} × cos({}°)",
        input.aperture_f_number,
        input.pixel_size_microns,
        input.focal_length_mm,
        // Avoid rendering "-0".
        input.clamped_declination() + 0.0
    )
}
