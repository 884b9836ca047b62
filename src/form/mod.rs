// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Form state for each calculator.
//!
//! A form owns the values currently entered and the result of the last
//! calculation. Editing a value never recomputes anything; only
//! `calculate` does, by handing a snapshot of the inputs to the pure
//! calculator function.


use log::trace;

use crate::{
    exposure::{compute_exposure, ExposureInput, ExposureResult},
    pixel_scale::{compute_pixel_scale, PixelScaleInput, PixelScaleResult},
    presets::{CameraPreset, TelescopePreset},
};

#[derive(Debug, Clone, Default)]
pub struct ExposureForm {
    input: ExposureInput,
    result: Option<ExposureResult>,
}

impl ExposureForm {
    pub fn new(input: ExposureInput) -> Self {
        Self {
            input,
            result: None,
        }
    }

    pub fn input(&self) -> &ExposureInput {
        &self.input
    }

    /// The result of the last [`ExposureForm::calculate`], if any.
    pub fn result(&self) -> Option<&ExposureResult> {
        self.result.as_ref()
    }

    pub fn set_focal_length(&mut self, focal_length_mm: f64) {
        self.input.focal_length_mm = focal_length_mm;
    }

    pub fn set_aperture(&mut self, aperture_f_number: f64) {
        self.input.aperture_f_number = aperture_f_number;
    }

    pub fn set_pixel_size(&mut self, pixel_size_microns: f64) {
        self.input.pixel_size_microns = pixel_size_microns;
    }

    pub fn set_declination(&mut self, declination_deg: f64) {
        self.input.declination_deg = declination_deg;
    }

    /// Only the pixel size of a camera matters to the NPF rule.
    pub fn apply_camera(&mut self, camera: &CameraPreset) {
        trace!("Applying camera preset {}", camera.key);
        self.set_pixel_size(camera.pixel_size_microns);
    }

    pub fn apply_telescope(&mut self, telescope: &TelescopePreset) {
        trace!("Applying telescope preset {}", telescope.key);
        self.set_focal_length(telescope.focal_length_mm);
    }

    pub fn calculate(&mut self) -> &ExposureResult {
        let snapshot = self.input;
        self.result.insert(compute_exposure(&snapshot))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PixelScaleForm {
    input: PixelScaleInput,
    result: Option<PixelScaleResult>,
}

impl PixelScaleForm {
    pub fn new(input: PixelScaleInput) -> Self {
        Self {
            input,
            result: None,
        }
    }

    pub fn input(&self) -> &PixelScaleInput {
        &self.input
    }

    pub fn result(&self) -> Option<&PixelScaleResult> {
        self.result.as_ref()
    }

    pub fn set_focal_length(&mut self, focal_length_mm: f64) {
        self.input.focal_length_mm = focal_length_mm;
    }

    pub fn set_pixel_size(&mut self, pixel_size_microns: f64) {
        self.input.pixel_size_microns = pixel_size_microns;
    }

    pub fn set_sensor_width(&mut self, sensor_width_mm: f64) {
        self.input.sensor_width_mm = sensor_width_mm;
    }

    pub fn set_sensor_height(&mut self, sensor_height_mm: f64) {
        self.input.sensor_height_mm = sensor_height_mm;
    }

    pub fn apply_camera(&mut self, camera: &CameraPreset) {
        trace!("Applying camera preset {}", camera.key);
        self.set_sensor_width(camera.sensor_width_mm);
        self.set_sensor_height(camera.sensor_height_mm);
        self.set_pixel_size(camera.pixel_size_microns);
    }

    pub fn apply_telescope(&mut self, telescope: &TelescopePreset) {
        trace!("Applying telescope preset {}", telescope.key);
        self.set_focal_length(telescope.focal_length_mm);
    }

    pub fn calculate(&mut self) -> &PixelScaleResult {
        let snapshot = self.input;
        self.result.insert(compute_pixel_scale(&snapshot))
    }
}
