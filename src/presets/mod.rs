// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common cameras and telescopes, used to pre-fill calculator inputs.
//!
//! All values are approximate manufacturer specifications.

mod error;

pub use error::PresetError;

use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPreset {
    /// The name used to select this camera on the command line.
    pub key: &'static str,
    pub name: &'static str,
    /// [µm]
    pub pixel_size_microns: f64,
    /// [mm]
    pub sensor_width_mm: f64,
    /// [mm]
    pub sensor_height_mm: f64,
    /// Whether the NPF calculator offers this camera.
    pub npf: bool,
}

impl CameraPreset {
    /// e.g. "Canon EOS R5 (36×24mm, 4.5μm)"
    pub fn label(&self) -> String {
        format!(
            "{} ({}×{}mm, {}μm)",
            self.name, self.sensor_width_mm, self.sensor_height_mm, self.pixel_size_microns
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelescopePreset {
    pub key: &'static str,
    /// e.g. "80mm f/5"
    pub name: &'static str,
    /// [mm]
    pub focal_length_mm: f64,
}

impl TelescopePreset {
    /// e.g. "80mm f/5 (400mm)"
    pub fn label(&self) -> String {
        format!("{} ({}mm)", self.name, self.focal_length_mm)
    }
}

pub static CAMERAS: [CameraPreset; 5] = [
    CameraPreset {
        key: "canon-eos-r5",
        name: "Canon EOS R5",
        pixel_size_microns: 4.5,
        sensor_width_mm: 36.0,
        sensor_height_mm: 24.0,
        npf: true,
    },
    CameraPreset {
        key: "sony-a7r-iv",
        name: "Sony A7R IV",
        pixel_size_microns: 3.76,
        sensor_width_mm: 35.9,
        sensor_height_mm: 24.0,
        npf: true,
    },
    CameraPreset {
        key: "canon-eos-r6",
        name: "Canon EOS R6",
        pixel_size_microns: 5.9,
        sensor_width_mm: 36.0,
        sensor_height_mm: 24.0,
        npf: true,
    },
    CameraPreset {
        key: "nikon-z6",
        name: "Nikon Z6",
        pixel_size_microns: 4.6,
        sensor_width_mm: 35.9,
        sensor_height_mm: 23.9,
        npf: true,
    },
    CameraPreset {
        key: "asi533mc",
        name: "ASI533MC",
        pixel_size_microns: 3.45,
        sensor_width_mm: 17.3,
        sensor_height_mm: 13.0,
        npf: false,
    },
];

pub static TELESCOPES: [TelescopePreset; 5] = [
    TelescopePreset {
        key: "80mm-f5",
        name: "80mm f/5",
        focal_length_mm: 400.0,
    },
    TelescopePreset {
        key: "80mm-f7",
        name: "80mm f/7",
        focal_length_mm: 560.0,
    },
    TelescopePreset {
        key: "100mm-f10",
        name: "100mm f/10",
        focal_length_mm: 1000.0,
    },
    TelescopePreset {
        key: "120mm-f10",
        name: "120mm f/10",
        focal_length_mm: 1200.0,
    },
    TelescopePreset {
        key: "200mm-f10",
        name: "200mm f/10",
        focal_length_mm: 2000.0,
    },
];

lazy_static::lazy_static! {
    pub(crate) static ref CAMERA_KEYS_COMMA_SEPARATED: String =
        CAMERAS.iter().map(|c| c.key).join(", ");

    pub(crate) static ref NPF_CAMERA_KEYS_COMMA_SEPARATED: String =
        npf_cameras().map(|c| c.key).join(", ");

    pub(crate) static ref TELESCOPE_KEYS_COMMA_SEPARATED: String =
        TELESCOPES.iter().map(|t| t.key).join(", ");
}

/// The cameras offered by the NPF calculator.
pub fn npf_cameras() -> impl Iterator<Item = &'static CameraPreset> {
    CAMERAS.iter().filter(|c| c.npf)
}

/// Look up a camera by its key (case insensitive).
pub fn find_camera(key: &str) -> Result<&'static CameraPreset, PresetError> {
    let key = key.trim();
    CAMERAS
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| PresetError::UnknownCamera {
            key: key.to_string(),
            valid: CAMERA_KEYS_COMMA_SEPARATED.as_str(),
        })
}

/// Look up a telescope by its key (case insensitive).
pub fn find_telescope(key: &str) -> Result<&'static TelescopePreset, PresetError> {
    let key = key.trim();
    TELESCOPES
        .iter()
        .find(|t| t.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| PresetError::UnknownTelescope {
            key: key.to_string(),
            valid: TELESCOPE_KEYS_COMMA_SEPARATED.as_str(),
        })
}
